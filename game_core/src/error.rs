use thiserror::Error;

use crate::Side;

/// Reasons an authoritative snapshot, goal or result is refused
///
/// A refused update leaves the local match untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapshotError {
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    #[error("{what} at ({x}, {y}) lies outside the field")]
    OutOfField { what: &'static str, x: f32, y: f32 },

    #[error("score {left}-{right} exceeds the win threshold {win_score}")]
    ScoreOutOfRange { left: u8, right: u8, win_score: u8 },

    #[error("phase disagrees with score {left}-{right}")]
    InconsistentPhase { left: u8, right: u8 },

    #[error("goal for {scorer:?} at {left}-{right} does not follow the local score")]
    StaleGoal { scorer: Side, left: u8, right: u8 },

    #[error("result {left}-{right} does not make {winner:?} the winner")]
    InvalidResult { winner: Side, left: u8, right: u8 },

    #[error("{what} timer {value} exceeds its maximum {max}")]
    TimerOutOfRange {
        what: &'static str,
        value: u32,
        max: u32,
    },
}
