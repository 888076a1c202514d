//! Relay protocol for head-soccer matches
//!
//! Uses postcard for efficient binary serialization

use game_core::{Buttons, Match, MatchResult, Score, Side, Snapshot, SnapshotError};
use log::warn;
use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Five-character room code shared by both peers
pub type RoomCode = [u8; 5];

/// Parse a room code from its printable form
pub fn room_code(code: &str) -> Option<RoomCode> {
    let bytes: RoomCode = code.as_bytes().try_into().ok()?;
    bytes
        .iter()
        .all(u8::is_ascii_alphanumeric)
        .then(|| bytes.map(|b| b.to_ascii_uppercase()))
}

// ============================================================================
// Relay Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RelayEvent {
    /// Full authoritative state from the host
    State(Snapshot),

    /// Held buttons of the sending peer's footballer
    Input { side: Side, buttons: Buttons },

    /// A goal with the score after it
    Goal { scorer: Side, score: Score },

    /// Final result, sent once
    Victory(MatchResult),
}

/// A relay event addressed to a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub room: RoomCode,
    pub event: RelayEvent,
}

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error("codec error: {0}")]
    Codec(#[from] postcard::Error),

    #[error("envelope for room {got:?}, expected {expected:?}")]
    RoomMismatch { expected: RoomCode, got: RoomCode },

    #[error("input for {0:?} cannot come from the remote peer")]
    WrongSide(Side),

    #[error("rejected state: {0}")]
    Snapshot(#[from] SnapshotError),
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Envelope {
    /// Serialize envelope to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtoError> {
        Ok(to_allocvec(self)?)
    }

    /// Deserialize envelope from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtoError> {
        Ok(from_bytes(bytes)?)
    }
}

// ============================================================================
// Relay Link
// ============================================================================

/// One peer's end of a human-vs-human relay
///
/// The host owns the authoritative simulation and publishes state, goals and
/// the result; both peers publish their own inputs.
#[derive(Debug, Clone)]
pub struct RelayLink {
    pub room: RoomCode,
    pub local_side: Side,
    pub host: bool,
    last_state_tick: Option<u64>,
    result_sent: bool,
}

impl RelayLink {
    pub fn new(room: RoomCode, local_side: Side, host: bool) -> Self {
        Self {
            room,
            local_side,
            host,
            last_state_tick: None,
            result_sent: false,
        }
    }

    fn envelope(&self, event: RelayEvent) -> Envelope {
        Envelope {
            room: self.room,
            event,
        }
    }

    /// Envelopes to publish after the local tick
    pub fn outbound(&mut self, m: &Match, buttons: Buttons) -> Vec<Envelope> {
        let mut out = vec![self.envelope(RelayEvent::Input {
            side: self.local_side,
            buttons,
        })];
        if !self.host {
            return out;
        }

        if let Some(scorer) = m.events.goal {
            out.push(self.envelope(RelayEvent::Goal {
                scorer,
                score: m.score,
            }));
        }
        if let Some(result) = m.result {
            if !self.result_sent {
                self.result_sent = true;
                out.push(self.envelope(RelayEvent::Victory(result)));
            }
        }

        let interval = u64::from(m.config.snapshot_interval.max(1));
        let due = m.tick % interval == 0 && self.last_state_tick != Some(m.tick);
        if due {
            if let Some(snapshot) = m.snapshot() {
                self.last_state_tick = Some(m.tick);
                out.push(self.envelope(RelayEvent::State(snapshot)));
            }
        }
        out
    }

    /// Decode an inbound envelope and apply it to the local match
    ///
    /// A rejected envelope leaves the match untouched.
    pub fn apply_inbound(&mut self, m: &mut Match, bytes: &[u8]) -> Result<(), ProtoError> {
        let applied = Envelope::from_bytes(bytes).and_then(|envelope| self.apply(m, envelope));
        if let Err(err) = &applied {
            warn!("Dropped relay message: {}", err);
        }
        applied
    }

    fn apply(&mut self, m: &mut Match, envelope: Envelope) -> Result<(), ProtoError> {
        if envelope.room != self.room {
            return Err(ProtoError::RoomMismatch {
                expected: self.room,
                got: envelope.room,
            });
        }

        match envelope.event {
            RelayEvent::Input { side, buttons } => {
                if side == self.local_side {
                    return Err(ProtoError::WrongSide(side));
                }
                m.set_buttons(side, buttons);
            }
            RelayEvent::State(snapshot) => m.apply_snapshot(&snapshot)?,
            RelayEvent::Goal { scorer, score } => m.apply_goal_update(scorer, score)?,
            RelayEvent::Victory(result) => {
                m.apply_remote_result(result)?;
                self.result_sent = true;
            }
        }
        Ok(())
    }
}
