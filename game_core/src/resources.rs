use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::Params;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
///
/// Every random draw in the simulation goes through this one seeded source.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from the platform entropy source
    #[cfg(feature = "getrandom")]
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Final outcome of a match, emitted once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Side,
    pub left: u8,
    pub right: u8,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    /// Side that scored this tick
    pub goal: Option<Side>,
    pub header: bool,
    pub power_kick: bool,
    pub tackle: bool,
    pub ultimate_cast: bool,
    pub bound_applied: bool,
    pub wall_hit: bool,
    /// Ball touched a head zone
    pub head_hit: bool,
    /// Ball touched a body zone
    pub body_hit: bool,
    pub anti_stick: bool,
    pub match_over: Option<MatchResult>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fold a later tick's events into this set
    pub fn merge(&mut self, later: &Events) {
        self.goal = later.goal.or(self.goal);
        self.header |= later.header;
        self.power_kick |= later.power_kick;
        self.tackle |= later.tackle;
        self.ultimate_cast |= later.ultimate_cast;
        self.bound_applied |= later.bound_applied;
        self.wall_hit |= later.wall_hit;
        self.head_hit |= later.head_hit;
        self.body_hit |= later.body_hit;
        self.anti_stick |= later.anti_stick;
        self.match_over = later.match_over.or(self.match_over);
    }
}

/// Post-goal celebration progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Celebration {
    pub elapsed: u32,
    pub duration: u32,
    pub scorer: Side,
}

impl Celebration {
    pub fn progress(&self) -> f32 {
        if self.duration == 0 {
            1.0
        } else {
            (self.elapsed as f32 / self.duration as f32).min(1.0)
        }
    }
}

/// Match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Running,
    Celebrating(Celebration),
    ResettingDelay { remaining: u32 },
    Finished,
}

impl MatchPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, MatchPhase::Running)
    }
}

/// A falling ultimate marker on its way down to the bound target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UltimateStrike {
    pub caster: Side,
    pub target: Side,
    /// Horizontal position the marker falls along
    pub x: f32,
    /// Current marker height
    pub y: f32,
    /// Target body centre height when the ultimate was cast
    pub target_y: f32,
}

impl UltimateStrike {
    pub fn new(caster: Side, target_center: glam::Vec2) -> Self {
        Self {
            caster,
            target: caster.opponent(),
            x: target_center.x,
            y: Params::FIELD_TOP - Params::ULTIMATE_START_ABOVE_TOP,
            target_y: target_center.y,
        }
    }

    /// Descend one tick; returns true once the marker has reached its target
    pub fn advance(&mut self) -> bool {
        self.y += Params::ULTIMATE_FALL_SPEED;
        self.arrived()
    }

    pub fn arrived(&self) -> bool {
        self.y >= self.target_y + Params::ULTIMATE_ARRIVAL_BELOW
    }
}
