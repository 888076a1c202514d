use crate::Params;
use serde::{Deserialize, Serialize};

/// Who drives the right-hand footballer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Right side is the built-in opponent AI
    VsAi,
    /// Right side is a remote human whose intents arrive over the relay
    Versus,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: MatchMode,
    pub win_score: u8,
    pub celebration_ticks: u32,
    pub reset_delay_ticks: u32,
    pub power_kick_cooldown: u32,
    pub ultimate_cooldown: u32,
    pub bound_duration: u32,
    pub player_speed: f32,
    pub ai_speed: f32,
    pub snapshot_interval: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: MatchMode::VsAi,
            win_score: Params::WIN_SCORE,
            celebration_ticks: Params::CELEBRATION_TICKS,
            reset_delay_ticks: Params::RESET_DELAY_TICKS,
            power_kick_cooldown: Params::POWER_KICK_COOLDOWN,
            ultimate_cooldown: Params::ULTIMATE_COOLDOWN,
            bound_duration: Params::BOUND_DURATION,
            player_speed: Params::PLAYER_SPEED,
            ai_speed: Params::AI_SPEED,
            snapshot_interval: Params::SNAPSHOT_INTERVAL,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for a human-vs-human match over the relay
    pub fn versus() -> Self {
        Self {
            mode: MatchMode::Versus,
            ..Self::default()
        }
    }

    /// Longest value any cooldown timer may legitimately hold
    pub fn max_timer(&self) -> u32 {
        self.power_kick_cooldown
            .max(self.ultimate_cooldown)
            .max(self.bound_duration)
            .max(Params::AI_ACTION_COOLDOWN + Params::AI_KICK_EXTRA_COOLDOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_vs_ai() {
        let config = Config::new();
        assert_eq!(config.mode, MatchMode::VsAi);
        assert_eq!(config.win_score, 5);
    }

    #[test]
    fn test_versus_keeps_other_defaults() {
        let config = Config::versus();
        assert_eq!(config.mode, MatchMode::Versus);
        assert_eq!(config.power_kick_cooldown, Params::POWER_KICK_COOLDOWN);
    }

    #[test]
    fn test_max_timer_is_ultimate_cooldown() {
        let config = Config::new();
        assert_eq!(config.max_timer(), Params::ULTIMATE_COOLDOWN);
    }
}
