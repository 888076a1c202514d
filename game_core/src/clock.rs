use crate::Params;

/// Fixed-step accumulator decoupling simulation ticks from frame rate
///
/// Each frame's elapsed time is clamped to `Params::MAX_DT` before it is
/// accumulated, so a stalled frame yields a bounded burst of steps.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    accumulator: f32,
    paused: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed` seconds and return how many whole fixed steps to run
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if self.paused || !elapsed.is_finite() {
            return 0;
        }

        self.accumulator += elapsed.clamp(0.0, Params::MAX_DT);
        let mut steps = 0;
        while self.accumulator >= Params::FIXED_DT {
            self.accumulator -= Params::FIXED_DT;
            steps += 1;
        }
        steps
    }

    /// Flip the paused state; returns true if now paused
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fraction of a step carried over, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / Params::FIXED_DT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_step_per_display_frame() {
        let mut clock = FrameClock::new();
        let total: u32 = (0..60).map(|_| clock.advance(Params::FIXED_DT)).sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn test_fast_display_accumulates() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(Params::FIXED_DT / 2.0), 0);
        assert!(clock.alpha() > 0.0);
        assert_eq!(clock.advance(Params::FIXED_DT / 2.0), 1);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut clock = FrameClock::new();
        let steps = clock.advance(5.0);
        assert!((5..=6).contains(&steps), "a stall should run at most 6 steps, got {steps}");
    }

    #[test]
    fn test_pause_freezes_accumulation() {
        let mut clock = FrameClock::new();
        assert!(clock.toggle_pause());
        assert_eq!(clock.advance(0.05), 0);
        assert!(!clock.toggle_pause());
        assert_eq!(clock.alpha(), 0.0, "time spent paused is dropped");
        assert_eq!(clock.advance(Params::FIXED_DT), 1);
    }

    #[test]
    fn test_bad_elapsed_is_ignored() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }
}
