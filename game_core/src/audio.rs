/// Volume and play state handed to whatever plays the soundtrack
///
/// Nothing flows back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioControl {
    volume: f32,
    playing: bool,
}

impl AudioControl {
    pub const DEFAULT_VOLUME: f32 = 0.7;

    pub fn new() -> Self {
        Self {
            volume: Self::DEFAULT_VOLUME,
            playing: false,
        }
    }

    /// Set the volume, clamped to 0..=1; a non-finite level is ignored
    pub fn set_volume(&mut self, level: f32) {
        if level.is_finite() {
            self.volume = level.clamp(0.0, 1.0);
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Flip between playing and paused; returns true if now playing
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Default for AudioControl {
    fn default() -> Self {
        Self::new()
    }
}
