//! Volume control
//!
//! Volume is a 0-100 level with an independent mute flag. The media element
//! takes a linear 0.0-1.0 volume, so the gain is simply `level / 100`.

/// Volume controller
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller, clamping `level` to 100
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level (0-100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Mute audio (preserves volume level)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute audio (restores previous volume)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Linear gain for the media element
    ///
    /// Returns 0.0 if muted
    pub fn gain(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            f64::from(self.level) / 100.0
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_volume_level() {
        let mut vol = Volume::new(50);
        assert_eq!(vol.level(), 50);

        vol.set_level(75);
        assert_eq!(vol.level(), 75);

        // Clamp to 100
        vol.set_level(150);
        assert_eq!(vol.level(), 100);
        assert_eq!(Volume::new(200).level(), 100);
    }

    #[test]
    fn mute_preserves_level() {
        let mut vol = Volume::new(80);

        vol.mute();
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 80);
        assert_eq!(vol.gain(), 0.0);

        vol.unmute();
        assert!(!vol.is_muted());
        assert!((vol.gain() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn toggle_mute() {
        let mut vol = Volume::default();
        vol.toggle_mute();
        assert!(vol.is_muted());
        vol.toggle_mute();
        assert!(!vol.is_muted());
    }

    #[test]
    fn gain_is_linear() {
        assert_eq!(Volume::new(0).gain(), 0.0);
        assert!((Volume::new(25).gain() - 0.25).abs() < 1e-9);
        assert!((Volume::new(100).gain() - 1.0).abs() < 1e-9);
    }
}
