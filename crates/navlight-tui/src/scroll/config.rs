//! Configuration helpers for smooth scrolling

use std::time::Duration;

pub use navlight_core::{EasingType, ScrollConfig};

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Frame time for the configured FPS
    fn animation_tick_duration(&self) -> Duration;

    fn is_smooth(&self) -> bool;

    /// Same timing, linear curve: the scroll used when the engine is unavailable
    fn linear_fallback(&self) -> ScrollConfig;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }

    fn linear_fallback(&self) -> ScrollConfig {
        ScrollConfig {
            easing: EasingType::Linear,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration_ms, 1300);
        assert_eq!(config.easing, EasingType::Expo);
        assert_eq!(config.animation_fps, 60);
    }

    #[test]
    fn test_tick_duration() {
        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_linear_fallback_keeps_timing() {
        let fallback = ScrollConfig::default().linear_fallback();
        assert_eq!(fallback.easing, EasingType::Linear);
        assert_eq!(fallback.animation_duration_ms, 1300);
    }
}
