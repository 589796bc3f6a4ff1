//! Tween playback for the preview
//!
//! Entrance tweens are registered when a page loads. Load-triggered tweens
//! start immediately, visibility-triggered ones the first time their
//! element crosses the trigger line. Rendering asks for a `Pose`.

use std::time::Instant;

use navlight_core::animation::{is_triggered, AnimationEngine, Trigger, Tween};
use navlight_core::{Error, Result};

/// How far along an element is in its entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Eased progress in [0, 1]
    pub progress: f64,
    /// Rows below the natural position
    pub offset_rows: u16,
    /// False while a fading element is still fully transparent
    pub visible: bool,
}

impl Pose {
    pub const SETTLED: Pose = Pose {
        progress: 1.0,
        offset_rows: 0,
        visible: true,
    };
}

#[derive(Debug, Clone)]
struct Entry {
    tween: Tween,
    fired_at: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct Timeline {
    loaded_at: Instant,
    entries: Vec<Entry>,
    /// Pixels per terminal row, for converting pixel offsets
    row_px: f64,
}

impl Timeline {
    pub fn new(row_px: f64) -> Self {
        Self {
            loaded_at: Instant::now(),
            entries: Vec::new(),
            row_px,
        }
    }

    /// Drop all tweens and restart the load clock
    pub fn restart(&mut self) {
        self.loaded_at = Instant::now();
        self.entries.clear();
    }

    /// Seconds since the page loaded
    pub fn since_load(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.loaded_at).as_secs_f64()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start visibility tweens whose element crossed the trigger line.
    /// `element_top` gives an element's top relative to the viewport.
    pub fn fire_visible<F>(&mut self, element_top: F, viewport_height: f64, now: Instant)
    where
        F: Fn(&str) -> Option<f64>,
    {
        for entry in self.entries.iter_mut().filter(|e| e.fired_at.is_none()) {
            let Some(top) = element_top(&entry.tween.target) else {
                continue;
            };
            if is_triggered(entry.tween.trigger, top, viewport_height) {
                tracing::debug!(selector = %entry.tween.target, "Reveal triggered");
                entry.fired_at = Some(now);
            }
        }
    }

    /// Current pose of `target`; elements without a tween are settled
    pub fn pose(&self, target: &str, now: Instant) -> Pose {
        let Some(entry) = self.entries.iter().find(|e| e.tween.target == target) else {
            return Pose::SETTLED;
        };
        let tween = &entry.tween;
        let progress = match entry.fired_at {
            Some(fired) => tween.progress(now.saturating_duration_since(fired).as_secs_f64()),
            None => 0.0,
        };

        // y_percent is relative to the element's own height: one row
        let from_rows = tween.from.y_percent / 100.0 + tween.from.y / self.row_px;
        Pose {
            progress,
            offset_rows: (from_rows * (1.0 - progress)).round().max(0.0) as u16,
            visible: !tween.from.fade_in || progress > 0.0,
        }
    }

    /// Some fired tween has not finished yet
    pub fn is_running(&self, now: Instant) -> bool {
        self.entries.iter().any(|e| match e.fired_at {
            Some(fired) => !e
                .tween
                .is_finished(now.saturating_duration_since(fired).as_secs_f64()),
            None => false,
        })
    }
}

impl AnimationEngine for Timeline {
    fn register(&mut self, tween: Tween) -> Result<()> {
        if !tween.duration.is_finite() || tween.duration < 0.0 || !tween.delay.is_finite() {
            return Err(Error::Other(format!(
                "invalid timing (duration {}, delay {})",
                tween.duration, tween.delay
            )));
        }
        let fired_at = match tween.trigger {
            Trigger::OnLoad => Some(self.loaded_at),
            Trigger::OnVisible { .. } => None,
        };
        self.entries.push(Entry { tween, fired_at });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navlight_core::animation::{
        hero_support_tweens, register_all, reveal_tweens, RevealTarget, HERO_SUBTITLE_SELECTOR,
    };
    use std::time::Duration;

    #[test]
    fn test_load_tweens_start_hidden_and_settle() {
        let mut timeline = Timeline::new(20.0);
        assert_eq!(register_all(&mut timeline, hero_support_tweens()), 2);

        let start = timeline.loaded_at;
        let pose = timeline.pose(HERO_SUBTITLE_SELECTOR, start);
        assert!(!pose.visible);
        assert_eq!(pose.offset_rows, 1);

        let later = start + Duration::from_secs(3);
        assert_eq!(timeline.pose(HERO_SUBTITLE_SELECTOR, later).offset_rows, 0);
        assert!(!timeline.is_running(later));
        assert!(timeline.is_running(start + Duration::from_millis(1500)));
    }

    #[test]
    fn test_reveal_waits_for_visibility() {
        let mut timeline = Timeline::new(20.0);
        register_all(
            &mut timeline,
            reveal_tweens(&[RevealTarget {
                selector: "#contact .animate-title".to_string(),
                delay: None,
            }]),
        );
        let now = Instant::now();
        let target = "#contact .animate-title";

        timeline.fire_visible(|_| Some(50.0), 40.0, now);
        assert!(!timeline.pose(target, now + Duration::from_secs(5)).visible);

        timeline.fire_visible(|_| Some(30.0), 40.0, now);
        let pose = timeline.pose(target, now + Duration::from_secs(5));
        assert!(pose.visible);
        assert_eq!(pose.offset_rows, 0);
    }

    #[test]
    fn test_unknown_target_is_settled() {
        let timeline = Timeline::new(20.0);
        assert_eq!(timeline.pose(".nothing", Instant::now()), Pose::SETTLED);
    }

    #[test]
    fn test_rejects_invalid_timing() {
        let mut timeline = Timeline::new(20.0);
        let mut tween = hero_support_tweens().remove(0);
        tween.duration = f64::NAN;
        assert!(timeline.register(tween).is_err());
        assert!(timeline.is_empty());
    }
}
