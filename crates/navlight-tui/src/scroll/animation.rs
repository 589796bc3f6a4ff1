//! Scroll animation controller
//!
//! Combines easing functions and timing utilities into the preview's
//! smooth-scroll engine.

use std::time::{Duration, Instant};

use navlight_core::scroll::ScrollEngine;

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_u16, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Scroll animation controller
///
/// Call `scroll_to()` or `scroll_by()` to begin an animation, then `update()`
/// each frame to get the current interpolated row offset.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current_scroll: u16,
    /// Pending scroll delta for batching multiple key presses
    pending_delta: i32,
    /// Largest offset seen by the last `update`
    max_scroll: u16,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0,
            pending_delta: 0,
            max_scroll: u16::MAX,
        }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Animation running or delta waiting; the event loop keeps a high frame rate while true
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Final position once the running animation ends
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Jump without animating
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Animate to `target`, or jump when smoothing is off
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if !self.config.is_smooth() {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        let from = self.current_scroll;
        if from == target {
            self.animation = None;
            return;
        }

        self.animation = Some(self.animation_between(from, target));
    }

    /// Scroll by a delta (positive = down). Deltas within one frame are batched.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.config.is_smooth() {
            let new_scroll = (self.current_scroll as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.current_scroll = new_scroll;
            self.animation = None;
            return;
        }

        self.pending_delta += delta;
    }

    fn step_lines(&self) -> i32 {
        if self.config.is_smooth() {
            1
        } else {
            self.config.scroll_lines as i32
        }
    }

    pub fn scroll_down(&mut self, max_scroll: u16) {
        let lines = self.step_lines();
        self.scroll_by(lines, max_scroll);
    }

    pub fn scroll_up(&mut self, max_scroll: u16) {
        let lines = self.step_lines();
        self.scroll_by(-lines, max_scroll);
    }

    pub fn scroll_half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(half_page, max_scroll);
    }

    pub fn scroll_half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(-half_page, max_scroll);
    }

    /// Advance one frame and return the current offset
    pub fn update(&mut self, max_scroll: u16) -> u16 {
        self.max_scroll = max_scroll;

        if self.pending_delta != 0 {
            let target = self.target_scroll();
            let new_target = (target as i32 + self.pending_delta).clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;

            if new_target != self.current_scroll {
                self.animation = Some(self.animation_between(self.current_scroll, new_target));
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration);
                let eased_t = anim.easing.apply(t);
                self.current_scroll = lerp_u16(anim.from, anim.to, eased_t).min(max_scroll);
            }
        }

        // Page may have shrunk since the last jump
        self.current_scroll = self.current_scroll.min(max_scroll);
        self.current_scroll
    }

    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }

    /// Back to the top, e.g. after loading another page
    pub fn reset(&mut self) {
        self.animation = None;
        self.current_scroll = 0;
        self.pending_delta = 0;
    }

    fn animation_between(&self, from: u16, to: u16) -> ActiveAnimation {
        ActiveAnimation {
            start: Instant::now(),
            from,
            to,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        }
    }
}

impl ScrollEngine for ScrollAnimator {
    fn scroll_to(&mut self, top: f64, offset: f64) {
        let target = (top - offset).max(0.0).round().min(u16::MAX as f64) as u16;
        let max_scroll = self.max_scroll;
        ScrollAnimator::scroll_to(self, target, max_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);

        animator.scroll_to(100, 200);
        assert_eq!(animator.current_scroll(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts() {
        let mut animator = ScrollAnimator::new(fast());
        animator.scroll_to(100, 200);
        assert!(animator.is_animating());
        assert_eq!(animator.target_scroll(), 100);
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = ScrollAnimator::new(fast());
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);

        animator.update(200);
        assert_eq!(animator.target_scroll(), 30);
    }

    #[test]
    fn test_scroll_clamp_max() {
        let mut animator = ScrollAnimator::with_defaults();
        animator.set_scroll(50);
        animator.scroll_to(300, 100);
        animator.update(100);
        assert!(animator.target_scroll() <= 100);
    }

    #[test]
    fn test_engine_subtracts_header_offset() {
        let mut animator = ScrollAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        animator.update(500);
        ScrollEngine::scroll_to(&mut animator, 40.0, 4.0);
        assert_eq!(animator.current_scroll(), 36);

        ScrollEngine::scroll_to(&mut animator, 2.0, 4.0);
        assert_eq!(animator.current_scroll(), 0);
    }

    #[test]
    fn test_engine_respects_last_bounds() {
        let mut animator = ScrollAnimator::new(fast());
        animator.update(20);
        ScrollEngine::scroll_to(&mut animator, 90.0, 0.0);
        assert_eq!(animator.target_scroll(), 20);
    }
}
