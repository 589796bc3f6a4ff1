//! Smooth scrolling for the site preview
//!
//! The terminal stand-in for the page's smooth-scroll engine: an eased
//! animation between row offsets, advanced once per frame.
//!
//! ## Atomic layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Configuration helpers over `navlight_core::ScrollConfig`
//!
//! ## Molecular layer
//! - `animation` - Animation controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use navlight_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::with_defaults();
//! animator.scroll_by(10, max_scroll);
//!
//! // In main loop, update each frame and get current position
//! let scroll = animator.update(max_scroll);
//! ```

// Atomic layer
pub mod config;
pub mod easing;
pub mod timing;

// Molecular layer
pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
