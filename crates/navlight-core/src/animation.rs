//! Entrance and ambient animation plans.
//!
//! The page does not animate anything itself; it describes tweens and hands
//! them to an `AnimationEngine`. Engines that reject a tween are logged and
//! skipped, animation is never required for the page to work.

use serde::Serialize;

/// Named easing curves understood by tween engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ease {
    ExpoOut,
    SineInOut,
}

impl Ease {
    pub fn name(self) -> &'static str {
        match self {
            Ease::ExpoOut => "expo.out",
            Ease::SineInOut => "sine.inOut",
        }
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
            Ease::SineInOut => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// Starting pose an element animates from; it ends at its natural pose
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FromPose {
    /// Vertical offset as a percentage of the element's own height
    pub y_percent: f64,
    /// Vertical offset in pixels
    pub y: f64,
    /// Start hidden and fade in
    pub fade_in: bool,
}

/// When a tween starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Trigger {
    OnLoad,
    /// Once the element's top passes `viewport_ratio` of the viewport height.
    /// Plays once and never reverses.
    OnVisible { viewport_ratio: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tween {
    pub target: String,
    pub from: FromPose,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
    pub trigger: Trigger,
}

impl Tween {
    /// Progress in [0, 1] at `elapsed` seconds after the trigger fired, eased
    pub fn progress(&self, elapsed: f64) -> f64 {
        let t = elapsed - self.delay;
        if t <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.ease.apply(t / self.duration)
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// A span of the hero title as found in the markup
#[derive(Debug, Clone, PartialEq)]
pub enum HeroSpan {
    /// Plain text span; gets wrapped in an inner span that slides up
    Text(String),
    /// Span already wrapping exactly one inner span
    Wrapped,
    /// Anything else; left alone
    Other,
}

/// An element animated when it scrolls into view
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTarget {
    pub selector: String,
    /// Raw `data-delay` value
    pub delay: Option<String>,
}

/// Interval a random animation parameter is drawn from, snapped to `step`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RandomRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl RandomRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Map `unit` in [0, 1) onto the range, snapped to the step
    pub fn sample(&self, unit: f64) -> f64 {
        let raw = self.min + (self.max - self.min) * unit.clamp(0.0, 1.0);
        if self.step <= 0.0 {
            return raw;
        }
        let snapped = (raw / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }
}

/// Endless drifting of a hero background shape; each parameter is drawn
/// independently per shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmbientMotion {
    pub x: RandomRange,
    pub y: RandomRange,
    pub scale: RandomRange,
    pub rotation: RandomRange,
    pub duration: RandomRange,
    pub delay: RandomRange,
    pub ease: Ease,
}

pub const AMBIENT_SHAPE_MOTION: AmbientMotion = AmbientMotion {
    x: RandomRange::new(-100.0, 100.0, 1.0),
    y: RandomRange::new(-150.0, 150.0, 1.0),
    scale: RandomRange::new(0.8, 1.5, 0.1),
    rotation: RandomRange::new(-45.0, 45.0, 1.0),
    duration: RandomRange::new(15.0, 25.0, 1.0),
    delay: RandomRange::new(0.0, 2.0, 0.1),
    ease: Ease::SineInOut,
};

pub const HERO_SUBTITLE_SELECTOR: &str = ".hero-subtitle.animate-p";
pub const HERO_BUTTON_SELECTOR: &str = ".hero-section .btn.animate-btn";

const HERO_SPAN_DELAY: f64 = 0.4;
const HERO_SPAN_STAGGER: f64 = 0.15;
const REVEAL_VIEWPORT_RATIO: f64 = 0.88;

/// Inner span of the hero title's span at `index` (zero-based)
pub fn hero_span_selector(index: usize) -> String {
    format!(".hero-title span:nth-child({}) > span", index + 1)
}

/// Title of a section revealed on scroll
pub fn reveal_selector(section_id: &str) -> String {
    format!("#{} .animate-title", section_id)
}

/// Hero title: each eligible span slides up from below and fades in,
/// staggered by its position among all spans
pub fn hero_title_tweens(spans: &[HeroSpan]) -> Vec<Tween> {
    spans
        .iter()
        .enumerate()
        .filter_map(|(i, span)| {
            let eligible = match span {
                HeroSpan::Text(text) => !text.trim().is_empty(),
                HeroSpan::Wrapped => true,
                HeroSpan::Other => false,
            };
            eligible.then(|| Tween {
                target: hero_span_selector(i),
                from: FromPose {
                    y_percent: 100.0,
                    y: 0.0,
                    fade_in: true,
                },
                duration: 0.9,
                delay: HERO_SPAN_DELAY + i as f64 * HERO_SPAN_STAGGER,
                ease: Ease::ExpoOut,
                trigger: Trigger::OnLoad,
            })
        })
        .collect()
}

/// Subtitle and call-to-action button under the hero title
pub fn hero_support_tweens() -> Vec<Tween> {
    let rise = |target: &str, delay: f64| Tween {
        target: target.to_string(),
        from: FromPose {
            y_percent: 0.0,
            y: 20.0,
            fade_in: true,
        },
        duration: 1.0,
        delay,
        ease: Ease::ExpoOut,
        trigger: Trigger::OnLoad,
    };
    vec![
        rise(HERO_SUBTITLE_SELECTOR, 1.0),
        rise(HERO_BUTTON_SELECTOR, 1.2),
    ]
}

/// Elements that rise into place the first time they scroll into view
pub fn reveal_tweens(targets: &[RevealTarget]) -> Vec<Tween> {
    targets
        .iter()
        .map(|target| Tween {
            target: target.selector.clone(),
            from: FromPose {
                y_percent: 0.0,
                y: 40.0,
                fade_in: true,
            },
            duration: 1.2,
            delay: parse_delay(target.delay.as_deref()),
            ease: Ease::ExpoOut,
            trigger: Trigger::OnVisible {
                viewport_ratio: REVEAL_VIEWPORT_RATIO,
            },
        })
        .collect()
}

/// Read a delay attribute the lenient way: the longest leading number is
/// used ("0.3s" is 0.3), anything unreadable is 0
pub fn parse_delay(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let raw = raw.trim_start();

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (idx, c) in raw.char_indices() {
        match c {
            '+' | '-' if idx == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            '0'..='9' => seen_digit = true,
            _ => break,
        }
        end = idx + c.len_utf8();
    }

    if !seen_digit {
        return 0.0;
    }
    raw[..end].parse::<f64>().unwrap_or(0.0)
}

/// Whether an element whose top sits `element_top` below the viewport top
/// has crossed the trigger line
pub fn is_triggered(trigger: Trigger, element_top: f64, viewport_height: f64) -> bool {
    match trigger {
        Trigger::OnLoad => true,
        Trigger::OnVisible { viewport_ratio } => element_top <= viewport_height * viewport_ratio,
    }
}

/// Tween runner
pub trait AnimationEngine {
    fn register(&mut self, tween: Tween) -> crate::Result<()>;
}

/// Hand every tween to the engine; returns how many were accepted
pub fn register_all<E: AnimationEngine + ?Sized>(engine: &mut E, tweens: Vec<Tween>) -> usize {
    let mut accepted = 0;
    for tween in tweens {
        let target = tween.target.clone();
        match engine.register(tween) {
            Ok(()) => accepted += 1,
            Err(e) => tracing::warn!(selector = %target, "Animation registration failed: {}", e),
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_stagger_uses_span_position() {
        let spans = vec![
            HeroSpan::Text("Build".to_string()),
            HeroSpan::Other,
            HeroSpan::Wrapped,
            HeroSpan::Text("  ".to_string()),
        ];
        let tweens = hero_title_tweens(&spans);
        assert_eq!(tweens.len(), 2);
        assert!((tweens[0].delay - 0.4).abs() < 1e-9);
        assert!((tweens[1].delay - 0.7).abs() < 1e-9);
        assert_eq!(tweens[1].from.y_percent, 100.0);
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay(None), 0.0);
        assert_eq!(parse_delay(Some("0.3")), 0.3);
        assert_eq!(parse_delay(Some(" 0.5s")), 0.5);
        assert_eq!(parse_delay(Some(".25")), 0.25);
        assert_eq!(parse_delay(Some("abc")), 0.0);
        assert_eq!(parse_delay(Some("-")), 0.0);
        assert_eq!(parse_delay(Some("1.2.3")), 1.2);
    }

    #[test]
    fn test_reveal_tweens_trigger_on_visibility() {
        let tweens = reveal_tweens(&[RevealTarget {
            selector: "#pricing .animate-title".to_string(),
            delay: Some("0.2".to_string()),
        }]);
        assert_eq!(tweens[0].trigger, Trigger::OnVisible { viewport_ratio: 0.88 });
        assert_eq!(tweens[0].from.y, 40.0);
        assert!((tweens[0].delay - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_is_triggered() {
        let trigger = Trigger::OnVisible { viewport_ratio: 0.88 };
        assert!(is_triggered(trigger, 80.0, 100.0));
        assert!(!is_triggered(trigger, 90.0, 100.0));
        assert!(is_triggered(Trigger::OnLoad, 1000.0, 100.0));
    }

    #[test]
    fn test_tween_progress() {
        let tween = hero_support_tweens().remove(0);
        assert_eq!(tween.progress(0.5), 0.0);
        assert!(tween.progress(1.5) > 0.9);
        assert!(tween.is_finished(2.0));
        assert!(!tween.is_finished(1.9));
    }

    #[test]
    fn test_random_range_sample() {
        let range = RandomRange::new(0.8, 1.5, 0.1);
        assert!((range.sample(0.0) - 0.8).abs() < 1e-9);
        assert!((range.sample(1.0) - 1.5).abs() < 1e-9);
        let mid = range.sample(0.5);
        assert!((mid * 10.0 - (mid * 10.0).round()).abs() < 1e-6);
    }

    struct Picky;

    impl AnimationEngine for Picky {
        fn register(&mut self, tween: Tween) -> crate::Result<()> {
            if tween.target.contains("btn") {
                Err(crate::Error::Other("unsupported selector".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_register_all_skips_failures() {
        assert_eq!(register_all(&mut Picky, hero_support_tweens()), 1);
    }
}
