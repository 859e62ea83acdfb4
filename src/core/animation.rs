//! Entrance animation requests and their resolution into CSS classes.
//!
//! Every element that animates into view carries an [`AnimationRequest`].
//! The rendered state is never stored: [`resolve`] derives it from the
//! request, the element's visibility and the current [`MotionPolicy`] on
//! every render.

use derive_more::Display;

use crate::core::motion::MotionPolicy;

/// Class applied to every animated element so it gets its own compositing layer.
pub const PERFORMANCE_HINT_CLASS: &str = "gpu-accelerated";

/// Class for elements waiting for their entrance.
pub const HIDDEN_CLASS: &str = "opacity-0";

/// Class for elements rendered directly in their final state.
pub const STATIC_CLASS: &str = "opacity-100";

/// Default offset between consecutive children of a stagger container.
pub const DEFAULT_STAGGER_DELAY_MS: u32 = 150;

/// Entrance animation kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum AnimationKind {
    #[default]
    #[display("fadeInUp")]
    FadeInUp,
    #[display("fadeInLeft")]
    FadeInLeft,
    #[display("fadeInRight")]
    FadeInRight,
    #[display("scaleIn")]
    ScaleIn,
}

impl AnimationKind {
    pub fn class(&self) -> &'static str {
        match self {
            AnimationKind::FadeInUp => "animate-fadeInUp",
            AnimationKind::FadeInLeft => "animate-fadeInLeft",
            AnimationKind::FadeInRight => "animate-fadeInRight",
            AnimationKind::ScaleIn => "animate-scaleIn",
        }
    }
}

/// Animation duration presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationSpeed {
    Fast,
    #[default]
    Normal,
    Slow,
}

impl AnimationSpeed {
    pub fn class(&self) -> &'static str {
        match self {
            AnimationSpeed::Fast => "animation-duration-fast",
            AnimationSpeed::Normal => "animation-duration-normal",
            AnimationSpeed::Slow => "animation-duration-slow",
        }
    }
}

/// Named delay buckets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DelayBucket {
    Instant,
    #[default]
    Fast,
    Normal,
    Slow,
    VerySlow,
}

impl DelayBucket {
    pub fn millis(&self) -> u32 {
        match self {
            DelayBucket::Instant => 0,
            DelayBucket::Fast => 150,
            DelayBucket::Normal => 300,
            DelayBucket::Slow => 500,
            DelayBucket::VerySlow => 700,
        }
    }
}

/// Delay before an entrance starts: a named bucket or an explicit value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationDelay {
    Bucket(DelayBucket),
    Millis(u32),
}

impl AnimationDelay {
    pub fn millis(&self) -> u32 {
        match self {
            AnimationDelay::Bucket(bucket) => bucket.millis(),
            AnimationDelay::Millis(ms) => *ms,
        }
    }
}

impl Default for AnimationDelay {
    fn default() -> Self {
        AnimationDelay::Bucket(DelayBucket::default())
    }
}

impl From<DelayBucket> for AnimationDelay {
    fn from(bucket: DelayBucket) -> Self {
        AnimationDelay::Bucket(bucket)
    }
}

impl From<u32> for AnimationDelay {
    fn from(ms: u32) -> Self {
        AnimationDelay::Millis(ms)
    }
}

/// What a caller asks for on a single element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AnimationRequest {
    pub kind: AnimationKind,
    pub speed: AnimationSpeed,
    pub delay: AnimationDelay,
    /// Above-the-fold content that must never start hidden.
    pub critical: bool,
}

impl AnimationRequest {
    pub fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn speed(mut self, speed: AnimationSpeed) -> Self {
        self.speed = speed;
        self
    }

    pub fn delay(mut self, delay: impl Into<AnimationDelay>) -> Self {
        self.delay = delay.into();
        self
    }

    pub fn critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }
}

/// Rendering phase of an animated element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Waiting for the element to scroll into view
    Hidden,
    /// Visible and running its entrance animation
    Entering,
    /// Rendered in its final state without any entrance
    Static,
}

impl AnimationPhase {
    /// Whether the element's content is shown in its final state.
    pub fn is_final(&self) -> bool {
        !matches!(self, AnimationPhase::Hidden)
    }
}

/// Derived rendering state of one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedAnimation {
    pub phase: AnimationPhase,
    pub classes: Vec<&'static str>,
    pub delay_ms: u32,
}

impl ResolvedAnimation {
    /// Full class attribute, with caller classes appended last.
    pub fn class_with(&self, extra: &str) -> String {
        let mut class = self.classes.join(" ");
        let extra = extra.trim();
        if !extra.is_empty() {
            class.push(' ');
            class.push_str(extra);
        }
        class
    }

    /// Inline style carrying the effective delay, if any.
    pub fn style(&self) -> Option<String> {
        match self.phase {
            AnimationPhase::Entering if self.delay_ms > 0 => {
                Some(format!("animation-delay: {}ms", self.delay_ms))
            }
            _ => None,
        }
    }
}

/// Resolve the rendered state of one element.
///
/// Priority: `critical`, then reduced motion, then visibility.
pub fn resolve(request: &AnimationRequest, is_visible: bool, motion: MotionPolicy) -> ResolvedAnimation {
    resolve_with_offset(request, 0, is_visible, motion)
}

/// Resolve child `index` of a stagger container.
pub fn resolve_staggered(
    request: &AnimationRequest,
    index: usize,
    stagger_delay_ms: u32,
    is_visible: bool,
    motion: MotionPolicy,
) -> ResolvedAnimation {
    resolve_with_offset(
        request,
        stagger_offset_ms(index, stagger_delay_ms),
        is_visible,
        motion,
    )
}

/// Offset of child `index`, saturating instead of overflowing.
pub fn stagger_offset_ms(index: usize, stagger_delay_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_delay_ms)
}

fn resolve_with_offset(
    request: &AnimationRequest,
    offset_ms: u32,
    is_visible: bool,
    motion: MotionPolicy,
) -> ResolvedAnimation {
    if request.critical || motion.reduced_motion_requested() {
        return ResolvedAnimation {
            phase: AnimationPhase::Static,
            classes: vec![STATIC_CLASS, PERFORMANCE_HINT_CLASS],
            delay_ms: 0,
        };
    }

    if !is_visible {
        return ResolvedAnimation {
            phase: AnimationPhase::Hidden,
            classes: vec![HIDDEN_CLASS, PERFORMANCE_HINT_CLASS],
            delay_ms: 0,
        };
    }

    ResolvedAnimation {
        phase: AnimationPhase::Entering,
        classes: vec![
            request.kind.class(),
            request.speed.class(),
            PERFORMANCE_HINT_CLASS,
        ],
        delay_ms: request.delay.millis().saturating_add(offset_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion(reduced: bool) -> MotionPolicy {
        let mut policy = MotionPolicy::new();
        policy.mount(reduced);
        policy
    }

    #[test]
    fn test_hidden_until_visible() {
        let request = AnimationRequest::new(AnimationKind::FadeInLeft);
        let resolved = resolve(&request, false, motion(false));

        assert_eq!(resolved.phase, AnimationPhase::Hidden);
        assert!(resolved.classes.contains(&HIDDEN_CLASS));
        assert_eq!(resolved.delay_ms, 0);
        assert!(resolved.style().is_none());
    }

    #[test]
    fn test_entering_when_visible() {
        let request = AnimationRequest::new(AnimationKind::ScaleIn)
            .speed(AnimationSpeed::Slow)
            .delay(DelayBucket::Normal);
        let resolved = resolve(&request, true, motion(false));

        assert_eq!(resolved.phase, AnimationPhase::Entering);
        assert_eq!(
            resolved.classes,
            vec!["animate-scaleIn", "animation-duration-slow", PERFORMANCE_HINT_CLASS]
        );
        assert_eq!(resolved.delay_ms, 300);
        assert_eq!(resolved.style().as_deref(), Some("animation-delay: 300ms"));
    }

    #[test]
    fn test_critical_is_static_even_before_mount() {
        let request = AnimationRequest::new(AnimationKind::FadeInUp).critical(true);

        for visible in [false, true] {
            let resolved = resolve(&request, visible, MotionPolicy::new());
            assert_eq!(resolved.phase, AnimationPhase::Static);
            assert!(resolved.phase.is_final());
        }
    }

    #[test]
    fn test_reduced_motion_is_static() {
        let request = AnimationRequest::new(AnimationKind::FadeInRight).delay(900u32);
        let resolved = resolve(&request, false, motion(true));

        assert_eq!(resolved.phase, AnimationPhase::Static);
        assert_eq!(resolved.delay_ms, 0);
    }

    #[test]
    fn test_performance_hint_in_every_phase() {
        let request = AnimationRequest::default();
        let cases = [
            resolve(&request, false, motion(false)),
            resolve(&request, true, motion(false)),
            resolve(&request, false, motion(true)),
        ];

        for resolved in cases {
            assert!(resolved.classes.contains(&PERFORMANCE_HINT_CLASS));
        }
    }

    #[test]
    fn test_stagger_offsets() {
        let request = AnimationRequest::new(AnimationKind::FadeInUp).delay(DelayBucket::Instant);

        let delays: Vec<u32> = (0..4)
            .map(|i| resolve_staggered(&request, i, 150, true, motion(false)).delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 150, 300, 450]);

        let hidden: Vec<u32> = (0..4)
            .map(|i| resolve_staggered(&request, i, 150, false, motion(false)).delay_ms)
            .collect();
        assert_eq!(hidden, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_stagger_offset_saturates() {
        assert_eq!(stagger_offset_ms(usize::MAX, 150), u32::MAX);
        assert_eq!(stagger_offset_ms(3, 0), 0);
    }

    #[test]
    fn test_class_with_extra() {
        let resolved = resolve(&AnimationRequest::default(), false, motion(false));
        assert_eq!(resolved.class_with("  "), "opacity-0 gpu-accelerated");
        assert_eq!(
            resolved.class_with("mb-8 text-center"),
            "opacity-0 gpu-accelerated mb-8 text-center"
        );
    }

    #[test]
    fn test_defaults() {
        let request = AnimationRequest::default();
        assert_eq!(request.kind, AnimationKind::FadeInUp);
        assert_eq!(request.speed, AnimationSpeed::Normal);
        assert_eq!(request.delay.millis(), 150);
        assert!(!request.critical);
        assert_eq!(AnimationKind::ScaleIn.to_string(), "scaleIn");
    }
}
