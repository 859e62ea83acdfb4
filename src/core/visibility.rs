//! Viewport visibility detection
//!
//! The detector is written against the [`IntersectionSource`] capability so
//! the same state machine drives the browser `IntersectionObserver` and the
//! fake sources used in tests.
//!
//! Visibility fails open: when the environment cannot observe intersections
//! the element is reported visible right away.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use leptos::logging::warn;

/// Observer configuration for one element
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be on screen
    pub threshold: f64,
    /// Margin around the viewport, CSS syntax
    pub root_margin: String,
    /// Stop observing after the first entrance
    pub trigger_once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            trigger_once: true,
        }
    }
}

impl VisibilityOptions {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }

    pub fn root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }
}

/// One intersection report for an observed element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

impl IntersectionSample {
    pub fn entering(intersection_ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            intersection_ratio,
        }
    }

    pub fn leaving() -> Self {
        Self {
            is_intersecting: false,
            intersection_ratio: 0.0,
        }
    }
}

/// What the source should do with its observer after a callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverAction {
    Keep,
    Detach,
}

/// Per-element visibility state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityState {
    is_visible: bool,
    trigger_once: bool,
    detached: bool,
}

impl VisibilityState {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            is_visible: false,
            trigger_once,
            detached: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Apply one intersection report.
    pub fn observe(&mut self, sample: IntersectionSample, threshold: f64) -> ObserverAction {
        if self.detached {
            return ObserverAction::Detach;
        }

        if sample.is_intersecting && sample.intersection_ratio >= threshold {
            self.is_visible = true;
            if self.trigger_once {
                self.detached = true;
                return ObserverAction::Detach;
            }
        } else if !sample.is_intersecting && !self.trigger_once {
            self.is_visible = false;
        }

        ObserverAction::Keep
    }

    /// No way to observe: show the content and stop listening.
    pub fn fail_open(&mut self) {
        self.is_visible = true;
        self.detached = true;
    }

    pub fn detach(&mut self) {
        self.detached = true;
    }
}

/// Errors raised while attaching an observer
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("intersection observation is not supported in this environment")]
    Unsupported,

    #[error("failed to construct intersection observer: {0}")]
    Construct(String),
}

/// Handle to a live observation. Releases it exactly once, on
/// [`Subscription::unsubscribe`] or on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Callback handed to a source; its return value tells the source whether
/// to keep observing.
pub type IntersectionCallback = Box<dyn FnMut(IntersectionSample) -> ObserverAction>;

/// Something that can report when a target intersects the viewport.
pub trait IntersectionSource {
    type Target;

    /// Start observing `target`. The source must stop delivering samples
    /// once `on_change` returns [`ObserverAction::Detach`].
    fn observe(
        &self,
        target: &Self::Target,
        options: &VisibilityOptions,
        on_change: IntersectionCallback,
    ) -> Result<Subscription, DetectorError>;
}

/// Visibility detector for one element.
pub struct VisibilityDetector {
    options: VisibilityOptions,
    state: Rc<RefCell<VisibilityState>>,
    subscription: Option<Subscription>,
}

impl VisibilityDetector {
    pub fn new(options: VisibilityOptions) -> Self {
        let state = VisibilityState::new(options.trigger_once);
        Self {
            options,
            state: Rc::new(RefCell::new(state)),
            subscription: None,
        }
    }

    pub fn options(&self) -> &VisibilityOptions {
        &self.options
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_visible()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Bind the detector to its rendered element.
    ///
    /// `notify` receives every visibility change. Re-attaching releases the
    /// previous observation first.
    pub fn attach<S: IntersectionSource>(
        &mut self,
        source: &S,
        target: &S::Target,
        notify: impl Fn(bool) + 'static,
    ) {
        self.subscription = None;

        if self.state.borrow().is_detached() {
            return;
        }

        let notify: Rc<dyn Fn(bool)> = Rc::new(notify);
        let state = Rc::clone(&self.state);
        let threshold = self.options.threshold;
        let on_change = {
            let notify = Rc::clone(&notify);
            Box::new(move |sample: IntersectionSample| {
                let (before, after, action) = {
                    let mut state = state.borrow_mut();
                    let before = state.is_visible();
                    let action = state.observe(sample, threshold);
                    (before, state.is_visible(), action)
                };
                if before != after {
                    notify(after);
                }
                action
            })
        };

        match source.observe(target, &self.options, on_change) {
            Ok(subscription) => self.subscription = Some(subscription),
            Err(err) => {
                warn!("Visibility detector falling back to visible: {}", err);
                self.state.borrow_mut().fail_open();
                notify(true);
            }
        }
    }

    /// Release the observer. Safe to call repeatedly.
    pub fn detach(&mut self) {
        self.state.borrow_mut().detach();
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl Drop for VisibilityDetector {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_hidden() {
        let state = VisibilityState::new(true);
        assert!(!state.is_visible());
        assert!(!state.is_detached());
    }

    #[test]
    fn test_trigger_once_detaches_on_entry() {
        let mut state = VisibilityState::new(true);
        let action = state.observe(IntersectionSample::entering(0.5), 0.1);

        assert_eq!(action, ObserverAction::Detach);
        assert!(state.is_visible());
        assert!(state.is_detached());
    }

    #[test]
    fn test_trigger_once_is_monotonic() {
        let mut state = VisibilityState::new(true);
        state.observe(IntersectionSample::entering(1.0), 0.1);

        for _ in 0..5 {
            state.observe(IntersectionSample::leaving(), 0.1);
            state.observe(IntersectionSample::entering(0.0), 0.1);
        }
        assert!(state.is_visible());
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut state = VisibilityState::new(true);
        let action = state.observe(IntersectionSample::entering(0.05), 0.1);

        assert_eq!(action, ObserverAction::Keep);
        assert!(!state.is_visible());
    }

    #[test]
    fn test_repeating_mode_toggles() {
        let mut state = VisibilityState::new(false);

        assert_eq!(
            state.observe(IntersectionSample::entering(0.3), 0.1),
            ObserverAction::Keep
        );
        assert!(state.is_visible());

        state.observe(IntersectionSample::leaving(), 0.1);
        assert!(!state.is_visible());

        state.observe(IntersectionSample::entering(0.3), 0.1);
        assert!(state.is_visible());
    }

    #[test]
    fn test_fail_open() {
        let mut state = VisibilityState::new(false);
        state.fail_open();
        assert!(state.is_visible());
        assert_eq!(
            state.observe(IntersectionSample::leaving(), 0.1),
            ObserverAction::Detach
        );
        assert!(state.is_visible());
    }

    #[test]
    fn test_threshold_is_clamped() {
        let options = VisibilityOptions::default().threshold(4.0);
        assert_eq!(options.threshold, 1.0);
        let options = VisibilityOptions::default().threshold(-1.0);
        assert_eq!(options.threshold, 0.0);
    }

    #[test]
    fn test_subscription_releases_once() {
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let subscription = Subscription::new(move || *counter.borrow_mut() += 1);

        subscription.unsubscribe();
        assert_eq!(*count.borrow(), 1);

        let counter = Rc::clone(&count);
        drop(Subscription::new(move || *counter.borrow_mut() += 1));
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_unattached_detector_is_harmless() {
        let mut detector = VisibilityDetector::new(VisibilityOptions::default());
        assert!(!detector.is_visible());
        assert!(!detector.is_attached());
        detector.detach();
        detector.detach();
        assert!(!detector.is_visible());
    }
}
