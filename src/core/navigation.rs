//! Header navigation state: which section is on screen and whether the page
//! still rests at the top.
//!
//! Section tracking reuses the [`IntersectionSource`] capability of the
//! visibility detector, with one observation per section.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::warn;

use crate::core::visibility::{
    IntersectionSample, IntersectionSource, ObserverAction, Subscription, VisibilityOptions,
};

/// Shrinks the observed viewport to its horizontal center line, so at most
/// one stacked section intersects at a time.
pub const ACTIVE_SECTION_ROOT_MARGIN: &str = "-50% 0px -50% 0px";

/// Scroll offset under which the page counts as resting at the top
pub const AT_TOP_OFFSET_PX: f64 = 10.0;

pub fn is_at_top(scroll_y: f64) -> bool {
    scroll_y < AT_TOP_OFFSET_PX
}

/// Active section derived from per-section intersection reports.
///
/// The most recently entered section wins. When the active section leaves,
/// the first section still intersecting in document order takes over; if
/// none does, the last active section is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSectionTracker {
    ids: Vec<&'static str>,
    intersecting: Vec<bool>,
    active: Option<&'static str>,
}

impl ActiveSectionTracker {
    pub fn new(ids: Vec<&'static str>) -> Self {
        let intersecting = vec![false; ids.len()];
        Self {
            ids,
            intersecting,
            active: None,
        }
    }

    pub fn ids(&self) -> &[&'static str] {
        &self.ids
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    /// Apply a report for section `index`. Returns whether the active
    /// section changed.
    pub fn observe(&mut self, index: usize, sample: IntersectionSample) -> bool {
        let Some(&id) = self.ids.get(index) else {
            return false;
        };
        self.intersecting[index] = sample.is_intersecting;

        let before = self.active;
        if sample.is_intersecting {
            self.active = Some(id);
        } else if self.active == Some(id) {
            if let Some(next) = self
                .ids
                .iter()
                .zip(&self.intersecting)
                .find_map(|(id, intersecting)| intersecting.then_some(*id))
            {
                self.active = Some(next);
            }
        }
        before != self.active
    }
}

/// Observes every tracked section and reports the active one.
pub struct ActiveSectionDetector {
    options: VisibilityOptions,
    tracker: Rc<RefCell<ActiveSectionTracker>>,
    subscriptions: Vec<Subscription>,
}

impl ActiveSectionDetector {
    pub fn new(ids: Vec<&'static str>) -> Self {
        let options = VisibilityOptions::default()
            .threshold(0.0)
            .trigger_once(false)
            .root_margin(ACTIVE_SECTION_ROOT_MARGIN);
        Self {
            options,
            tracker: Rc::new(RefCell::new(ActiveSectionTracker::new(ids))),
            subscriptions: Vec::new(),
        }
    }

    pub fn options(&self) -> &VisibilityOptions {
        &self.options
    }

    pub fn active(&self) -> Option<&'static str> {
        self.tracker.borrow().active()
    }

    /// Number of sections currently observed
    pub fn observed_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Observe every section `lookup` can find.
    ///
    /// Sections that are missing or cannot be observed are skipped. Attaching
    /// again releases the previous observations first.
    pub fn attach<S: IntersectionSource>(
        &mut self,
        source: &S,
        lookup: impl Fn(&str) -> Option<S::Target>,
        notify: impl Fn(Option<&'static str>) + 'static,
    ) {
        self.subscriptions.clear();

        let notify: Rc<dyn Fn(Option<&'static str>)> = Rc::new(notify);
        let ids = self.tracker.borrow().ids().to_vec();

        for (index, id) in ids.into_iter().enumerate() {
            let Some(target) = lookup(id) else {
                warn!("No section '{}' to track", id);
                continue;
            };

            let tracker = Rc::clone(&self.tracker);
            let notify = Rc::clone(&notify);
            let on_change = Box::new(move |sample: IntersectionSample| {
                let (changed, active) = {
                    let mut tracker = tracker.borrow_mut();
                    (tracker.observe(index, sample), tracker.active())
                };
                if changed {
                    notify(active);
                }
                ObserverAction::Keep
            });

            match source.observe(&target, &self.options, on_change) {
                Ok(subscription) => self.subscriptions.push(subscription),
                Err(err) => warn!("Not tracking section '{}': {}", id, err),
            }
        }
    }

    /// Release every observation. Safe to call repeatedly.
    pub fn detach(&mut self) {
        self.subscriptions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [&str; 4] = ["home", "about", "features", "packages"];

    #[test]
    fn test_at_top_threshold() {
        assert!(is_at_top(0.0));
        assert!(is_at_top(9.5));
        assert!(!is_at_top(10.0));
        assert!(!is_at_top(640.0));
    }

    #[test]
    fn test_no_active_section_initially() {
        let tracker = ActiveSectionTracker::new(IDS.to_vec());
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn test_latest_entry_wins() {
        let mut tracker = ActiveSectionTracker::new(IDS.to_vec());

        assert!(tracker.observe(0, IntersectionSample::entering(0.0)));
        assert!(tracker.observe(2, IntersectionSample::entering(0.0)));
        assert_eq!(tracker.active(), Some("features"));

        assert!(!tracker.observe(2, IntersectionSample::entering(0.0)));
    }

    #[test]
    fn test_leaving_falls_back_to_first_intersecting() {
        let mut tracker = ActiveSectionTracker::new(IDS.to_vec());
        tracker.observe(1, IntersectionSample::entering(0.0));
        tracker.observe(3, IntersectionSample::entering(0.0));

        assert!(tracker.observe(3, IntersectionSample::leaving()));
        assert_eq!(tracker.active(), Some("about"));
    }

    #[test]
    fn test_last_section_kept_when_nothing_intersects() {
        let mut tracker = ActiveSectionTracker::new(IDS.to_vec());
        tracker.observe(1, IntersectionSample::entering(0.0));

        assert!(!tracker.observe(1, IntersectionSample::leaving()));
        assert_eq!(tracker.active(), Some("about"));
    }

    #[test]
    fn test_leaving_inactive_section_is_ignored() {
        let mut tracker = ActiveSectionTracker::new(IDS.to_vec());
        tracker.observe(2, IntersectionSample::entering(0.0));

        assert!(!tracker.observe(0, IntersectionSample::leaving()));
        assert!(!tracker.observe(9, IntersectionSample::entering(1.0)));
        assert_eq!(tracker.active(), Some("features"));
    }

    #[test]
    fn test_detector_observes_center_line() {
        let detector = ActiveSectionDetector::new(IDS.to_vec());
        let options = detector.options();

        assert_eq!(options.root_margin, ACTIVE_SECTION_ROOT_MARGIN);
        assert_eq!(options.threshold, 0.0);
        assert!(!options.trigger_once);
    }
}
