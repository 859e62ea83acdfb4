#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use crate::core::theme::testing::MemoryStorage;
    use crate::core::{
        ActiveSectionDetector, AnimationKind, AnimationPhase, AnimationRequest, DetectorError,
        IntersectionCallback, IntersectionSample, IntersectionSource, MotionPolicy,
        ObserverAction, ResolvedTheme, Subscription, THEME_STORAGE_KEY, Theme, ThemePolicy,
        VisibilityDetector, VisibilityOptions, resolve, resolve_staggered,
    };

    /// Intersection source driven by hand.
    #[derive(Default)]
    struct FakeSource {
        callback: Rc<RefCell<Option<IntersectionCallback>>>,
        releases: Rc<RefCell<usize>>,
        observed: RefCell<Vec<String>>,
    }

    impl FakeSource {
        /// Deliver a sample, dropping the callback if it asks to detach.
        fn fire(&self, sample: IntersectionSample) -> Option<ObserverAction> {
            let mut slot = self.callback.borrow_mut();
            let callback = slot.as_mut()?;
            let action = callback(sample);
            if action == ObserverAction::Detach {
                *slot = None;
            }
            Some(action)
        }

        fn is_observing(&self) -> bool {
            self.callback.borrow().is_some()
        }
    }

    impl IntersectionSource for FakeSource {
        type Target = String;

        fn observe(
            &self,
            target: &String,
            _options: &VisibilityOptions,
            on_change: IntersectionCallback,
        ) -> Result<Subscription, DetectorError> {
            self.observed.borrow_mut().push(target.clone());
            *self.callback.borrow_mut() = Some(on_change);

            let callback = Rc::clone(&self.callback);
            let releases = Rc::clone(&self.releases);
            Ok(Subscription::new(move || {
                callback.borrow_mut().take();
                *releases.borrow_mut() += 1;
            }))
        }
    }

    /// Intersection source with one live callback per observed section.
    #[derive(Default)]
    struct SectionSource {
        callbacks: Rc<RefCell<HashMap<String, IntersectionCallback>>>,
        releases: Rc<RefCell<usize>>,
    }

    impl SectionSource {
        fn fire(&self, id: &str, sample: IntersectionSample) {
            if let Some(callback) = self.callbacks.borrow_mut().get_mut(id) {
                callback(sample);
            }
        }
    }

    impl IntersectionSource for SectionSource {
        type Target = String;

        fn observe(
            &self,
            target: &String,
            _options: &VisibilityOptions,
            on_change: IntersectionCallback,
        ) -> Result<Subscription, DetectorError> {
            self.callbacks.borrow_mut().insert(target.clone(), on_change);

            let callbacks = Rc::clone(&self.callbacks);
            let releases = Rc::clone(&self.releases);
            let target = target.clone();
            Ok(Subscription::new(move || {
                callbacks.borrow_mut().remove(&target);
                *releases.borrow_mut() += 1;
            }))
        }
    }

    struct UnsupportedSource;

    impl IntersectionSource for UnsupportedSource {
        type Target = String;

        fn observe(
            &self,
            _target: &String,
            _options: &VisibilityOptions,
            _on_change: IntersectionCallback,
        ) -> Result<Subscription, DetectorError> {
            Err(DetectorError::Unsupported)
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |visible| sink.borrow_mut().push(visible))
    }

    fn mounted(reduced: bool) -> MotionPolicy {
        let mut policy = MotionPolicy::new();
        policy.mount(reduced);
        policy
    }

    #[test]
    fn test_detector_trigger_once_detaches_observer() {
        let source = FakeSource::default();
        let (seen, notify) = recorder();
        let mut detector = VisibilityDetector::new(VisibilityOptions::default());

        detector.attach(&source, &"hero".to_string(), notify);
        assert!(!detector.is_visible());

        assert_eq!(
            source.fire(IntersectionSample::entering(0.4)),
            Some(ObserverAction::Detach)
        );
        assert!(detector.is_visible());
        assert!(!source.is_observing());
        assert_eq!(*seen.borrow(), vec![true]);

        // Nothing is delivered once detached
        assert_eq!(source.fire(IntersectionSample::leaving()), None);
        assert!(detector.is_visible());
    }

    #[test]
    fn test_detector_repeating_mode() {
        let source = FakeSource::default();
        let (seen, notify) = recorder();
        let mut detector =
            VisibilityDetector::new(VisibilityOptions::default().trigger_once(false));

        detector.attach(&source, &"card".to_string(), notify);
        source.fire(IntersectionSample::entering(0.5));
        source.fire(IntersectionSample::entering(0.6));
        source.fire(IntersectionSample::leaving());
        source.fire(IntersectionSample::entering(0.2));

        assert_eq!(*seen.borrow(), vec![true, false, true]);
        assert!(source.is_observing());
    }

    #[test]
    fn test_detector_releases_on_unmount() {
        let source = FakeSource::default();
        let (_, notify) = recorder();
        let mut detector =
            VisibilityDetector::new(VisibilityOptions::default().trigger_once(false));

        detector.attach(&source, &"footer".to_string(), notify);
        detector.detach();
        detector.detach();
        drop(detector);

        assert_eq!(*source.releases.borrow(), 1);
        assert!(!source.is_observing());
    }

    #[test]
    fn test_detector_reattach_releases_previous() {
        let source = FakeSource::default();
        let mut detector =
            VisibilityDetector::new(VisibilityOptions::default().trigger_once(false));

        detector.attach(&source, &"a".to_string(), |_| {});
        detector.attach(&source, &"b".to_string(), |_| {});

        assert_eq!(*source.releases.borrow(), 1);
        assert_eq!(*source.observed.borrow(), vec!["a".to_string(), "b".to_string()]);
        assert!(detector.is_attached());
    }

    #[test]
    fn test_detector_fails_open_when_unsupported() {
        let (seen, notify) = recorder();
        let mut detector = VisibilityDetector::new(VisibilityOptions::default());

        detector.attach(&UnsupportedSource, &"about".to_string(), notify);

        assert!(detector.is_visible());
        assert!(!detector.is_attached());
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn test_detector_feeds_resolution() {
        let source = FakeSource::default();
        let mut detector = VisibilityDetector::new(VisibilityOptions::default());
        let request = AnimationRequest::new(AnimationKind::FadeInLeft);

        detector.attach(&source, &"features".to_string(), |_| {});
        assert_eq!(
            resolve(&request, detector.is_visible(), mounted(false)).phase,
            AnimationPhase::Hidden
        );

        source.fire(IntersectionSample::entering(1.0));
        assert_eq!(
            resolve(&request, detector.is_visible(), mounted(false)).phase,
            AnimationPhase::Entering
        );
    }

    #[test]
    fn test_active_section_follows_scrolling() {
        let source = SectionSource::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut detector =
            ActiveSectionDetector::new(vec!["home", "about", "features", "packages"]);

        detector.attach(
            &source,
            |id| Some(id.to_string()),
            move |active| sink.borrow_mut().push(active),
        );
        assert_eq!(detector.observed_count(), 4);
        assert_eq!(detector.active(), None);

        // Scrolling down the page
        source.fire("home", IntersectionSample::entering(0.0));
        source.fire("about", IntersectionSample::entering(0.0));
        source.fire("home", IntersectionSample::leaving());
        source.fire("features", IntersectionSample::entering(0.0));
        source.fire("about", IntersectionSample::leaving());
        assert_eq!(detector.active(), Some("features"));

        // And back up
        source.fire("about", IntersectionSample::entering(0.0));
        source.fire("features", IntersectionSample::leaving());
        assert_eq!(detector.active(), Some("about"));

        assert_eq!(
            *seen.borrow(),
            vec![Some("home"), Some("about"), Some("features"), Some("about")]
        );
    }

    #[test]
    fn test_active_section_skips_missing_and_releases_all() {
        let source = SectionSource::default();
        let mut detector = ActiveSectionDetector::new(vec!["home", "faq", "packages"]);

        detector.attach(
            &source,
            |id| (id != "faq").then(|| id.to_string()),
            |_| {},
        );
        assert_eq!(detector.observed_count(), 2);

        source.fire("packages", IntersectionSample::entering(0.0));
        assert_eq!(detector.active(), Some("packages"));

        detector.detach();
        detector.detach();
        assert_eq!(*source.releases.borrow(), 2);
        assert!(source.callbacks.borrow().is_empty());

        source.fire("home", IntersectionSample::entering(0.0));
        assert_eq!(detector.active(), Some("packages"));
    }

    #[test]
    fn test_active_section_unsupported_source_observes_nothing() {
        let mut detector = ActiveSectionDetector::new(vec!["home", "about"]);
        detector.attach(&UnsupportedSource, |id| Some(id.to_string()), |_| {});

        assert_eq!(detector.observed_count(), 0);
        assert_eq!(detector.active(), None);
    }

    #[test]
    fn test_reduced_motion_defeats_stagger() {
        let request = AnimationRequest::new(AnimationKind::ScaleIn);

        for index in 0..6 {
            for visible in [false, true] {
                let resolved = resolve_staggered(&request, index, 150, visible, mounted(true));
                assert!(resolved.phase.is_final());
                assert_eq!(resolved.delay_ms, 0);
            }
        }
    }

    #[test]
    fn test_stagger_delay_monotonic_and_bounded_below() {
        let request = AnimationRequest::new(AnimationKind::FadeInUp).delay(40u32);
        let step = 120;

        let delays: Vec<u32> = (0..8)
            .map(|i| resolve_staggered(&request, i, step, true, mounted(false)).delay_ms)
            .collect();

        for (i, delay) in delays.iter().enumerate() {
            assert!(*delay >= i as u32 * step);
        }
        assert!(delays.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_theme_round_trip_keeps_explicit_choice() {
        let storage = MemoryStorage::default();
        let mut policy = ThemePolicy::new(Theme::System, false);
        policy
            .set_theme(Theme::Dark, &storage, THEME_STORAGE_KEY)
            .unwrap();

        let reloaded = ThemePolicy::load(&storage, THEME_STORAGE_KEY, false);
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_ne!(reloaded.theme(), Theme::System);
    }

    #[test]
    fn test_toggle_light_dark_light() {
        let storage = MemoryStorage::default();
        let mut policy = ThemePolicy::new(Theme::Light, false);
        assert_eq!(policy.resolved_theme(), ResolvedTheme::Light);

        policy.toggle(&storage, THEME_STORAGE_KEY).unwrap();
        assert_eq!(policy.resolved_theme(), ResolvedTheme::Dark);

        policy.toggle(&storage, THEME_STORAGE_KEY).unwrap();
        assert_eq!(policy.resolved_theme(), ResolvedTheme::Light);
    }

    #[test]
    fn test_toggle_survives_storage_failure() {
        let storage = MemoryStorage {
            fail_writes: true,
            ..Default::default()
        };
        let mut policy = ThemePolicy::new(Theme::Light, false);

        assert!(policy.toggle(&storage, THEME_STORAGE_KEY).is_err());
        assert_eq!(policy.resolved_theme(), ResolvedTheme::Dark);
        assert!(storage.values.borrow().is_empty());
    }
}
