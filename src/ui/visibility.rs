//! Browser side of the visibility detector
//!
//! [`use_visibility`] gives each component its own [`VisibilityDetector`]
//! backed by `IntersectionObserver`. The detector is bound to the rendered
//! element through a [`NodeRef`] and released when the owning component is
//! cleaned up.

use leptos::prelude::*;
use leptos::tachys::html::element::ElementType;
use leptos::wasm_bindgen::JsCast;

use crate::core::VisibilityOptions;
#[cfg(not(feature = "ssr"))]
use crate::core::{
    DetectorError, IntersectionCallback, IntersectionSample, IntersectionSource, ObserverAction,
    Subscription, VisibilityDetector,
};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsValue;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::closure::Closure;

/// `IntersectionObserver` as an [`IntersectionSource`]
#[cfg(not(feature = "ssr"))]
pub struct WebIntersectionSource;

#[cfg(not(feature = "ssr"))]
impl IntersectionSource for WebIntersectionSource {
    type Target = web_sys::Element;

    fn observe(
        &self,
        target: &web_sys::Element,
        options: &VisibilityOptions,
        mut on_change: IntersectionCallback,
    ) -> Result<Subscription, DetectorError> {
        let window = web_sys::window().ok_or(DetectorError::Unsupported)?;
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return Err(DetectorError::Unsupported);
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let sample = IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        intersection_ratio: entry.intersection_ratio(),
                    };
                    if on_change(sample) == ObserverAction::Detach {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| DetectorError::Construct(format!("{:?}", e)))?;
        observer.observe(target);

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

/// Visibility of one rendered element.
#[derive(Clone, Copy)]
pub struct VisibilityHandle {
    is_visible: RwSignal<bool>,
    #[cfg(not(feature = "ssr"))]
    detector: StoredValue<VisibilityDetector, LocalStorage>,
}

impl VisibilityHandle {
    /// Whether the element has entered the viewport (tracked)
    pub fn get(&self) -> bool {
        self.is_visible.get()
    }

    /// Attach the detector to `node_ref` once the element is mounted.
    /// Until then the element simply reports not visible.
    pub fn bind<E>(&self, node_ref: NodeRef<E>)
    where
        E: ElementType + 'static,
        E::Output: JsCast + Clone + 'static,
    {
        #[cfg(not(feature = "ssr"))]
        {
            let handle = *self;
            node_ref.on_load(move |element| {
                handle.attach(element.unchecked_into::<web_sys::Element>());
            });
        }

        #[cfg(feature = "ssr")]
        {
            let _ = node_ref;
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn attach(&self, element: web_sys::Element) {
        let is_visible = self.is_visible;
        self.detector.update_value(|detector| {
            detector.attach(&WebIntersectionSource, &element, move |visible| {
                is_visible.set(visible);
            });
        });
    }
}

/// Create a visibility detector owned by the calling component.
pub fn use_visibility(options: VisibilityOptions) -> VisibilityHandle {
    let is_visible = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    let detector = {
        let detector = StoredValue::new_local(VisibilityDetector::new(options));
        on_cleanup(move || {
            detector.update_value(|detector| detector.detach());
        });
        detector
    };

    #[cfg(feature = "ssr")]
    let _ = options;

    VisibilityHandle {
        is_visible,
        #[cfg(not(feature = "ssr"))]
        detector,
    }
}
