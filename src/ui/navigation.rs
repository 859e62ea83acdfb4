//! Browser side of the header navigation state

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::logging::warn;
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::closure::Closure;

#[cfg(not(feature = "ssr"))]
use crate::core::{ActiveSectionDetector, Subscription, is_at_top};
#[cfg(not(feature = "ssr"))]
use crate::ui::visibility::WebIntersectionSource;

/// Id of the section currently on screen, `None` until one is reported.
///
/// Sections are looked up by id once the page has mounted.
pub fn use_active_section(ids: Vec<&'static str>) -> Signal<Option<&'static str>> {
    let active = RwSignal::new(None::<&'static str>);

    #[cfg(not(feature = "ssr"))]
    {
        let detector = StoredValue::new_local(ActiveSectionDetector::new(ids));

        Effect::new(move |_| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            detector.update_value(|detector| {
                detector.attach(
                    &WebIntersectionSource,
                    |id| document.get_element_by_id(id),
                    move |id| active.set(id),
                );
            });
        });

        on_cleanup(move || {
            detector.update_value(|detector| detector.detach());
        });
    }

    #[cfg(feature = "ssr")]
    let _ = ids;

    active.into()
}

/// Whether the page rests at the top. Always true on the server.
pub fn use_at_top() -> Signal<bool> {
    let at_top = RwSignal::new(true);

    #[cfg(not(feature = "ssr"))]
    {
        let listener = StoredValue::new_local(None::<Subscription>);

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let read = {
                let window = window.clone();
                move || window.scroll_y().map(is_at_top).unwrap_or(true)
            };
            at_top.set(read());

            let handler = Closure::<dyn Fn()>::new(move || {
                let next = read();
                if at_top.get_untracked() != next {
                    at_top.set(next);
                }
            });

            if window
                .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("Could not listen for scroll events");
                return;
            }

            listener.set_value(Some(Subscription::new(move || {
                let _ = window
                    .remove_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());
            })));
        });

        on_cleanup(move || {
            listener.update_value(|subscription| {
                subscription.take();
            });
        });
    }

    at_top.into()
}

/// Scroll the section with `id` to the top of the viewport.
pub fn scroll_to_section(id: &str, smooth: bool) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            warn!("No section '{}' to scroll to", id);
            return;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(if smooth {
            web_sys::ScrollBehavior::Smooth
        } else {
            web_sys::ScrollBehavior::Auto
        });
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (id, smooth);
    }
}
