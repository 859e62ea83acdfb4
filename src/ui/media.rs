//! `matchMedia` subscriptions shared by the motion and theme contexts

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::closure::Closure;

#[cfg(not(feature = "ssr"))]
use crate::core::Subscription;

/// Read `query` and follow its changes.
///
/// Returns the current match state and a subscription that removes the
/// listener when released. `None` when `matchMedia` is unavailable.
#[cfg(not(feature = "ssr"))]
pub fn watch_media_query(
    query: &str,
    on_change: impl Fn(bool) + 'static,
) -> Option<(bool, Subscription)> {
    let window = web_sys::window()?;
    let media_query = window.match_media(query).ok().flatten()?;
    let matches = media_query.matches();

    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
        move |e: web_sys::MediaQueryListEvent| {
            on_change(e.matches());
        },
    );

    if media_query
        .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
        .is_err()
    {
        return Some((matches, Subscription::new(|| {})));
    }

    let subscription = Subscription::new(move || {
        let _ = media_query
            .remove_event_listener_with_callback("change", handler.as_ref().unchecked_ref());
    });

    Some((matches, subscription))
}
