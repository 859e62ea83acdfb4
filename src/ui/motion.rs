//! Motion context: reduced-motion preference and mount state
//!
//! Provided once at the application root. Consumers only read it; the
//! provider is the single writer.

use leptos::prelude::*;

use crate::core::MotionPolicy;
#[cfg(not(feature = "ssr"))]
use crate::core::{REDUCED_MOTION_QUERY, Subscription};
#[cfg(not(feature = "ssr"))]
use crate::ui::media::watch_media_query;

/// Reactive handle on the process-wide [`MotionPolicy`]
#[derive(Clone, Copy)]
pub struct MotionContext {
    policy: RwSignal<MotionPolicy>,
}

impl MotionContext {
    /// Current policy (tracked)
    pub fn policy(&self) -> MotionPolicy {
        self.policy.get()
    }

    pub fn reduced_motion_requested(&self) -> bool {
        self.policy.with(|policy| policy.reduced_motion_requested())
    }

    /// For event handlers, which should not subscribe
    pub fn reduced_motion_requested_untracked(&self) -> bool {
        self.policy
            .with_untracked(|policy| policy.reduced_motion_requested())
    }

    pub fn mounted(&self) -> bool {
        self.policy.with(|policy| policy.mounted())
    }
}

/// Create the motion context and provide it to the tree.
///
/// With `respect_reduced_motion` off the OS preference is never read.
pub fn provide_motion_context(respect_reduced_motion: bool) -> MotionContext {
    let policy = RwSignal::new(MotionPolicy::new());
    let ctx = MotionContext { policy };

    #[cfg(not(feature = "ssr"))]
    {
        let listener = StoredValue::new_local(None::<Subscription>);

        // Runs once, after the first paint
        Effect::new(move |_| {
            if !respect_reduced_motion {
                policy.update(|p| p.mount(false));
                return;
            }

            match watch_media_query(REDUCED_MOTION_QUERY, move |reduced| {
                policy.update(|p| p.set_reduced_motion(reduced));
            }) {
                Some((reduced, subscription)) => {
                    policy.update(|p| p.mount(reduced));
                    listener.set_value(Some(subscription));
                }
                None => policy.update(|p| p.mount(false)),
            }
        });

        on_cleanup(move || {
            listener.update_value(|subscription| {
                subscription.take();
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = respect_reduced_motion;
    }

    provide_context(ctx);
    ctx
}

/// Use motion context from anywhere in the component tree
pub fn use_motion_context() -> MotionContext {
    use_context::<MotionContext>().expect("MotionContext should be provided")
}

/// Provides [`MotionContext`] and exposes its timing as CSS variables.
#[component]
pub fn MotionProvider(
    children: Children,
    /// Follow the OS reduced motion preference
    #[prop(default = true)]
    respect_reduced_motion: bool,
) -> impl IntoView {
    let motion = provide_motion_context(respect_reduced_motion);
    let css_variables = move || motion.policy().transition().css_variables();

    view! {
        <div
            class="motion-root"
            class:reduce-motion=move || motion.reduced_motion_requested()
            style=css_variables
        >
            {children()}
        </div>
    }
}
