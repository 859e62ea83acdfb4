//! Scroll-triggered entrance animations
//!
//! [`Animate`] wraps a single element; [`StaggerContainer`] reveals a list of
//! children in sequence from one shared trigger. Both resolve their classes
//! through [`crate::core::resolve`] so critical content and reduced motion
//! always render in the final state.

use leptos::html;
use leptos::prelude::*;

use crate::core::{
    AnimationDelay, AnimationKind, AnimationRequest, AnimationSpeed, DEFAULT_STAGGER_DELAY_MS,
    DelayBucket, VisibilityOptions, resolve, resolve_staggered,
};
use crate::ui::motion::use_motion_context;
use crate::ui::visibility::use_visibility;

/// Element rendered by [`Animate`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimateTag {
    #[default]
    Div,
    Section,
    Article,
    Span,
    Li,
    Header,
    Footer,
    P,
}

/// Animate one element into view.
///
/// Extra attributes given with `attr:` are forwarded to the rendered element.
#[component]
pub fn Animate(
    children: Children,
    /// Entrance animation
    #[prop(default = AnimationKind::FadeInUp)]
    animation: AnimationKind,
    /// Duration preset
    #[prop(default = AnimationSpeed::Normal)]
    speed: AnimationSpeed,
    /// Named delay bucket or milliseconds
    #[prop(into, default = AnimationDelay::Bucket(DelayBucket::Fast))]
    delay: AnimationDelay,
    /// Render visible immediately, never hidden
    #[prop(default = false)]
    critical: bool,
    /// Fraction of the element that must be on screen
    #[prop(default = 0.1)]
    threshold: f64,
    /// Animate only on the first entrance
    #[prop(default = true)]
    trigger_once: bool,
    /// Element to render
    #[prop(default = AnimateTag::Div)]
    as_: AnimateTag,
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let motion = use_motion_context();
    let visibility = use_visibility(
        VisibilityOptions::default()
            .threshold(threshold)
            .trigger_once(trigger_once),
    );

    let request = AnimationRequest::new(animation)
        .speed(speed)
        .delay(delay)
        .critical(critical);
    let resolved = Memo::new(move |_| resolve(&request, visibility.get(), motion.policy()));

    let class = move || resolved.with(|r| r.class_with(&class));
    let style = move || resolved.with(|r| r.style());

    // Critical content is never hidden, so it needs no observer.
    macro_rules! observed {
        ($element:ty) => {{
            let node_ref = NodeRef::<$element>::new();
            if !critical {
                visibility.bind(node_ref);
            }
            node_ref
        }};
    }

    match as_ {
        AnimateTag::Div => {
            let node_ref = observed!(html::Div);
            view! { <div node_ref=node_ref id=id class=class style=style>{children()}</div> }
                .into_any()
        }
        AnimateTag::Section => {
            let node_ref = observed!(html::Section);
            view! { <section node_ref=node_ref id=id class=class style=style>{children()}</section> }
                .into_any()
        }
        AnimateTag::Article => {
            let node_ref = observed!(html::Article);
            view! { <article node_ref=node_ref id=id class=class style=style>{children()}</article> }
                .into_any()
        }
        AnimateTag::Span => {
            let node_ref = observed!(html::Span);
            view! { <span node_ref=node_ref id=id class=class style=style>{children()}</span> }
                .into_any()
        }
        AnimateTag::Li => {
            let node_ref = observed!(html::Li);
            view! { <li node_ref=node_ref id=id class=class style=style>{children()}</li> }
                .into_any()
        }
        AnimateTag::Header => {
            let node_ref = observed!(html::Header);
            view! { <header node_ref=node_ref id=id class=class style=style>{children()}</header> }
                .into_any()
        }
        AnimateTag::Footer => {
            let node_ref = observed!(html::Footer);
            view! { <footer node_ref=node_ref id=id class=class style=style>{children()}</footer> }
                .into_any()
        }
        AnimateTag::P => {
            let node_ref = observed!(html::P);
            view! { <p node_ref=node_ref id=id class=class style=style>{children()}</p> }
                .into_any()
        }
    }
}

#[component]
pub fn FadeInUp(
    children: Children,
    #[prop(default = AnimationSpeed::Normal)] speed: AnimationSpeed,
    #[prop(into, default = AnimationDelay::Bucket(DelayBucket::Fast))] delay: AnimationDelay,
    #[prop(default = AnimateTag::Div)] as_: AnimateTag,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    view! {
        <Animate animation=AnimationKind::FadeInUp speed=speed delay=delay as_=as_ class=class>
            {children()}
        </Animate>
    }
}

#[component]
pub fn FadeInLeft(
    children: Children,
    #[prop(default = AnimationSpeed::Fast)] speed: AnimationSpeed,
    #[prop(into, default = AnimationDelay::Bucket(DelayBucket::Fast))] delay: AnimationDelay,
    #[prop(default = AnimateTag::Div)] as_: AnimateTag,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    view! {
        <Animate animation=AnimationKind::FadeInLeft speed=speed delay=delay as_=as_ class=class>
            {children()}
        </Animate>
    }
}

#[component]
pub fn FadeInRight(
    children: Children,
    #[prop(default = AnimationSpeed::Fast)] speed: AnimationSpeed,
    #[prop(into, default = AnimationDelay::Bucket(DelayBucket::Fast))] delay: AnimationDelay,
    #[prop(default = AnimateTag::Div)] as_: AnimateTag,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    view! {
        <Animate animation=AnimationKind::FadeInRight speed=speed delay=delay as_=as_ class=class>
            {children()}
        </Animate>
    }
}

#[component]
pub fn ScaleIn(
    children: Children,
    #[prop(default = AnimationSpeed::Slow)] speed: AnimationSpeed,
    #[prop(into, default = AnimationDelay::Bucket(DelayBucket::Fast))] delay: AnimationDelay,
    #[prop(default = AnimateTag::Div)] as_: AnimateTag,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    view! {
        <Animate animation=AnimationKind::ScaleIn speed=speed delay=delay as_=as_ class=class>
            {children()}
        </Animate>
    }
}

/// Above-the-fold content: always rendered in its final state.
#[component]
pub fn HeroAnimate(
    children: Children,
    #[prop(into, default = AnimationDelay::Millis(0))] delay: AnimationDelay,
    #[prop(default = AnimateTag::Div)] as_: AnimateTag,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    view! {
        <Animate critical=true delay=delay as_=as_ class=class>
            {children()}
        </Animate>
    }
}

/// Reveal children one after another.
///
/// The container is the observed element; every child becomes eligible at
/// the same moment and is offset by `index * stagger_delay_ms`.
#[component]
pub fn StaggerContainer(
    children: ChildrenFragment,
    /// Offset between consecutive children
    #[prop(default = DEFAULT_STAGGER_DELAY_MS)]
    stagger_delay_ms: u32,
    /// Entrance animation applied to each child
    #[prop(default = AnimationKind::FadeInUp)]
    animation: AnimationKind,
    #[prop(default = AnimationSpeed::Normal)] speed: AnimationSpeed,
    /// Base delay added before the stagger offset
    #[prop(into, default = AnimationDelay::Millis(0))]
    delay: AnimationDelay,
    #[prop(default = 0.1)] threshold: f64,
    /// Classes for the container
    #[prop(into, default = String::new())]
    class: String,
    /// Classes for each child wrapper
    #[prop(into, default = String::new())]
    item_class: String,
) -> impl IntoView {
    let motion = use_motion_context();
    let visibility = use_visibility(VisibilityOptions::default().threshold(threshold));
    let request = AnimationRequest::new(animation).speed(speed).delay(delay);

    let node_ref = NodeRef::<html::Div>::new();
    visibility.bind(node_ref);

    let items = children()
        .nodes
        .into_iter()
        .enumerate()
        .map(|(index, child)| {
            let item_class = item_class.clone();
            let resolved = Memo::new(move |_| {
                resolve_staggered(
                    &request,
                    index,
                    stagger_delay_ms,
                    visibility.get(),
                    motion.policy(),
                )
            });

            view! {
                <div
                    class=move || resolved.with(|r| r.class_with(&item_class))
                    style=move || resolved.with(|r| r.style())
                >
                    {child}
                </div>
            }
        })
        .collect_view();

    view! {
        <div node_ref=node_ref class=class>
            {items}
        </div>
    }
}
