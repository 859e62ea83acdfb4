//! Card container and its sections

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Outline,
    Ghost,
    Filled,
    Gradient,
    Glass,
    Elevated,
}

impl CardVariant {
    fn class(&self) -> &'static str {
        match self {
            CardVariant::Default => "card-default",
            CardVariant::Outline => "card-outline",
            CardVariant::Ghost => "card-ghost",
            CardVariant::Filled => "card-filled",
            CardVariant::Gradient => "card-gradient",
            CardVariant::Glass => "card-glass",
            CardVariant::Elevated => "card-elevated",
        }
    }
}

/// Inner padding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardSize {
    Sm,
    #[default]
    Default,
    Lg,
    Xl,
}

impl CardSize {
    fn class(&self) -> &'static str {
        match self {
            CardSize::Sm => "card-sm",
            CardSize::Default => "card-md",
            CardSize::Lg => "card-lg",
            CardSize::Xl => "card-xl",
        }
    }
}

/// Hover effect
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardAnimation {
    None,
    #[default]
    Hover,
    Scale,
    Lift,
    Glow,
}

impl CardAnimation {
    fn class(&self) -> &'static str {
        match self {
            CardAnimation::None => "",
            CardAnimation::Hover => "card-hover",
            CardAnimation::Scale => "hover-scale",
            CardAnimation::Lift => "card-lift",
            CardAnimation::Glow => "hover-glow",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardInteractive {
    #[default]
    None,
    /// Pointer cursor and press feedback
    Clickable,
    /// Pointer cursor only
    Hoverable,
}

impl CardInteractive {
    fn class(&self) -> &'static str {
        match self {
            CardInteractive::None => "",
            CardInteractive::Clickable => "card-clickable",
            CardInteractive::Hoverable => "card-hoverable",
        }
    }
}

pub fn card_class(
    variant: CardVariant,
    size: CardSize,
    animation: CardAnimation,
    interactive: CardInteractive,
    extra: &str,
) -> String {
    [
        "card-base gpu-accelerated",
        variant.class(),
        size.class(),
        animation.class(),
        interactive.class(),
        extra,
    ]
    .into_iter()
    .filter(|class| !class.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

fn with_extra(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

#[component]
pub fn Card(
    children: Children,
    #[prop(default = CardVariant::Default)] variant: CardVariant,
    #[prop(default = CardSize::Default)] size: CardSize,
    #[prop(default = CardAnimation::Hover)] animation: CardAnimation,
    #[prop(default = CardInteractive::None)] interactive: CardInteractive,
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <div class=card_class(variant, size, animation, interactive, &class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(
    children: Children,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    view! { <div class=with_extra("card-header", &class)>{children()}</div> }
}

#[component]
pub fn CardTitle(
    children: Children,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    view! { <h3 class=with_extra("card-title", &class)>{children()}</h3> }
}

#[component]
pub fn CardDescription(
    children: Children,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    view! { <p class=with_extra("card-description", &class)>{children()}</p> }
}

#[component]
pub fn CardContent(
    children: Children,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    view! { <div class=with_extra("card-content", &class)>{children()}</div> }
}

#[component]
pub fn CardFooter(
    children: Children,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    view! { <div class=with_extra("card-footer", &class)>{children()}</div> }
}
