use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Success,
    Destructive,
    Outline,
    Ghost,
    Link,
    Gradient,
    Shimmer,
}

/// Button size options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Xl,
    Icon,
}

/// Hover and idle animation of a button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAnimation {
    None,
    /// Lift with primary glow
    Primary,
    /// Lift with secondary glow
    Secondary,
    Ghost,
    Outline,
    Lift,
    /// Scale with press feedback
    Scale,
    Glow,
    Bounce,
    Float,
    Underline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Success => "btn-success",
            ButtonVariant::Destructive => "btn-destructive",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Link => "btn-link",
            ButtonVariant::Gradient => "btn-gradient",
            ButtonVariant::Shimmer => "btn-shimmer",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-md",
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Lg => "btn-lg",
            ButtonSize::Xl => "btn-xl",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

impl ButtonAnimation {
    /// Animation used when none is given explicitly
    pub fn for_variant(variant: ButtonVariant) -> Self {
        match variant {
            ButtonVariant::Default => ButtonAnimation::Primary,
            ButtonVariant::Secondary => ButtonAnimation::Secondary,
            ButtonVariant::Ghost => ButtonAnimation::Ghost,
            ButtonVariant::Outline => ButtonAnimation::Outline,
            ButtonVariant::Link => ButtonAnimation::Underline,
            _ => ButtonAnimation::Lift,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ButtonAnimation::None => "",
            ButtonAnimation::Primary => "btn-hover-primary",
            ButtonAnimation::Secondary => "btn-hover-secondary",
            ButtonAnimation::Ghost => "btn-hover-ghost",
            ButtonAnimation::Outline => "btn-hover-outline",
            ButtonAnimation::Lift => "hover-lift-sm",
            ButtonAnimation::Scale => "hover-scale-sm",
            ButtonAnimation::Glow => "hover-glow-primary",
            ButtonAnimation::Bounce => "hover-bounce-subtle",
            ButtonAnimation::Float => "animate-float",
            ButtonAnimation::Underline => "hover-underline",
        }
    }
}

/// Full class list for a button
pub fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    animation: Option<ButtonAnimation>,
    extra: &str,
) -> String {
    let animation = animation.unwrap_or_else(|| ButtonAnimation::for_variant(variant));
    [
        "btn-base",
        variant.class(),
        size.class(),
        animation.class(),
        extra,
    ]
    .into_iter()
    .filter(|class| !class.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Type-safe button component with variants and sizes.
///
/// Renders a link styled as a button when `href` is set.
#[component]
pub fn Button(
    /// Button content (text or elements)
    children: Children,
    /// Button variant style
    #[prop(default = ButtonVariant::Default)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Default)]
    size: ButtonSize,
    /// Hover animation; derived from the variant when not set
    #[prop(optional)]
    animation: Option<ButtonAnimation>,
    /// Link target
    #[prop(optional, into)]
    href: Option<String>,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether button is disabled
    #[prop(default = false)]
    disabled: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = button_class(variant, size, animation, &class);

    match href {
        Some(href) => view! {
            <a
                href=href
                class=full_classes
                aria-label=aria_label
                on:click=move |_| {
                    if let Some(on_click) = on_click {
                        on_click.run(())
                    }
                }
            >
                {children()}
            </a>
        }
        .into_any(),
        None => view! {
            <button
                type="button"
                class=full_classes
                disabled=disabled
                aria-label=aria_label
                on:click=move |_| {
                    if let Some(on_click) = on_click {
                        on_click.run(())
                    }
                }
            >
                {children()}
            </button>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_follows_variant() {
        assert_eq!(
            ButtonAnimation::for_variant(ButtonVariant::Default),
            ButtonAnimation::Primary
        );
        assert_eq!(
            ButtonAnimation::for_variant(ButtonVariant::Secondary),
            ButtonAnimation::Secondary
        );
        assert_eq!(
            ButtonAnimation::for_variant(ButtonVariant::Link),
            ButtonAnimation::Underline
        );
        assert_eq!(
            ButtonAnimation::for_variant(ButtonVariant::Gradient),
            ButtonAnimation::Lift
        );
        assert_eq!(
            ButtonAnimation::for_variant(ButtonVariant::Destructive),
            ButtonAnimation::Lift
        );
    }

    #[test]
    fn test_button_class_uses_derived_animation() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Lg, None, "");
        assert_eq!(class, "btn-base btn-outline btn-lg btn-hover-outline");
    }

    #[test]
    fn test_explicit_animation_wins() {
        let class = button_class(
            ButtonVariant::Default,
            ButtonSize::Default,
            Some(ButtonAnimation::None),
            "w-full",
        );
        assert_eq!(class, "btn-base btn-default btn-md w-full");
    }
}
