use leptos::prelude::*;

/// Badge variant types for different use cases
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    /// Solid primary
    #[default]
    Default,
    /// Solid secondary
    Secondary,
    Outline,
    /// Tinted primary on a light background
    PrimarySubtle,
    Success,
    Error,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge-default",
            BadgeVariant::Secondary => "badge-secondary",
            BadgeVariant::Outline => "badge-outline",
            BadgeVariant::PrimarySubtle => "badge-primary-subtle",
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Error => "badge-error",
        }
    }
}

/// Badge size options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl BadgeSize {
    fn class(&self) -> &'static str {
        match self {
            BadgeSize::Sm => "badge-sm",
            BadgeSize::Default => "badge-md",
            BadgeSize::Lg => "badge-lg",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeAnimation {
    None,
    #[default]
    Scale,
    Glow,
}

impl BadgeAnimation {
    fn class(&self) -> &'static str {
        match self {
            BadgeAnimation::None => "",
            BadgeAnimation::Scale => "hover-scale",
            BadgeAnimation::Glow => "hover-glow",
        }
    }
}

/// Full class list for a badge
pub fn badge_class(
    variant: BadgeVariant,
    size: BadgeSize,
    animation: BadgeAnimation,
    extra: &str,
) -> String {
    let mut classes = format!("badge-base {} {}", variant.class(), size.class());
    for class in [animation.class(), extra] {
        if !class.is_empty() {
            classes.push(' ');
            classes.push_str(class);
        }
    }
    classes
}

/// Badge component for short labels
#[component]
pub fn Badge(
    children: Children,
    /// Visual variant
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Size of the badge
    #[prop(default = BadgeSize::Default)]
    size: BadgeSize,
    #[prop(default = BadgeAnimation::Scale)] animation: BadgeAnimation,
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <div class=badge_class(variant, size, animation, &class)>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_defaults() {
        assert_eq!(
            badge_class(
                BadgeVariant::default(),
                BadgeSize::default(),
                BadgeAnimation::default(),
                ""
            ),
            "badge-base badge-default badge-md hover-scale"
        );
    }

    #[test]
    fn test_badge_without_animation() {
        assert_eq!(
            badge_class(
                BadgeVariant::PrimarySubtle,
                BadgeSize::Lg,
                BadgeAnimation::None,
                "mb-4"
            ),
            "badge-base badge-primary-subtle badge-lg mb-4"
        );
    }
}
