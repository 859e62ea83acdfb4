use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const MENU: &str = "menu";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const ZAP: &str = "zap";
    pub const LIBRARY: &str = "library";
    pub const TROPHY: &str = "trophy";
    pub const FACEBOOK: &str = "facebook";
    pub const TWITTER: &str = "twitter";
    pub const INSTAGRAM: &str = "instagram";
}
