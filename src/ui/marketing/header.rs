use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::ui::common::{Button, ButtonAnimation, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::use_motion_context;
use crate::ui::navigation::{scroll_to_section, use_active_section, use_at_top};
use crate::ui::theme::use_theme_context;

/// In-page navigation entry
struct NavItem {
    name: &'static str,
    /// Id of the target section
    id: &'static str,
}

impl NavItem {
    fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

const NAVIGATION: &[NavItem] = &[
    NavItem { name: "Beranda", id: "home" },
    NavItem { name: "Tentang Kami", id: "about" },
    NavItem { name: "Keunggulan", id: "features" },
    NavItem { name: "Paket Belajar", id: "packages" },
];

fn header_bar_class(at_top: bool) -> &'static str {
    if at_top {
        "motion-transition border-b border-transparent"
    } else {
        "motion-transition bg-background/80 backdrop-blur-md border-b border-border shadow-md"
    }
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "relative text-sm font-medium transition-colors hover:text-primary text-primary"
    } else {
        "relative text-sm font-medium transition-colors hover:text-primary text-muted"
    }
}

fn mobile_nav_link_class(active: bool) -> &'static str {
    if active {
        "block py-3 px-4 text-base font-medium rounded-lg transition-colors text-primary bg-primary/10 shadow-sm"
    } else {
        "block py-3 px-4 text-base font-medium rounded-lg transition-colors text-muted \
         hover:text-foreground hover:bg-muted"
    }
}

/// Fixed marketing header with mobile menu support
#[component]
pub fn MarketingHeader() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let motion = use_motion_context();
    let at_top = use_at_top();
    let active_section = use_active_section(NAVIGATION.iter().map(|item| item.id).collect());

    let is_active = move |id: &'static str| active_section.get() == Some(id);

    // Smooth scroll to the section, then close the mobile menu
    let navigate = move |ev: MouseEvent, id: &'static str| {
        ev.prevent_default();
        scroll_to_section(id, !motion.reduced_motion_requested_untracked());
        set_mobile_menu_open.set(false);
    };

    view! {
        <header id="home-header" class="fixed top-0 left-0 right-0 z-50">
            <div class=move || header_bar_class(at_top.get())>
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        // Logo
                        <a
                            href="#home"
                            class="flex items-center gap-3"
                            on:click=move |ev| navigate(ev, "home")
                        >
                            <Logo />
                        </a>

                        // Desktop Navigation
                        <nav class="hidden lg:flex items-center space-x-8">
                            {NAVIGATION
                                .iter()
                                .map(|item| {
                                    let id = item.id;
                                    view! {
                                        <a
                                            href=item.href()
                                            class=move || nav_link_class(is_active(id))
                                            aria-current=move || is_active(id).then_some("page")
                                            on:click=move |ev| navigate(ev, id)
                                        >
                                            {item.name}
                                            <Show when=move || is_active(id)>
                                                <span class="absolute -bottom-2 left-0 right-0 h-0.5 bg-primary rounded-full"></span>
                                            </Show>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>

                        // Desktop Actions
                        <div class="hidden md:flex items-center space-x-4">
                            <ThemeToggle />
                            <Button
                                variant=ButtonVariant::Secondary
                                animation=ButtonAnimation::Scale
                                href="/register"
                                class="font-semibold"
                            >
                                "Daftar"
                            </Button>
                            <Button
                                variant=ButtonVariant::Default
                                animation=ButtonAnimation::Scale
                                href="/login"
                            >
                                "Masuk"
                            </Button>
                        </div>

                        // Mobile menu button
                        <button
                            type="button"
                            class="md:hidden p-2 rounded-lg hover:bg-muted transition-colors"
                            on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                            aria-label="Toggle mobile menu"
                            aria-expanded=move || mobile_menu_open.get().to_string()
                        >
                            {move || {
                                if mobile_menu_open.get() {
                                    view! { <Icon name=icons::X class="w-6 h-6" /> }
                                } else {
                                    view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <div
                class="md:hidden overflow-hidden motion-transition bg-background rounded-b-3xl"
                class:max-h-0=move || !mobile_menu_open.get()
                class:max-h-screen=move || mobile_menu_open.get()
                class:shadow-lg=move || mobile_menu_open.get()
            >
                <nav class="py-4 px-2 space-y-1 border-t border-border">
                    {NAVIGATION
                        .iter()
                        .map(|item| {
                            let id = item.id;
                            view! {
                                <a
                                    href=item.href()
                                    class=move || mobile_nav_link_class(is_active(id))
                                    aria-current=move || is_active(id).then_some("page")
                                    on:click=move |ev| navigate(ev, id)
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="border-t border-border py-4 px-4 space-y-4">
                    <MobileThemeRow />
                    <Button
                        size=ButtonSize::Lg
                        href="/login"
                        class="w-full justify-center rounded-xl"
                    >
                        "Masuk"
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Lg
                        href="/register"
                        class="w-full font-semibold rounded-xl"
                    >
                        "Daftar"
                    </Button>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="text-xl font-bold">
            <span class="text-primary">"Prestige"</span>
            <span class="text-secondary ml-1">"Academy"</span>
        </div>
    }
}

/// Switch between light and dark.
///
/// The stored theme is only known after mount, so until then a neutral
/// placeholder is rendered instead of a guess.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <Show
            when=move || theme.mounted()
            fallback=|| view! {
                <div class="w-10 h-6 bg-muted rounded-full animate-pulse" aria-hidden="true"></div>
            }
        >
            <button
                type="button"
                class="theme-toggle"
                on:click=move |_| theme.toggle()
                aria-label=move || {
                    if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
                }
            >
                <span class="theme-toggle-thumb" class:translate-x-4=move || theme.is_dark()>
                    {move || {
                        if theme.is_dark() {
                            view! { <Icon name=icons::MOON class="w-3 h-3" /> }
                        } else {
                            view! { <Icon name=icons::SUN class="w-3 h-3" /> }
                        }
                    }}
                </span>
            </button>
        </Show>
    }
}

#[component]
fn MobileThemeRow() -> impl IntoView {
    let theme = use_theme_context();

    let label = move || {
        if !theme.mounted() {
            "Mode Tema"
        } else {
            theme.resolved_theme().as_theme().display_name()
        }
    };

    view! {
        <div class="flex items-center justify-between p-3 bg-background rounded-lg border border-border">
            <span class="text-sm font-medium">{label}</span>
            <ThemeToggle />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_targets_sections() {
        let hrefs: Vec<String> = NAVIGATION.iter().map(NavItem::href).collect();
        assert_eq!(hrefs, vec!["#home", "#about", "#features", "#packages"]);
    }

    #[test]
    fn test_header_bar_solid_once_scrolled() {
        assert!(!header_bar_class(true).contains("shadow-md"));
        assert!(header_bar_class(false).contains("backdrop-blur-md"));
        assert!(header_bar_class(false).contains("shadow-md"));
    }

    #[test]
    fn test_active_link_highlighted() {
        assert!(nav_link_class(true).ends_with("text-primary"));
        assert!(nav_link_class(false).ends_with("text-muted"));
        assert!(mobile_nav_link_class(true).contains("bg-primary/10"));
        assert!(!mobile_nav_link_class(false).contains("bg-primary/10"));
    }
}
