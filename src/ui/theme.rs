//! Theme context for light/dark/system selection
//!
//! Provides:
//! - BrowserStorage, `localStorage` behind [`ThemeStorage`]
//! - ThemeContext for reactive theme state
//! - System theme detection via prefers-color-scheme
//! - ThemeScript, applying the persisted theme before first paint

use leptos::logging::warn;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

#[cfg(not(feature = "ssr"))]
use crate::core::Subscription;
use crate::core::{
    DARK_SCHEME_QUERY, ResolvedTheme, StorageError, Theme, ThemePolicy, ThemeSettings,
    ThemeStorage,
};
#[cfg(not(feature = "ssr"))]
use crate::ui::media::watch_media_query;

/// Class on `<html>` that enables color transitions between themes
const TRANSITIONS_CLASS: &str = "theme-transitions";

/// `window.localStorage`
pub struct BrowserStorage;

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Read(format!("{:?}", e)))?
        .ok_or(StorageError::Unavailable)
}

#[cfg(not(feature = "ssr"))]
impl ThemeStorage for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

#[cfg(feature = "ssr")]
impl ThemeStorage for BrowserStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn store(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    policy: RwSignal<ThemePolicy>,
    resolved: Memo<ResolvedTheme>,
    /// False until the persisted choice has been read on the client
    mounted: RwSignal<bool>,
    storage_key: &'static str,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.policy.with(|policy| policy.theme())
    }

    /// Theme actually painted (tracked)
    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.resolved.get()
    }

    pub fn is_dark(&self) -> bool {
        self.resolved.get().is_dark()
    }

    pub fn mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Select a theme and persist it. A failed write keeps the new theme
    /// for this session.
    pub fn set_theme(&self, theme: Theme) {
        let key = self.storage_key;
        let mut result = Ok(());
        self.policy
            .update(|policy| result = policy.set_theme(theme, &BrowserStorage, key));
        report_storage_error(result);
    }

    /// Switch to the opposite of the painted theme.
    pub fn toggle(&self) {
        let key = self.storage_key;
        let mut result = Ok(());
        self.policy
            .update(|policy| result = policy.toggle(&BrowserStorage, key));
        report_storage_error(result);
    }
}

fn report_storage_error(result: Result<(), StorageError>) {
    if let Err(err) = result {
        warn!("Theme not persisted: {}", err);
    }
}

/// Apply or remove the dark class on the document element
#[cfg(not(feature = "ssr"))]
fn apply_theme_class(theme: ResolvedTheme) {
    if let Some(html) = document_element() {
        let class_list = html.class_list();
        if theme.is_dark() {
            let _ = class_list.add_1("dark");
        } else {
            let _ = class_list.remove_1("dark");
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn document_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Provide theme context to the application
///
/// Server rendering always sees the default policy; the stored choice is
/// read once the client mounts.
pub fn provide_theme_context(settings: ThemeSettings) -> ThemeContext {
    let ThemeSettings {
        storage_key,
        enable_system,
        enable_transitions,
    } = settings;
    let policy = RwSignal::new(ThemePolicy::default());
    let mounted = RwSignal::new(false);
    let resolved = Memo::new(move |_| policy.with(|policy| policy.resolved_theme()));

    let ctx = ThemeContext {
        policy,
        resolved,
        mounted,
        storage_key,
    };

    #[cfg(not(feature = "ssr"))]
    {
        let listener = StoredValue::new_local(None::<Subscription>);

        Effect::new(move |_| {
            let system_dark = if enable_system {
                match watch_media_query(DARK_SCHEME_QUERY, move |dark| {
                    policy.update(|policy| policy.set_system_preference(dark));
                }) {
                    Some((dark, subscription)) => {
                        listener.set_value(Some(subscription));
                        dark
                    }
                    None => false,
                }
            } else {
                false
            };

            policy.set(ThemePolicy::load(&BrowserStorage, storage_key, system_dark));
            mounted.set(true);

            if enable_transitions {
                if let Some(html) = document_element() {
                    let _ = html.class_list().add_1(TRANSITIONS_CLASS);
                }
            }
        });

        // The pre-paint script owns the class until mount
        Effect::new(move |_| {
            if mounted.get() {
                apply_theme_class(resolved.get());
            }
        });

        on_cleanup(move || {
            listener.update_value(|subscription| {
                subscription.take();
            });
            if let Some(html) = document_element() {
                let _ = html.class_list().remove_1(TRANSITIONS_CLASS);
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (enable_system, enable_transitions);
    }

    provide_context(ctx);
    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Pass the same [`ThemeSettings`] as the [`ThemeScript`] in the shell.
#[component]
pub fn ThemeProvider(
    children: Children,
    #[prop(optional)] settings: ThemeSettings,
) -> impl IntoView {
    provide_theme_context(settings);
    children()
}

/// Inline script for `<head>` that sets the dark class before hydration,
/// so a stored dark theme never flashes light.
#[component]
pub fn ThemeScript(#[prop(optional)] settings: ThemeSettings) -> impl IntoView {
    view! { <script inner_html=theme_script(&settings)></script> }
}

fn theme_script(settings: &ThemeSettings) -> String {
    // Without system support an unset or `system` choice paints light
    let follows_system = if settings.enable_system {
        format!(
            "(!t||t==='{system}')&&window.matchMedia('{query}').matches",
            system = Theme::System.as_str(),
            query = DARK_SCHEME_QUERY,
        )
    } else {
        "false".to_string()
    };

    format!(
        "(function(){{try{{var t=localStorage.getItem('{key}');\
         var d=t==='{dark}'||({follows_system});\
         if(d){{document.documentElement.classList.add('dark');}}}}catch(e){{}}}})();",
        key = settings.storage_key,
        dark = Theme::Dark.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::THEME_STORAGE_KEY;

    fn balanced(script: &str) -> bool {
        script.matches('{').count() == script.matches('}').count()
            && script.matches('(').count() == script.matches(')').count()
    }

    #[test]
    fn test_theme_script_reads_storage_key() {
        let settings = ThemeSettings {
            storage_key: "custom-key",
            ..ThemeSettings::DEFAULT
        };
        let script = theme_script(&settings);
        assert!(script.contains("localStorage.getItem('custom-key')"));
        assert!(script.contains("prefers-color-scheme: dark"));
        assert!(script.contains("classList.add('dark')"));
    }

    #[test]
    fn test_theme_script_is_balanced() {
        let script = theme_script(&ThemeSettings::default());
        assert!(script.contains(THEME_STORAGE_KEY));
        assert!(balanced(&script));
        assert!(script.starts_with("(function(){"));
        assert!(script.ends_with("})();"));
    }

    #[test]
    fn test_theme_script_ignores_os_preference_without_system() {
        let settings = ThemeSettings {
            enable_system: false,
            ..ThemeSettings::DEFAULT
        };
        let script = theme_script(&settings);

        assert!(!script.contains("matchMedia"));
        assert!(script.contains("var d=t==='dark'||(false);"));
        assert!(balanced(&script));
    }
}
