use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::core::ThemeSettings;
use crate::ui::pages::{LandingPage, NotFoundPage};
use crate::ui::{MotionProvider, ThemeProvider, ThemeScript};

/// Read by both the pre-paint script and the provider
const THEME: ThemeSettings = ThemeSettings::DEFAULT;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                // Must run before the body paints
                <ThemeScript settings=THEME/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/prestige-landing.css"/>

        <Title text="Prestige Academy - Platform Tryout Terpercaya"/>

        <ThemeProvider settings=THEME>
            <MotionProvider>
                <Router>
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=LandingPage/>
                    </Routes>
                </Router>
            </MotionProvider>
        </ThemeProvider>
    }
}
