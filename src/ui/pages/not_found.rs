//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::animate::HeroAnimate;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Halaman Tidak Ditemukan - Prestige Academy" />

        <div class="min-h-screen flex flex-col items-center justify-center p-4">
            <HeroAnimate class="text-center">
                <h1 class="text-6xl font-bold text-primary mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Halaman Tidak Ditemukan"</h2>

                <p class="text-muted mb-8 max-w-md mx-auto">
                    "Halaman yang kamu cari tidak ada atau sudah dipindahkan."
                </p>

                <A href="/" attr:class="btn-base btn-default btn-md btn-hover-primary">
                    "Kembali ke Beranda"
                </A>
            </HeroAnimate>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-muted">"© 2025 Prestige Academy"</p>
            </div>
        </div>
    }
}
