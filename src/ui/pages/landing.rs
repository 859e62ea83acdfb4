//! Landing page component
//!
//! Marketing landing page for Prestige Academy:
//! - SEO meta tags
//! - Hero section rendered in its final state
//! - About, features and packages sections revealed on scroll
//! - Footer with contact and social links

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::marketing::{
    AboutSection, FeaturesSection, Footer, HeroSection, MarketingHeader, PackagesSection,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-background overflow-x-hidden">
            <MarketingHeader />

            <main>
                <HeroSection />
                <AboutSection />
                <FeaturesSection />
                <PackagesSection />
            </main>

            <Footer />
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Prestige Academy - Platform Tryout Terpercaya" />

        <Meta
            name="description"
            content="Platform tryout CPNS, SNBT, Kedinasan dan BUMN dengan simulasi ujian mirip asli, bank soal lengkap dan sistem peringkat nasional."
        />
        <Meta name="keywords" content="tryout cpns, tryout skd, simulasi cat, bank soal, prestige academy" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Prestige Academy - Platform Tryout Terpercaya" />
        <Meta
            property="og:description"
            content="Langkah awal menuju karir impian CPNS bersama Prestige Academy."
        />
    }
}
