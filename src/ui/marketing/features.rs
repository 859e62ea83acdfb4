//! Tabbed feature switcher

use leptos::prelude::*;

use crate::core::{AnimationDelay, DelayBucket, stagger_offset_ms};
use crate::ui::animate::{Animate, FadeInLeft, FadeInRight, FadeInUp};
use crate::ui::common::{Button, ButtonSize, Card};
use crate::ui::icon::{Icon, icons};

/// Accent used for the active tab and the feature's checkmarks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Accent {
    Primary,
    Secondary,
    Success,
}

impl Accent {
    fn tab_class(&self) -> &'static str {
        match self {
            Accent::Primary => "bg-primary text-white",
            Accent::Secondary => "bg-secondary text-white",
            Accent::Success => "bg-success text-white",
        }
    }

    fn bubble_class(&self) -> &'static str {
        match self {
            Accent::Primary => "bg-primary/10",
            Accent::Secondary => "bg-secondary/10",
            Accent::Success => "bg-success/10",
        }
    }

    fn text_class(&self) -> &'static str {
        match self {
            Accent::Primary => "text-primary",
            Accent::Secondary => "text-secondary",
            Accent::Success => "text-success",
        }
    }
}

struct Feature {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    icon: &'static str,
    description: &'static str,
    benefits: &'static [&'static str],
    accent: Accent,
}

const FEATURES: &[Feature] = &[
    Feature {
        id: "simulasi",
        title: "Simulasi Ujian",
        subtitle: "Mirip Asli",
        icon: icons::ZAP,
        description: "Rasakan pengalaman ujian yang sesungguhnya dengan sistem tryout yang dirancang \
                      sama persis dengan tes CAT sesungguhnya.",
        benefits: &[
            "Materi & soal terbaru",
            "Analisis hasil otomatis",
            "Simulasi ujian mirip asli",
        ],
        accent: Accent::Primary,
    },
    Feature {
        id: "bank-soal",
        title: "Bank Soal Lengkap",
        subtitle: "Teruji & Akurat",
        icon: icons::LIBRARY,
        description: "Dapatkan akses ke 50+ paket soal premium yang dirancang oleh tim ahli berdasarkan \
                      riset mendalam dari blueprint dan tren ujian tahun-tahun sebelumnya.",
        benefits: &[
            "50+ paket soal siap pakai",
            "Sesuai blueprint ujian terbaru",
            "Tingkat kesulitan bervariasi (mudah, sedang, sulit)",
            "Termasuk pembahasan detail & kunci jawaban",
        ],
        accent: Accent::Secondary,
    },
    Feature {
        id: "peringkat",
        title: "Sistem Peringkat",
        subtitle: "Kompetitif",
        icon: icons::TROPHY,
        description: "Bersaing dengan ribuan peserta lain dan lihat posisi peringkat Anda untuk terus \
                      memotivasi diri menjadi yang terbaik.",
        benefits: &[
            "Leaderboard nasional",
            "Ranking berdasarkan kategori",
            "Kompetisi mingguan & bulanan",
        ],
        accent: Accent::Success,
    },
];

/// Delay between consecutive benefit rows
const BENEFIT_STEP_MS: u32 = 100;

fn benefit_delay(index: usize) -> AnimationDelay {
    AnimationDelay::Millis(stagger_offset_ms(index, BENEFIT_STEP_MS))
}

/// Feature by id, falling back to the first one
fn feature_by_id(id: &str) -> &'static Feature {
    FEATURES
        .iter()
        .find(|feature| feature.id == id)
        .unwrap_or(&FEATURES[0])
}

#[component]
pub fn FeaturesSection() -> impl IntoView {
    let active = RwSignal::new(FEATURES[0].id);

    view! {
        <section id="features" class="relative overflow-hidden py-20 px-4 scroll-mt-16">
            <div class="container mx-auto space-y-8">
                <FadeInUp class="text-center space-y-4">
                    <h2 class="font-bold text-3xl sm:text-4xl">"Fitur Unggulan Prestige Academy"</h2>
                    <p class="text-muted max-w-3xl mx-auto">
                        "Persiapkan diri dengan pengalaman terbaik berbasis riset untuk menghadapi ujian di depan Anda."
                    </p>
                </FadeInUp>

                <div class="max-w-7xl mx-auto">
                    <FadeInUp class="mb-10 flex justify-center">
                        <Card class="flex flex-col items-stretch p-2 space-y-2 w-full max-w-sm lg:inline-flex lg:flex-row lg:items-center lg:space-y-0 lg:space-x-6 lg:w-auto lg:max-w-none">
                            {FEATURES
                                .iter()
                                .map(|feature| view! { <FeatureTab feature=feature active=active /> })
                                .collect_view()}
                        </Card>
                    </FadeInUp>

                    // Re-rendered per tab so the panel animates in again
                    {move || {
                        let feature = feature_by_id(active.get());
                        view! { <FeaturePanel feature=feature /> }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureTab(feature: &'static Feature, active: RwSignal<&'static str>) -> impl IntoView {
    let is_active = move || active.get() == feature.id;

    view! {
        <button
            type="button"
            class=move || {
                let state = if is_active() { feature.accent.tab_class() } else { "hover:bg-muted" };
                format!(
                    "relative flex items-center gap-3 px-5 py-3 rounded-full transition-colors justify-center w-full lg:w-auto lg:justify-start {}",
                    state,
                )
            }
            aria-pressed=move || is_active().to_string()
            on:click=move |_| active.set(feature.id)
        >
            <Icon name=feature.icon class="w-5 h-5" />
            <span class="font-semibold text-sm md:text-base whitespace-nowrap">{feature.title}</span>
        </button>
    }
}

#[component]
fn FeaturePanel(feature: &'static Feature) -> impl IntoView {
    let accent = feature.accent.text_class();
    let bubble = format!(
        "w-7 h-7 rounded-full flex items-center justify-center flex-shrink-0 {}",
        feature.accent.bubble_class()
    );

    view! {
        <div class="flex flex-col gap-8 lg:grid lg:grid-cols-2 lg:gap-16 lg:items-center">
            <FadeInLeft class="flex items-center justify-center">
                <div class="feature-mockup" aria-hidden="true">
                    <Icon name=feature.icon class="w-24 h-24" />
                </div>
            </FadeInLeft>

            <FadeInRight class="space-y-8">
                <div class="space-y-4">
                    <h3 class="font-bold text-2xl sm:text-3xl leading-tight">
                        {feature.title}
                        " "
                        <span class=format!("block {}", accent)>{feature.subtitle}</span>
                    </h3>
                    <p class="text-muted">{feature.description}</p>
                </div>

                <div class="space-y-4">
                    {feature
                        .benefits
                        .iter()
                        .enumerate()
                        .map(|(index, benefit)| {
                            let delay = benefit_delay(index);
                            let bubble = bubble.clone();
                            view! {
                                <Animate delay=delay class="flex items-center gap-4">
                                    <div class=bubble>
                                        <Icon name=icons::CHECK class="w-4 h-4" />
                                    </div>
                                    <span class="font-medium">{*benefit}</span>
                                </Animate>
                            }
                        })
                        .collect_view()}
                </div>

                <FadeInUp delay=DelayBucket::Normal class="pt-4">
                    <Button size=ButtonSize::Lg href="#packages" class="group rounded-full px-8">
                        "Pelajari Lebih Lanjut"
                        <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5 ml-2" />
                    </Button>
                </FadeInUp>
            </FadeInRight>
        </div>
    }
}
