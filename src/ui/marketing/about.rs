use leptos::prelude::*;

use crate::core::AnimationKind;
use crate::ui::animate::{FadeInLeft, FadeInRight, FadeInUp, StaggerContainer};
use crate::ui::common::{Badge, BadgeSize, BadgeVariant};
use crate::ui::icon::{Icon, icons};

const HIGHLIGHT_CLASS: &str = "px-4 py-2 font-medium";

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-4 scroll-mt-16">
            <div class="container mx-auto">
                <FadeInUp class="mb-16 hidden lg:flex justify-center">
                    <div class="inline-flex items-center rounded-full bg-card border border-border px-6 py-3 shadow-soft">
                        <span class="text-sm font-medium">
                            "Tingkatkan nilai dengan simulasi berbasis riset!"
                        </span>
                        <span class="ml-2 text-sm font-semibold text-primary whitespace-nowrap">
                            "Jadilah peserta berikutnya"
                        </span>
                        <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4 ml-1" />
                    </div>
                </FadeInUp>

                <div class="grid lg:grid-cols-2 gap-8 lg:gap-16 items-center">
                    <FadeInLeft class="lg:order-1 order-2">
                        <div class="about-illustration max-w-lg mx-auto lg:mx-0" aria-hidden="true">
                            <Icon name=icons::LIBRARY class="w-32 h-32 mx-auto opacity-80" />
                        </div>
                    </FadeInLeft>

                    <FadeInRight class="lg:order-2 order-1 space-y-8 text-center lg:text-left">
                        <h2 class="font-bold text-3xl sm:text-4xl space-y-2">
                            <span>"Tentang,"</span>
                            <span class="block">
                                <span class="text-primary">"Prestige"</span>
                                " "
                                <span class="text-secondary">"Academy"</span>
                            </span>
                        </h2>

                        <div class="space-y-6 max-w-lg mx-auto lg:mx-0 text-muted leading-relaxed">
                            <p>
                                "Selamat datang di Prestige Academy, tempat di mana semangat belajar dan potensi \
                                 berharga bertemu. Seperti Jalak Bali yang langka dan istimewa, kami percaya bahwa \
                                 setiap individu memiliki keunikan, transformasi pengetahuan, dan kebebasan untuk \
                                 terbang menuju puncak prestasi."
                            </p>
                            <p class="hidden lg:block">
                                "Bersama kami, kamu akan dipersiapkan dengan materi dan tryout berkualitas untuk \
                                 menghadapi seleksi-seleksi penting, dengan keseimbangan sempurna antara tradisi dan \
                                 inovasi. Bergabunglah dan terbang lebih tinggi bersama kami!"
                            </p>
                        </div>

                        <StaggerContainer
                            animation=AnimationKind::ScaleIn
                            class="flex flex-wrap gap-3 justify-center lg:justify-start"
                        >
                            <Badge variant=BadgeVariant::PrimarySubtle size=BadgeSize::Sm class=HIGHLIGHT_CLASS>
                                "#Platform Terintegrasi"
                            </Badge>
                            <Badge variant=BadgeVariant::PrimarySubtle size=BadgeSize::Sm class=HIGHLIGHT_CLASS>
                                "#Soal Berbasis Field Report"
                            </Badge>
                            <Badge variant=BadgeVariant::PrimarySubtle size=BadgeSize::Sm class=HIGHLIGHT_CLASS>
                                "#Evaluasi Diagnostik Presisi Tinggi"
                            </Badge>
                            <Badge variant=BadgeVariant::PrimarySubtle size=BadgeSize::Sm class=HIGHLIGHT_CLASS>
                                "#Komunitas Profesional"
                            </Badge>
                        </StaggerContainer>
                    </FadeInRight>
                </div>
            </div>
        </section>
    }
}
