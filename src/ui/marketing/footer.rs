use leptos::prelude::*;

use crate::core::{AnimationKind, AnimationSpeed, DelayBucket};
use crate::ui::animate::{Animate, FadeInLeft, FadeInUp, StaggerContainer};
use crate::ui::icon::{Icon, icons};

const FOOTER_LINK_CLASS: &str = "block text-sm text-white hover:text-white/80 transition-colors";
const SOCIAL_LINK_CLASS: &str = "w-10 h-10 bg-white/20 rounded-lg flex items-center justify-center \
     hover:bg-white/30 transition-colors";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative w-full overflow-hidden">
            <div class="relative z-10 pt-12 lg:pt-20">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <FadeInUp class="mx-auto w-full max-w-sm sm:max-w-md md:max-w-xl lg:max-w-3xl xl:max-w-4xl">
                        <div class="bg-primary rounded-t-3xl shadow-xl overflow-hidden">
                            <div class="px-4 py-6 md:px-8 md:py-8 lg:px-10 lg:py-10">
                                <div class="md:grid md:grid-cols-3 md:gap-8 lg:gap-10">
                                    <FadeInLeft delay=DelayBucket::Normal class="mb-8 md:mb-0">
                                        <CompanyInfo />
                                    </FadeInLeft>

                                    <div class="md:col-span-2 grid grid-cols-2 gap-4 sm:gap-6 md:gap-8">
                                        <FadeInUp>
                                            <h4 class="text-white font-bold mb-4 md:mb-6">"Layanan"</h4>
                                            <StaggerContainer
                                                animation=AnimationKind::FadeInLeft
                                                speed=AnimationSpeed::Fast
                                                class="space-y-3 sm:space-y-4"
                                            >
                                                <a href="#packages" class=FOOTER_LINK_CLASS>"Tryout SNBT"</a>
                                                <a href="#packages" class=FOOTER_LINK_CLASS>"Tryout Kedinasan"</a>
                                                <a href="#packages" class=FOOTER_LINK_CLASS>"Tryout CPNS"</a>
                                                <a href="#packages" class=FOOTER_LINK_CLASS>"Tryout BUMN"</a>
                                            </StaggerContainer>
                                        </FadeInUp>

                                        <FadeInUp delay=DelayBucket::Normal>
                                            <h4 class="text-white font-bold mb-4 md:mb-6">"Informasi"</h4>
                                            <StaggerContainer
                                                animation=AnimationKind::FadeInLeft
                                                speed=AnimationSpeed::Fast
                                                class="space-y-3 sm:space-y-4"
                                            >
                                                <a href="#" class=FOOTER_LINK_CLASS>"Kebijakan Privasi"</a>
                                                <a href="#" class=FOOTER_LINK_CLASS>"Syarat & Ketentuan"</a>
                                                <a href="#about" class=FOOTER_LINK_CLASS>"Tentang Prestige Academy"</a>
                                                <a href="#" class=FOOTER_LINK_CLASS>"Testimoni"</a>
                                            </StaggerContainer>
                                        </FadeInUp>
                                    </div>
                                </div>

                                <FadeInUp delay=DelayBucket::Slow>
                                    <div class="border-t border-white/20 mt-8 pt-4 md:pt-6 text-center">
                                        <span class="text-white/80 text-xs sm:text-sm">
                                            "Copyright © 2025 Prestige Academy. All rights reserved."
                                        </span>
                                    </div>
                                </FadeInUp>
                            </div>
                        </div>
                    </FadeInUp>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn CompanyInfo() -> impl IntoView {
    view! {
        <div class="mb-6">
            <h3 class="text-white font-bold text-base lg:text-lg">"Prestige Academy"</h3>
            <p class="text-white/80 text-xs sm:text-sm">"PT Prestige Artha Abadi"</p>
        </div>

        <div class="space-y-3 mb-6">
            <FadeInLeft speed=AnimationSpeed::Fast delay=DelayBucket::Slow class="flex items-center gap-3">
                <Icon name=icons::MAIL class="w-5 h-5 icon-invert flex-shrink-0" />
                <span class="text-white text-xs sm:text-sm break-all">"prestige.co@gmail.com"</span>
            </FadeInLeft>
            <FadeInLeft speed=AnimationSpeed::Fast delay=DelayBucket::VerySlow class="flex items-center gap-3">
                <Icon name=icons::PHONE class="w-5 h-5 icon-invert flex-shrink-0" />
                <span class="text-white text-xs sm:text-sm">"+6281338491615"</span>
            </FadeInLeft>
        </div>

        <h4 class="text-white font-bold mb-3 sm:mb-4 text-sm sm:text-base">"Sosial Media"</h4>
        <div class="flex gap-3">
            <Animate animation=AnimationKind::ScaleIn speed=AnimationSpeed::Fast delay=DelayBucket::Instant>
                <a href="#" class=SOCIAL_LINK_CLASS aria-label="Facebook">
                    <Icon name=icons::FACEBOOK class="w-5 h-5 icon-invert" />
                </a>
            </Animate>
            <Animate animation=AnimationKind::ScaleIn speed=AnimationSpeed::Fast delay=DelayBucket::Fast>
                <a href="#" class=SOCIAL_LINK_CLASS aria-label="Twitter">
                    <Icon name=icons::TWITTER class="w-5 h-5 icon-invert" />
                </a>
            </Animate>
            <Animate animation=AnimationKind::ScaleIn speed=AnimationSpeed::Fast delay=DelayBucket::Normal>
                <a href="#" class=SOCIAL_LINK_CLASS aria-label="Instagram">
                    <Icon name=icons::INSTAGRAM class="w-5 h-5 icon-invert" />
                </a>
            </Animate>
        </div>
    }
}
