use leptos::prelude::*;

use crate::core::{AnimationKind, AnimationSpeed};
use crate::ui::animate::{Animate, HeroAnimate};
use crate::ui::common::{Button, ButtonAnimation, ButtonSize, ButtonVariant};

/// Above-the-fold hero. Headline and calls to action are critical and never
/// wait for the viewport; only the decorative backdrop animates in.
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="relative min-h-screen overflow-hidden pt-16">
            <div class="absolute inset-0 z-0" aria-hidden="true">
                <Animate
                    animation=AnimationKind::FadeInLeft
                    speed=AnimationSpeed::Slow
                    class="hero-backdrop-left absolute bottom-0 left-0 w-[48vw] h-full hidden lg:block"
                >
                    <div class="hero-blob bg-primary/10"></div>
                </Animate>
                <Animate
                    animation=AnimationKind::FadeInRight
                    speed=AnimationSpeed::Slow
                    class="hero-backdrop-right absolute bottom-0 right-0 w-[75vw] lg:w-[48vw] h-full"
                >
                    <div class="hero-blob bg-secondary/10"></div>
                </Animate>
            </div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="flex justify-start min-h-[calc(100vh-4rem)] pt-20 pb-8 lg:pl-32">
                    <div class="w-full lg:w-[55%] xl:w-[50%]">
                        <HeroAnimate class="mb-8">
                            <h1 class="font-bold text-3xl sm:text-4xl md:text-5xl text-center lg:text-left space-y-2">
                                <span class="block">"Langkah Awal"</span>
                                <span class="block">"Menuju Karir"</span>
                                <span class="block">
                                    "Impian "
                                    <span class="relative text-primary">
                                        "CPNS!"
                                        <span class="hero-underline bg-secondary"></span>
                                    </span>
                                </span>
                            </h1>
                        </HeroAnimate>

                        <HeroAnimate delay=100u32 class="mb-6">
                            <p class="text-muted max-w-lg mx-auto lg:mx-0 text-center lg:text-left">
                                "Prestige Academy membuka sayap menuju era cemerlangmu! Seperti Jalak Bali yang istimewa, \
                                 kami mengubah pengetahuan menjadi pencerahan. Terbang tinggi bersama kami, melestarikan \
                                 nilai berharga sambil menembus batas potensimu!"
                            </p>
                        </HeroAnimate>

                        <HeroAnimate delay=200u32>
                            <div class="flex flex-col sm:flex-row gap-4 pt-4 justify-center lg:justify-start">
                                <Button
                                    variant=ButtonVariant::Secondary
                                    size=ButtonSize::Lg
                                    animation=ButtonAnimation::Scale
                                    href="/register"
                                    class="font-semibold min-w-[200px] w-full sm:w-auto"
                                >
                                    "Belajar Sekarang!"
                                </Button>
                                <Button
                                    size=ButtonSize::Lg
                                    animation=ButtonAnimation::Scale
                                    href="/login"
                                    class="font-semibold min-w-[140px] w-full sm:w-auto"
                                >
                                    "Masuk"
                                </Button>
                            </div>
                        </HeroAnimate>
                    </div>
                </div>
            </div>
        </section>
    }
}
