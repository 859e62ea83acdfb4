use leptos::prelude::*;

use crate::core::DelayBucket;
use crate::core::pricing::{PACKAGES, Package};
use crate::ui::animate::{FadeInUp, StaggerContainer};
use crate::ui::common::{
    Badge, BadgeVariant, Button, ButtonAnimation, ButtonSize, Card, CardAnimation, PriceDisplay,
};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn PackagesSection() -> impl IntoView {
    view! {
        <section id="packages" class="py-20 px-4 bg-muted/30 scroll-mt-16">
            <div class="container mx-auto space-y-16">
                <FadeInUp class="text-center space-y-4">
                    <h2 class="font-bold text-3xl sm:text-4xl">"Pilih Paket Belajar Terbaik"</h2>
                    <p class="text-muted max-w-3xl mx-auto">
                        "Mulai perjalanan sukses CASN Anda dengan paket yang dirancang sesuai kebutuhan dan budget."
                    </p>
                </FadeInUp>

                <StaggerContainer
                    class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 items-stretch"
                    item_class="h-full"
                >
                    <PackageCard package=&PACKAGES[0] />
                    <PackageCard package=&PACKAGES[1] />
                    <PackageCard package=&PACKAGES[2] />
                </StaggerContainer>

                <FadeInUp delay=DelayBucket::Normal class="text-center">
                    <p class="text-sm text-muted mb-4">
                        "*Syarat dan ketentuan berlaku. Garansi berlaku dengan ketentuan tertentu."
                    </p>
                </FadeInUp>
            </div>
        </section>
    }
}

fn badge_variant(package: &Package) -> BadgeVariant {
    if package.popular {
        BadgeVariant::Secondary
    } else if package.is_free() {
        BadgeVariant::Success
    } else {
        BadgeVariant::Default
    }
}

#[component]
fn PackageCard(package: &'static Package) -> impl IntoView {
    view! {
        <Card animation=CardAnimation::Hover class="relative flex flex-col h-full overflow-hidden group">
            {package.popular.then(|| view! {
                <div class="absolute -right-12 top-8 z-20">
                    <div class="bg-secondary px-12 py-2 rotate-45 shadow-lg text-xs font-bold text-center text-white">
                        "POPULER"
                    </div>
                </div>
            })}

            <div class="flex-1 flex flex-col space-y-6">
                <div class="space-y-3">
                    <div class="flex justify-between items-start gap-4">
                        <h3 class="font-bold text-xl">{package.title}</h3>
                        <Badge variant=badge_variant(package) class="font-medium">
                            {package.badge_label()}
                        </Badge>
                    </div>
                    <p class="text-sm text-muted leading-relaxed">{package.description}</p>
                </div>

                {match package.original_price {
                    Some(original) => view! {
                        <PriceDisplay price=package.price original_price=original />
                    }.into_any(),
                    None => view! { <PriceDisplay price=package.price /> }.into_any(),
                }}

                <ul class="border-t border-border flex-1 pt-6 space-y-4">
                    {package
                        .feature_lines()
                        .into_iter()
                        .map(|line| view! {
                            <li class="flex items-start gap-3">
                                {if line.included {
                                    view! { <Icon name=icons::CHECK class="w-5 h-5 mt-1 flex-shrink-0" /> }
                                } else {
                                    view! { <Icon name=icons::X class="w-5 h-5 mt-1 flex-shrink-0 opacity-50" /> }
                                }}
                                <span class="text-sm" class:text-muted=!line.included class:line-through=!line.included>
                                    {line.text}
                                </span>
                            </li>
                        })
                        .collect_view()}
                </ul>

                <div class="pt-4">
                    <Button
                        size=ButtonSize::Lg
                        animation=ButtonAnimation::Lift
                        href="/register"
                        class="w-full group"
                    >
                        {package.cta_label()}
                        <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4 ml-2" />
                    </Button>
                </div>
            </div>
        </Card>
    }
}
