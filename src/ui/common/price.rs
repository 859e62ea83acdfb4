use leptos::prelude::*;

use crate::core::pricing::{discount_percent, format_price};
use crate::ui::common::badge::{Badge, BadgeSize, BadgeVariant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PriceSize {
    Sm,
    #[default]
    Default,
    Lg,
    Xl,
}

impl PriceSize {
    fn class(&self) -> &'static str {
        match self {
            PriceSize::Sm => "text-lg",
            PriceSize::Default => "text-2xl",
            PriceSize::Lg => "text-3xl",
            PriceSize::Xl => "text-4xl",
        }
    }
}

/// Rupiah price with an optional struck-through original and savings badge.
#[component]
pub fn PriceDisplay(
    price: u64,
    #[prop(optional)] original_price: Option<u64>,
    #[prop(default = "Rp")] currency: &'static str,
    #[prop(default = PriceSize::Default)] size: PriceSize,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    // Only a real markdown is shown
    let original = original_price.filter(|original| *original > price);
    let savings = original.and_then(|original| discount_percent(price, original));

    view! {
        <div class="flex flex-col gap-1">
            <div class="flex items-baseline gap-2">
                {(price > 0).then(|| view! {
                    <span class="text-sm font-medium text-muted">{currency}</span>
                })}
                <span class=format!("price-amount gpu-accelerated {} {}", size.class(), class)>
                    {format_price(price)}
                </span>
                {original.map(|original| view! {
                    <span class="price-original text-lg line-through">
                        {format!("{} {}", currency, format_price(original))}
                    </span>
                })}
            </div>
            {savings.map(|percent| view! {
                <Badge variant=BadgeVariant::Success size=BadgeSize::Sm class="w-fit">
                    {format!("Hemat {}%", percent)}
                </Badge>
            })}
        </div>
    }
}
