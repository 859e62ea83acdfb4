//! Common reusable UI components
//!
//! Buttons, badges, cards and price labels shared by the marketing
//! sections. Variants map to classes defined in `style/main.css`.

pub mod badge;
pub mod button;
pub mod card;
pub mod price;

pub use badge::{Badge, BadgeAnimation, BadgeSize, BadgeVariant};
pub use button::{Button, ButtonAnimation, ButtonSize, ButtonVariant};
pub use card::{
    Card, CardAnimation, CardContent, CardDescription, CardFooter, CardHeader, CardInteractive,
    CardSize, CardTitle, CardVariant,
};
pub use price::{PriceDisplay, PriceSize};
