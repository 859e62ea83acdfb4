//! Landing page sections

mod about;
mod features;
mod footer;
mod header;
mod hero;
mod packages;

pub use about::AboutSection;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use header::{MarketingHeader, ThemeToggle};
pub use hero::HeroSection;
pub use packages::PackagesSection;
