//! Core presentation policies: entrance animation, motion, visibility, theme
//! and header navigation

mod animation;
#[cfg(feature = "ssr")]
pub mod config;
mod motion;
mod navigation;
pub mod pricing;
#[cfg(test)]
mod tests;
mod theme;
mod visibility;

pub use animation::*;
pub use motion::*;
pub use navigation::*;
pub use theme::*;
pub use visibility::*;
