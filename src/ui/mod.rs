pub mod animate;
pub mod common;
pub mod icon;
pub mod marketing;
mod media;
pub mod motion;
pub mod navigation;
pub mod pages;
pub mod theme;
pub mod visibility;

pub use animate::{
    Animate, AnimateTag, FadeInLeft, FadeInRight, FadeInUp, HeroAnimate, ScaleIn,
    StaggerContainer,
};
pub use icon::{Icon, icons};
pub use motion::{MotionContext, MotionProvider, use_motion_context};
pub use theme::{ThemeContext, ThemeProvider, ThemeScript, use_theme_context};
pub use visibility::{VisibilityHandle, use_visibility};
