//! Core colour types for tailords.
//!
//! - `Colour` - opaque sRGB values with hex, named and triplet parsing
//! - `Accessibility` - WCAG contrast tiers
//! - `contrast_ratio` / `relative_luminance` - WCAG 2.1 formulas

mod colour;
mod contrast;

pub use colour::Colour;
pub use contrast::{contrast_ratio, relative_luminance, Accessibility};
