//! Token value generators.
//!
//! Both generators are pure: identical options always produce identical output.

mod shades;
mod typography;

pub use shades::{
    generate_color_palette, ColorPalette, ColorPaletteOptions, ColorShade, LightnessRange,
    MAX_SHADES,
};
pub(crate) use shades::is_valid_name;
pub use typography::{
    create_typography_scale, ScaleRatio, TypeScaleStep, TypographyScale, TypographyScaleOptions,
    MAX_STEPS, ROOT_FONT_SIZE_PX,
};
