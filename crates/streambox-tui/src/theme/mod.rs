//! Theme: palette, semantic styles and glyphs

pub mod icons;
pub mod palette;
pub mod styles;
