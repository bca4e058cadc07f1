//! Theme system for the TUI.
//!
//! - `palette`: Page and editor color palettes
//! - `styles`: Semantic style builder functions
//! - `icons`: Glyphs with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
