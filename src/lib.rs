//! Asset icons - procedural app icon and splash screen generator
//!
//! Draws the AssetTracker app icon, adaptive icon and splash screen onto
//! in-memory RGBA canvases and saves them as PNG files.

pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod fonts;
pub mod generate;
pub mod output;

pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use fonts::{FontError, TextFont, load_text_font};
pub use generate::{AssetKind, GeneratedAsset, render, run, run_with_progress};
