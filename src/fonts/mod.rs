//! Text rendering
//!
//! Splash text prefers an outline font loaded from disk. When none of the
//! candidate files can be read and parsed, rendering silently falls back to
//! the font embedded in the binary; font problems never abort generation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ab_glyph::{FontRef, FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use thiserror::Error;
use tracing::{debug, warn};

/// DejaVu Sans Mono, shipped with the crate (see fonts/DejaVu-LICENSE)
pub const BUILTIN_FONT_DATA: &[u8] = include_bytes!("../../fonts/DejaVuSansMono.ttf");

/// Why no preferred font could be acquired
#[derive(Error, Debug)]
pub enum FontError {
    #[error("no font candidates configured")]
    NoCandidates,

    #[error("could not read font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse font {}", path.display())]
    Parse { path: PathBuf },
}

/// Font used to draw text: a loaded outline font or the embedded fallback
pub enum TextFont {
    Outline { font: FontVec, source: PathBuf },
    Builtin(FontRef<'static>),
}

impl std::fmt::Debug for TextFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextFont::Outline { source, .. } => {
                f.debug_struct("Outline").field("source", source).finish()
            }
            TextFont::Builtin(_) => f.write_str("Builtin"),
        }
    }
}

/// Tries each candidate in order and returns the first font that parses.
/// On total failure the error of the last candidate is returned.
pub fn load_preferred_font(candidates: &[PathBuf]) -> Result<(FontVec, PathBuf), FontError> {
    let mut last_error = FontError::NoCandidates;
    for path in candidates {
        match load_font_file(path) {
            Ok(font) => return Ok((font, path.clone())),
            Err(e) => {
                debug!("Skipping font candidate: {}", e);
                last_error = e;
            }
        }
    }
    Err(last_error)
}

fn load_font_file(path: &Path) -> Result<FontVec, FontError> {
    let data = fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    FontVec::try_from_vec(data).map_err(|_| FontError::Parse {
        path: path.to_path_buf(),
    })
}

/// Preferred font if available, otherwise the built-in one
pub fn load_text_font(candidates: &[PathBuf]) -> TextFont {
    match load_preferred_font(candidates) {
        Ok((font, source)) => {
            debug!("Using font {}", source.display());
            TextFont::Outline { font, source }
        }
        Err(e) => {
            warn!("{}; falling back to built-in font", e);
            TextFont::builtin()
        }
    }
}

impl TextFont {
    /// The font embedded in the binary
    pub fn builtin() -> Self {
        let font = FontRef::try_from_slice(BUILTIN_FONT_DATA).expect("Failed to load built-in font");
        TextFont::Builtin(font)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TextFont::Builtin(_))
    }

    /// Rendered (width, height) of `text` at pixel size `px`
    pub fn measure(&self, text: &str, px: f32) -> (u32, u32) {
        let scale = PxScale::from(px);
        match self {
            TextFont::Outline { font, .. } => text_size(scale, font, text),
            TextFont::Builtin(font) => text_size(scale, font, text),
        }
    }

    pub fn draw(&self, canvas: &mut RgbaImage, text: &str, x: i32, y: i32, px: f32, color: Rgba<u8>) {
        let scale = PxScale::from(px);
        match self {
            TextFont::Outline { font, .. } => draw_text_mut(canvas, color, x, y, scale, font, text),
            TextFont::Builtin(font) => draw_text_mut(canvas, color, x, y, scale, font, text),
        }
    }

    /// Draws `text` horizontally centered at row `y`; returns the x used
    pub fn draw_centered(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        y: i32,
        px: f32,
        color: Rgba<u8>,
    ) -> i32 {
        let (text_width, _) = self.measure(text, px);
        let x = centered_x(canvas.width(), text_width);
        self.draw(canvas, text, x, y, px, color);
        x
    }
}

/// `(canvas_width - text_width) / 2`, rounded toward negative infinity
pub fn centered_x(canvas_width: u32, text_width: u32) -> i32 {
    (canvas_width as i64 - text_width as i64).div_euclid(2) as i32
}
