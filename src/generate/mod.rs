//! Asset generation
//!
//! Renders the app icon, adaptive icon and splash screen, then writes them
//! in a fixed order. Rendering runs on the rayon pool since the three
//! images share nothing; saving stays sequential so a failed save leaves
//! only the files before it on disk.

pub mod adaptive;
pub mod icon;
pub mod splash;

use std::io::{self, Write};
use std::path::PathBuf;

use image::RgbaImage;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::constants::{ADAPTIVE_SIZE, ICON_SIZE, SPLASH_HEIGHT, SPLASH_WIDTH};
use crate::error::Result;
use crate::fonts::load_text_font;
use crate::output::save_png;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Icon,
    AdaptiveIcon,
    Splash,
}

impl AssetKind {
    /// Generation and save order
    pub const ALL: [AssetKind; 3] = [AssetKind::Icon, AssetKind::AdaptiveIcon, AssetKind::Splash];

    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Icon => "main icon",
            AssetKind::AdaptiveIcon => "adaptive icon",
            AssetKind::Splash => "splash screen",
        }
    }

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            AssetKind::Icon => (ICON_SIZE, ICON_SIZE),
            AssetKind::AdaptiveIcon => (ADAPTIVE_SIZE, ADAPTIVE_SIZE),
            AssetKind::Splash => (SPLASH_WIDTH, SPLASH_HEIGHT),
        }
    }
}

/// A file written by `run`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Draws one asset in memory
pub fn render(kind: AssetKind, config: &GeneratorConfig) -> Result<RgbaImage> {
    debug!("Rendering {}", kind.label());
    match kind {
        AssetKind::Icon => icon::build(),
        AssetKind::AdaptiveIcon => adaptive::build(),
        AssetKind::Splash => splash::build(&load_text_font(&config.font_candidates)),
    }
}

/// Renders all assets concurrently; results come back in `AssetKind::ALL` order
pub fn render_all(config: &GeneratorConfig) -> [Result<RgbaImage>; 3] {
    let (icon, (adaptive, splash)) = rayon::join(
        || render(AssetKind::Icon, config),
        || {
            rayon::join(
                || render(AssetKind::AdaptiveIcon, config),
                || render(AssetKind::Splash, config),
            )
        },
    );
    [icon, adaptive, splash]
}

/// Renders and saves every asset, printing progress to stdout.
///
/// Stops at the first failure; files saved before it are left in place.
pub fn run(config: &GeneratorConfig) -> Result<Vec<GeneratedAsset>> {
    run_with_progress(config, &mut io::stdout().lock())
}

/// `run` with progress lines written to `out`
pub fn run_with_progress<W: Write>(
    config: &GeneratorConfig,
    out: &mut W,
) -> Result<Vec<GeneratedAsset>> {
    writeln!(out, "Generating AssetTracker icons...")?;
    let labels: Vec<_> = AssetKind::ALL.iter().map(|kind| kind.label()).collect();
    writeln!(out, "Rendering {}...", labels.join(", "))?;
    out.flush()?;

    let rendered = render_all(config);

    let mut generated = Vec::with_capacity(AssetKind::ALL.len());
    for (kind, rendered) in AssetKind::ALL.into_iter().zip(rendered) {
        let canvas = rendered?;
        let path = config.path_for(kind);
        writeln!(
            out,
            "Saving {} ({}x{})...",
            kind.label(),
            canvas.width(),
            canvas.height()
        )?;
        save_png(&canvas, path)?;
        writeln!(out, "✓ Saved {}", path.display())?;

        generated.push(GeneratedAsset {
            kind,
            path: path.to_path_buf(),
            width: canvas.width(),
            height: canvas.height(),
        });
    }

    writeln!(out, "\n✅ All icons generated successfully!")?;
    writeln!(out, "\nGenerated files:")?;
    for asset in &generated {
        writeln!(
            out,
            "  - {} ({}x{})",
            asset.path.display(),
            asset.width,
            asset.height
        )?;
    }

    Ok(generated)
}

/// `value * pct / 100`, truncating toward zero
pub(crate) fn percent(value: i32, pct: i32) -> i32 {
    value * pct / 100
}
