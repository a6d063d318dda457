//! Generator configuration
//!
//! Where each asset is written and which font files are tried for splash text.
//! The defaults are the only values the binary ever uses.

use std::path::{Path, PathBuf};

use crate::generate::AssetKind;

/// Default output paths, relative to the working directory
pub const ICON_PATH: &str = "assets/icon.png";
pub const ADAPTIVE_ICON_PATH: &str = "assets/adaptive-icon.png";
pub const SPLASH_PATH: &str = "assets/splash-icon.png";

/// Font files tried in order for the splash text
pub const FONT_CANDIDATES: [&str; 4] = [
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub icon_path: PathBuf,
    pub adaptive_icon_path: PathBuf,
    pub splash_path: PathBuf,
    /// Ordered; the first file that parses wins
    pub font_candidates: Vec<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            icon_path: PathBuf::from(ICON_PATH),
            adaptive_icon_path: PathBuf::from(ADAPTIVE_ICON_PATH),
            splash_path: PathBuf::from(SPLASH_PATH),
            font_candidates: FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl GeneratorConfig {
    /// Default config with every output rebased into `dir` (file names kept)
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let defaults = Self::default();
        let rebase = |p: &Path| match p.file_name() {
            Some(name) => dir.join(name),
            None => dir.join(p),
        };
        Self {
            icon_path: rebase(&defaults.icon_path),
            adaptive_icon_path: rebase(&defaults.adaptive_icon_path),
            splash_path: rebase(&defaults.splash_path),
            font_candidates: defaults.font_candidates,
        }
    }

    pub fn path_for(&self, kind: AssetKind) -> &Path {
        match kind {
            AssetKind::Icon => &self.icon_path,
            AssetKind::AdaptiveIcon => &self.adaptive_icon_path,
            AssetKind::Splash => &self.splash_path,
        }
    }

    pub fn with_font_candidates<I, P>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.font_candidates = candidates.into_iter().map(Into::into).collect();
        self
    }
}
