//! Fixed colors and layout values for the generated assets
//!
//! Every coordinate below is in pixels of the canvas it belongs to.

use image::Rgba;

// =============================================================================
// PALETTE
// =============================================================================

pub const PRIMARY_BLUE: Rgba<u8> = Rgba([0x21, 0x96, 0xF3, 0xFF]);
pub const GOLD: Rgba<u8> = Rgba([0xFF, 0xD7, 0x00, 0xFF]);
pub const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
pub const LIGHT_GRAY: Rgba<u8> = Rgba([0xF5, 0xF5, 0xF5, 0xFF]);
pub const DARK_BLUE: Rgba<u8> = Rgba([0x19, 0x76, 0xD2, 0xFF]);

// =============================================================================
// APP ICON (512x512)
// =============================================================================

pub const ICON_SIZE: u32 = 512;
pub const ICON_RING_COUNT: i32 = 3;
pub const ICON_RING_STEP: i32 = 15; // Radius lost per concentric circle
pub const ICON_WALLET_WIDTH_PCT: i32 = 55;
pub const ICON_WALLET_HEIGHT_PCT: i32 = 35;
pub const ICON_WALLET_CORNER: i32 = 30;
pub const ICON_WALLET_BORDER: i32 = 4;
pub const ICON_COIN_PCT: i32 = 35; // Of wallet height
pub const ICON_COIN_SPACING_PCT: i32 = 150; // Of coin radius
pub const ICON_COIN_BORDER: i32 = 3;
pub const ICON_COIN_GLYPH: &str = "$";
pub const ICON_COIN_GLYPH_PX: f32 = 16.0;
pub const ICON_COIN_GLYPH_OFFSET: (i32, i32) = (-8, -15);
pub const ICON_ARROW_START_PCT: (i32, i32) = (35, 20); // Of wallet size, from center
pub const ICON_ARROW_RISE: (i32, i32) = (40, -80);
pub const ICON_ARROW_WIDTH: f32 = 6.0;
pub const ICON_ARROW_HEAD: f32 = 20.0;

// =============================================================================
// ADAPTIVE ICON (432x432)
// =============================================================================

pub const ADAPTIVE_SIZE: u32 = 432;
pub const ADAPTIVE_RADIUS_PCT: i32 = 40; // Of canvas size
pub const ADAPTIVE_COIN_RADIUS: i32 = 35;
pub const ADAPTIVE_COIN_SPACING: i32 = 60;
pub const ADAPTIVE_COIN_BORDER: i32 = 2;

// =============================================================================
// SPLASH SCREEN (1024x2048)
// =============================================================================

pub const SPLASH_WIDTH: u32 = 1024;
pub const SPLASH_HEIGHT: u32 = 2048;
pub const SPLASH_GRADIENT_TOP: [u8; 3] = [33, 150, 243];
pub const SPLASH_GRADIENT_BOTTOM: [u8; 3] = [58, 200, 243];

pub const SPLASH_BADGE_SIZE: i32 = 400;
pub const SPLASH_BADGE_TOP_PCT: i32 = 15;
pub const SPLASH_WALLET_WIDTH_PCT: i32 = 60;
pub const SPLASH_WALLET_HEIGHT_PCT: i32 = 35;
pub const SPLASH_WALLET_LIFT: i32 = 30; // Wallet sits above badge center
pub const SPLASH_WALLET_CORNER: i32 = 25;
pub const SPLASH_WALLET_BORDER: i32 = 3;
pub const SPLASH_COIN_PCT: i32 = 30;
pub const SPLASH_COIN_OFFSETS_PCT: [i32; 3] = [-120, 0, 120];
pub const SPLASH_COIN_SPACING_PCT: i32 = 150;
pub const SPLASH_COIN_BORDER: i32 = 2;
pub const SPLASH_ARROW_GAP: i32 = 60; // Right of wallet
pub const SPLASH_ARROW_LENGTH: i32 = 120;
pub const SPLASH_ARROW_WIDTH: f32 = 8.0;
pub const SPLASH_ARROW_HEAD: f32 = 30.0;

pub const SPLASH_TEXT_TOP_PCT: i32 = 60;
pub const SPLASH_TITLE: &str = "AssetTracker";
pub const SPLASH_SUBTITLE: &str = "智能资产管理";
pub const SPLASH_DESCRIPTION: &str = "多货币资产统计 · 实时汇率转换";
pub const SPLASH_TITLE_PX: f32 = 80.0;
pub const SPLASH_SUBTITLE_PX: f32 = 35.0;
pub const SPLASH_DESCRIPTION_PX: f32 = 28.0;
pub const SPLASH_SUBTITLE_OFFSET: i32 = 120;
pub const SPLASH_DESCRIPTION_OFFSET: i32 = 200;

// =============================================================================
// ARROW GEOMETRY
// =============================================================================

/// Half-angle between the shaft and each side of an arrow head
pub const ARROW_HEAD_ANGLE: f32 = std::f32::consts::PI / 6.0;
