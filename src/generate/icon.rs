//! App icon (512x512)
//!
//! Light-gray tile with concentric blue circles, a white wallet holding
//! three gold coins, and a gold growth arrow leaving the wallet.

use image::RgbaImage;
use tracing::debug;

use super::percent;
use crate::constants::*;
use crate::draw::{Stroke, arrow, circle, fill_background, rounded_rect};
use crate::error::Result;
use crate::fonts::TextFont;

pub fn build() -> Result<RgbaImage> {
    let size = ICON_SIZE as i32;
    let mut canvas = RgbaImage::new(ICON_SIZE, ICON_SIZE);
    fill_background(&mut canvas, LIGHT_GRAY);

    let center = size / 2;
    let radius = size / 3;

    for i in 0..ICON_RING_COUNT {
        circle(&mut canvas, (center, center), radius - i * ICON_RING_STEP, PRIMARY_BLUE, None)?;
    }

    let wallet_width = percent(size, ICON_WALLET_WIDTH_PCT);
    let wallet_height = percent(size, ICON_WALLET_HEIGHT_PCT);
    let wallet_origin = (center - wallet_width / 2, center - wallet_height / 2);
    rounded_rect(
        &mut canvas,
        wallet_origin,
        (wallet_width, wallet_height),
        ICON_WALLET_CORNER,
        WHITE,
        Some(Stroke::new(PRIMARY_BLUE, ICON_WALLET_BORDER)),
    )?;

    let glyph_font = TextFont::builtin();
    let coin_radius = percent(wallet_height, ICON_COIN_PCT);
    for coin_x in coin_centers(center, coin_radius) {
        circle(
            &mut canvas,
            (coin_x, center),
            coin_radius,
            GOLD,
            Some(Stroke::new(PRIMARY_BLUE, ICON_COIN_BORDER)),
        )?;
        glyph_font.draw(
            &mut canvas,
            ICON_COIN_GLYPH,
            coin_x + ICON_COIN_GLYPH_OFFSET.0,
            center + ICON_COIN_GLYPH_OFFSET.1,
            ICON_COIN_GLYPH_PX,
            PRIMARY_BLUE,
        );
    }

    let (tail, tip) = arrow_points(center, wallet_width, wallet_height);
    debug!(?tail, ?tip, coin_radius, "Icon arrow");
    arrow(&mut canvas, tail, tip, ICON_ARROW_WIDTH, ICON_ARROW_HEAD, GOLD)?;

    Ok(canvas)
}

fn coin_centers(center: i32, coin_radius: i32) -> [i32; 3] {
    let spacing = percent(coin_radius, ICON_COIN_SPACING_PCT);
    [center - spacing, center, center + spacing]
}

/// Arrow starts right of and below the wallet center and rises to the right
fn arrow_points(center: i32, wallet_width: i32, wallet_height: i32) -> ((f32, f32), (f32, f32)) {
    let start_x = center + percent(wallet_width, ICON_ARROW_START_PCT.0);
    let start_y = center + percent(wallet_height, ICON_ARROW_START_PCT.1);
    let end_x = start_x + ICON_ARROW_RISE.0;
    let end_y = start_y + ICON_ARROW_RISE.1;
    (
        (start_x as f32, start_y as f32),
        (end_x as f32, end_y as f32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_dimensions_and_format() {
        let icon = build().unwrap();
        assert_eq!(icon.dimensions(), (512, 512));
        assert_eq!(
            image::DynamicImage::ImageRgba8(icon).color(),
            image::ColorType::Rgba8
        );
    }

    #[test]
    fn test_icon_is_deterministic() {
        assert_eq!(build().unwrap(), build().unwrap());
    }

    #[test]
    fn test_icon_layout() {
        assert_eq!(coin_centers(256, 62), [163, 256, 349]);
        assert_eq!(
            arrow_points(256, 281, 179),
            ((354.0, 291.0), (394.0, 211.0))
        );
    }

    #[test]
    fn test_icon_landmark_pixels() {
        let icon = build().unwrap();
        assert_eq!(*icon.get_pixel(0, 0), LIGHT_GRAY);
        assert_eq!(*icon.get_pixel(511, 511), LIGHT_GRAY);
        // Every ring is the primary blue, the outermost included
        for y in [90, 91, 100, 106, 120] {
            assert_eq!(*icon.get_pixel(256, y), PRIMARY_BLUE, "y = {}", y);
        }
        assert_eq!(*icon.get_pixel(256, 85), LIGHT_GRAY);
        // Wallet body above the coins
        assert_eq!(*icon.get_pixel(200, 175), WHITE);
        // Middle coin below its glyph
        assert_eq!(*icon.get_pixel(256, 300), GOLD);
        // Arrow shaft drawn over the right coin
        assert_eq!(*icon.get_pixel(374, 251), GOLD);
    }

    #[test]
    fn test_icon_coin_glyphs() {
        let icon = build().unwrap();
        for coin_x in coin_centers(256, 62) {
            let (x0, y0) = (coin_x + ICON_COIN_GLYPH_OFFSET.0, 256 + ICON_COIN_GLYPH_OFFSET.1);
            let inked = (x0..x0 + 20)
                .flat_map(|x| (y0..y0 + 24).map(move |y| (x, y)))
                .filter(|&(x, y)| *icon.get_pixel(x as u32, y as u32) != GOLD)
                .count();
            assert!(inked > 10, "coin at {} has no glyph", coin_x);
        }
    }
}
