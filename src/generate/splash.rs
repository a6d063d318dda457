//! Splash screen (1024x2048)
//!
//! Blue vertical gradient, a white badge with the wallet motif and a rising
//! arrow, then three centered lines of text. Text uses whatever font
//! `fonts::load_text_font` produced, so this never fails on a missing font.

use image::RgbaImage;
use tracing::debug;

use super::percent;
use crate::constants::*;
use crate::draw::{Stroke, arrow, circle, rounded_rect, vertical_gradient};
use crate::error::Result;
use crate::fonts::TextFont;

/// Positions derived from the layout constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    badge_origin: (i32, i32),
    wallet_origin: (i32, i32),
    wallet_size: (i32, i32),
    coin_radius: i32,
    coin_y: i32,
    coin_xs: [i32; 3],
    arrow_x: i32,
    arrow_bottom: i32,
    arrow_top: i32,
    text_top: i32,
}

impl Layout {
    fn new() -> Self {
        let width = SPLASH_WIDTH as i32;
        let height = SPLASH_HEIGHT as i32;
        let badge = SPLASH_BADGE_SIZE;
        let badge_origin = ((width - badge) / 2, percent(height, SPLASH_BADGE_TOP_PCT));

        let wallet_width = percent(badge, SPLASH_WALLET_WIDTH_PCT);
        let wallet_height = percent(badge, SPLASH_WALLET_HEIGHT_PCT);
        let wallet_origin = (
            badge_origin.0 + (badge - wallet_width) / 2,
            badge_origin.1 + (badge - wallet_height) / 2 - SPLASH_WALLET_LIFT,
        );

        let coin_radius = percent(wallet_height, SPLASH_COIN_PCT);
        let wallet_mid_x = wallet_origin.0 + wallet_width / 2;
        let step = coin_radius * SPLASH_COIN_SPACING_PCT;
        let coin_xs = SPLASH_COIN_OFFSETS_PCT.map(|pct| wallet_mid_x + pct * step / 10_000);

        let arrow_bottom = wallet_origin.1 + wallet_height;
        Self {
            badge_origin,
            wallet_origin,
            wallet_size: (wallet_width, wallet_height),
            coin_radius,
            coin_y: wallet_origin.1 + wallet_height / 2,
            coin_xs,
            arrow_x: wallet_origin.0 + wallet_width + SPLASH_ARROW_GAP,
            arrow_bottom,
            arrow_top: arrow_bottom - SPLASH_ARROW_LENGTH,
            text_top: percent(height, SPLASH_TEXT_TOP_PCT),
        }
    }
}

pub fn build(font: &TextFont) -> Result<RgbaImage> {
    let layout = Layout::new();
    debug!(?layout, fallback_font = font.is_fallback(), "Splash layout");

    let mut canvas = RgbaImage::new(SPLASH_WIDTH, SPLASH_HEIGHT);
    vertical_gradient(&mut canvas, SPLASH_GRADIENT_TOP, SPLASH_GRADIENT_BOTTOM);

    let half_badge = SPLASH_BADGE_SIZE / 2;
    circle(
        &mut canvas,
        (layout.badge_origin.0 + half_badge, layout.badge_origin.1 + half_badge),
        half_badge,
        WHITE,
        None,
    )?;

    rounded_rect(
        &mut canvas,
        layout.wallet_origin,
        layout.wallet_size,
        SPLASH_WALLET_CORNER,
        PRIMARY_BLUE,
        Some(Stroke::new(WHITE, SPLASH_WALLET_BORDER)),
    )?;

    for coin_x in layout.coin_xs {
        circle(
            &mut canvas,
            (coin_x, layout.coin_y),
            layout.coin_radius,
            GOLD,
            Some(Stroke::new(WHITE, SPLASH_COIN_BORDER)),
        )?;
    }

    arrow(
        &mut canvas,
        (layout.arrow_x as f32, layout.arrow_bottom as f32),
        (layout.arrow_x as f32, layout.arrow_top as f32),
        SPLASH_ARROW_WIDTH,
        SPLASH_ARROW_HEAD,
        GOLD,
    )?;

    let lines = [
        (SPLASH_TITLE, 0, SPLASH_TITLE_PX, WHITE),
        (SPLASH_SUBTITLE, SPLASH_SUBTITLE_OFFSET, SPLASH_SUBTITLE_PX, GOLD),
        (SPLASH_DESCRIPTION, SPLASH_DESCRIPTION_OFFSET, SPLASH_DESCRIPTION_PX, WHITE),
    ];
    for (text, offset, px, color) in lines {
        font.draw_centered(&mut canvas, text, layout.text_top + offset, px, color);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::gradient_color;
    use crate::fonts::centered_x;

    #[test]
    fn test_layout_matches_reference_positions() {
        let layout = Layout::new();
        assert_eq!(layout.badge_origin, (312, 307));
        assert_eq!(layout.wallet_origin, (392, 407));
        assert_eq!(layout.wallet_size, (240, 140));
        assert_eq!(layout.coin_radius, 42);
        assert_eq!(layout.coin_y, 477);
        assert_eq!(layout.coin_xs, [437, 512, 587]);
        assert_eq!((layout.arrow_x, layout.arrow_bottom, layout.arrow_top), (692, 547, 427));
        assert_eq!(layout.text_top, 1228);
    }

    #[test]
    fn test_splash_dimensions_with_fallback_font() {
        let splash = build(&TextFont::builtin()).unwrap();
        assert_eq!(splash.dimensions(), (1024, 2048));
    }

    #[test]
    fn test_splash_is_deterministic() {
        let font = TextFont::builtin();
        assert_eq!(build(&font).unwrap(), build(&font).unwrap());
    }

    #[test]
    fn test_splash_gradient_background() {
        let splash = build(&TextFont::builtin()).unwrap();
        assert_eq!(*splash.get_pixel(0, 0), image::Rgba([33, 150, 243, 255]));
        assert_eq!(*splash.get_pixel(1023, 2047), image::Rgba([58, 200, 243, 255]));
        for y in [100, 900, 1800] {
            assert_eq!(
                *splash.get_pixel(0, y),
                gradient_color(SPLASH_GRADIENT_TOP, SPLASH_GRADIENT_BOTTOM, y, 2048)
            );
        }
    }

    #[test]
    fn test_splash_motif_pixels() {
        let splash = build(&TextFont::builtin()).unwrap();
        assert_eq!(*splash.get_pixel(512, 320), WHITE);
        assert_eq!(*splash.get_pixel(400, 450), PRIMARY_BLUE);
        assert_eq!(*splash.get_pixel(512, 477), GOLD);
        assert_eq!(*splash.get_pixel(692, 500), GOLD);
    }

    #[test]
    fn test_splash_title_is_centered() {
        let font = TextFont::builtin();
        let splash = build(&font).unwrap();
        let (width, height) = font.measure(SPLASH_TITLE, SPLASH_TITLE_PX);
        let x = centered_x(1024, width);

        // Ink is anything that differs from the gradient in the title band
        let top = 1228;
        let bottom = top + height.min(SPLASH_SUBTITLE_OFFSET as u32);
        let canvas = &splash;
        let ink: Vec<u32> = (top..bottom)
            .flat_map(move |y| {
                let background = gradient_color(SPLASH_GRADIENT_TOP, SPLASH_GRADIENT_BOTTOM, y, 2048);
                (0..1024).filter(move |&x| *canvas.get_pixel(x, y) != background)
            })
            .collect();

        let left = *ink.iter().min().unwrap() as i32;
        let right = *ink.iter().max().unwrap() as i32;
        assert!(left >= x - 4 && right <= x + width as i32 + 4, "{}..{}", left, right);
        assert!(((left + right) / 2 - 512).abs() <= 8);
    }
}
