//! Adaptive icon (432x432): blue disc with three gold coins

use image::RgbaImage;

use super::percent;
use crate::constants::*;
use crate::draw::{Stroke, circle, fill_background};
use crate::error::Result;

pub fn build() -> Result<RgbaImage> {
    let size = ADAPTIVE_SIZE as i32;
    let mut canvas = RgbaImage::new(ADAPTIVE_SIZE, ADAPTIVE_SIZE);
    fill_background(&mut canvas, LIGHT_GRAY);

    let center = size / 2;
    circle(
        &mut canvas,
        (center, center),
        percent(size, ADAPTIVE_RADIUS_PCT),
        PRIMARY_BLUE,
        None,
    )?;

    for offset in [-ADAPTIVE_COIN_SPACING, 0, ADAPTIVE_COIN_SPACING] {
        circle(
            &mut canvas,
            (center + offset, center),
            ADAPTIVE_COIN_RADIUS,
            GOLD,
            Some(Stroke::new(WHITE, ADAPTIVE_COIN_BORDER)),
        )?;
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptive_dimensions() {
        let icon = build().unwrap();
        assert_eq!(icon.dimensions(), (432, 432));
    }

    #[test]
    fn test_adaptive_is_deterministic() {
        assert_eq!(build().unwrap(), build().unwrap());
    }

    #[test]
    fn test_adaptive_landmark_pixels() {
        let icon = build().unwrap();
        assert_eq!(*icon.get_pixel(0, 0), LIGHT_GRAY);
        assert_eq!(*icon.get_pixel(216, 116), PRIMARY_BLUE);
        assert_eq!(*icon.get_pixel(216, 216), GOLD);
        assert_eq!(*icon.get_pixel(156, 216), GOLD);
        // Left edge of the left coin is outlined
        assert_eq!(*icon.get_pixel(122, 216), WHITE);
        // Disc radius is 172
        assert_eq!(*icon.get_pixel(216, 216 - 175), LIGHT_GRAY);
    }
}
