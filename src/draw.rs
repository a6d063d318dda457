//! Canvas primitives
//!
//! Thin wrappers over `imageproc` that add outlines, rounded corners and
//! thick lines, and that reject geometry `imageproc` would panic on.
//! Arrow-head and gradient math is kept separate so it can be tested
//! without a canvas.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::constants::ARROW_HEAD_ANGLE;
use crate::error::{GenerateError, Result};

/// Outline drawn inside a shape's bounds
#[derive(Clone, Copy, Debug)]
pub struct Stroke {
    pub color: Rgba<u8>,
    pub width: i32,
}

impl Stroke {
    pub const fn new(color: Rgba<u8>, width: i32) -> Self {
        Self { color, width }
    }
}

pub fn fill_background(canvas: &mut RgbaImage, color: Rgba<u8>) {
    for pixel in canvas.pixels_mut() {
        *pixel = color;
    }
}

/// Filled circle, optionally outlined. The outline eats into the radius.
pub fn circle(
    canvas: &mut RgbaImage,
    center: (i32, i32),
    radius: i32,
    fill: Rgba<u8>,
    stroke: Option<Stroke>,
) -> Result<()> {
    if radius <= 0 {
        return Err(GenerateError::geometry(format!(
            "circle radius must be positive, got {}",
            radius
        )));
    }

    match stroke {
        Some(stroke) => {
            check_stroke(&stroke)?;
            draw_filled_circle_mut(canvas, center, radius, stroke.color);
            let inner = radius - stroke.width;
            if inner > 0 {
                draw_filled_circle_mut(canvas, center, inner, fill);
            }
        }
        None => draw_filled_circle_mut(canvas, center, radius, fill),
    }
    Ok(())
}

/// Filled rectangle with rounded corners, optionally outlined
pub fn rounded_rect(
    canvas: &mut RgbaImage,
    origin: (i32, i32),
    size: (i32, i32),
    corner: i32,
    fill: Rgba<u8>,
    stroke: Option<Stroke>,
) -> Result<()> {
    let (width, height) = size;
    if width <= 0 || height <= 0 {
        return Err(GenerateError::geometry(format!(
            "rectangle size must be positive, got {}x{}",
            width, height
        )));
    }
    if corner < 0 {
        return Err(GenerateError::geometry(format!(
            "corner radius must not be negative, got {}",
            corner
        )));
    }
    let corner = corner.min(width.min(height) / 2);

    match stroke {
        Some(stroke) => {
            check_stroke(&stroke)?;
            fill_rounded(canvas, origin, size, corner, stroke.color);
            let inset = stroke.width;
            let inner = (width - 2 * inset, height - 2 * inset);
            if inner.0 > 0 && inner.1 > 0 {
                fill_rounded(
                    canvas,
                    (origin.0 + inset, origin.1 + inset),
                    inner,
                    (corner - inset).max(0),
                    fill,
                );
            }
        }
        None => fill_rounded(canvas, origin, size, corner, fill),
    }
    Ok(())
}

// Two overlapping bands plus a quarter circle in each corner.
// Callers guarantee positive size and corner <= min(size) / 2.
fn fill_rounded(
    canvas: &mut RgbaImage,
    (x, y): (i32, i32),
    (w, h): (i32, i32),
    r: i32,
    color: Rgba<u8>,
) {
    if r == 0 {
        draw_filled_rect_mut(canvas, Rect::at(x, y).of_size(w as u32, h as u32), color);
        return;
    }

    if w - 2 * r > 0 {
        draw_filled_rect_mut(
            canvas,
            Rect::at(x + r, y).of_size((w - 2 * r) as u32, h as u32),
            color,
        );
    }
    if h - 2 * r > 0 {
        draw_filled_rect_mut(
            canvas,
            Rect::at(x, y + r).of_size(w as u32, (h - 2 * r) as u32),
            color,
        );
    }

    let right = x + w - 1 - r;
    let bottom = y + h - 1 - r;
    for corner in [(x + r, y + r), (right, y + r), (x + r, bottom), (right, bottom)] {
        draw_filled_circle_mut(canvas, corner, r, color);
    }
}

/// Line segment of the given width (no end caps)
pub fn thick_line(
    canvas: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgba<u8>,
) -> Result<()> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let length = (dx * dx + dy * dy).sqrt();
    if length < f32::EPSILON {
        return Err(GenerateError::geometry("line has zero length"));
    }
    if width <= 0.0 {
        return Err(GenerateError::geometry(format!(
            "line width must be positive, got {}",
            width
        )));
    }
    if width < 1.0 {
        draw_line_segment_mut(canvas, from, to, color);
        return Ok(());
    }

    let half = width / 2.0;
    let nx = -dy / length * half;
    let ny = dx / length * half;
    polygon(
        canvas,
        &[
            (from.0 + nx, from.1 + ny),
            (to.0 + nx, to.1 + ny),
            (to.0 - nx, to.1 - ny),
            (from.0 - nx, from.1 - ny),
        ],
        color,
    )
}

/// Filled polygon. Vertices are rounded to the pixel grid; repeated
/// vertices are dropped and at least three distinct ones must remain.
pub fn polygon(canvas: &mut RgbaImage, vertices: &[(f32, f32)], color: Rgba<u8>) -> Result<()> {
    let mut points: Vec<Point<i32>> = Vec::with_capacity(vertices.len());
    for &(x, y) in vertices {
        let point = Point::new(x.round() as i32, y.round() as i32);
        if points.last() != Some(&point) {
            points.push(point);
        }
    }
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return Err(GenerateError::geometry(format!(
            "polygon needs 3 distinct vertices, got {}",
            points.len()
        )));
    }

    draw_polygon_mut(canvas, &points, color);
    Ok(())
}

/// Shaft plus triangular head pointing at `tip`
pub fn arrow(
    canvas: &mut RgbaImage,
    tail: (f32, f32),
    tip: (f32, f32),
    shaft_width: f32,
    head_length: f32,
    color: Rgba<u8>,
) -> Result<()> {
    thick_line(canvas, tail, tip, shaft_width, color)?;
    polygon(canvas, &arrow_head(tail, tip, head_length), color)
}

/// One full-width horizontal line
pub fn row_line(canvas: &mut RgbaImage, y: u32, color: Rgba<u8>) {
    let right = canvas.width().saturating_sub(1) as f32;
    draw_line_segment_mut(canvas, (0.0, y as f32), (right, y as f32), color);
}

/// Paints every row with `gradient_color` from `top` to `bottom`
pub fn vertical_gradient(canvas: &mut RgbaImage, top: [u8; 3], bottom: [u8; 3]) {
    let height = canvas.height();
    for y in 0..height {
        row_line(canvas, y, gradient_color(top, bottom, y, height));
    }
}

/// Triangle `[tip, back_left, back_right]` for an arrow from `tail` to `tip`.
///
/// The back vertices sit `length` away from the tip, rotated ±30° from the
/// shaft direction.
pub fn arrow_head(tail: (f32, f32), tip: (f32, f32), length: f32) -> [(f32, f32); 3] {
    let angle = (tip.1 - tail.1).atan2(tip.0 - tail.0);
    let back = |offset: f32| {
        (
            tip.0 - length * (angle + offset).cos(),
            tip.1 - length * (angle + offset).sin(),
        )
    };
    [tip, back(-ARROW_HEAD_ANGLE), back(ARROW_HEAD_ANGLE)]
}

/// Linear interpolation of one channel: `start + (end - start) * y / height`
pub fn gradient_channel(start: u8, end: u8, y: u32, height: u32) -> u8 {
    if height == 0 {
        return start;
    }
    let t = y as f32 / height as f32;
    let value = start as f32 + (end as f32 - start as f32) * t;
    value.round().clamp(0.0, 255.0) as u8
}

pub fn gradient_color(start: [u8; 3], end: [u8; 3], y: u32, height: u32) -> Rgba<u8> {
    Rgba([
        gradient_channel(start[0], end[0], y, height),
        gradient_channel(start[1], end[1], y, height),
        gradient_channel(start[2], end[2], y, height),
        255,
    ])
}

fn check_stroke(stroke: &Stroke) -> Result<()> {
    if stroke.width <= 0 {
        return Err(GenerateError::geometry(format!(
            "outline width must be positive, got {}",
            stroke.width
        )));
    }
    Ok(())
}
