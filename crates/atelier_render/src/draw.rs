//! Raster drawing primitives for the placeholder canvas.
//!
//! Strokes grow inward from the given bounds, so a rectangle outlined with
//! stroke 4 occupies the four pixel rings just inside its bounding box.

use image::{Rgb, RgbImage};

/// Draws a 1px horizontal segment, clipped to the canvas.
pub fn horizontal_line(canvas: &mut RgbImage, x0: i64, x1: i64, y: i64, color: Rgb<u8>) {
    if y < 0 || y >= i64::from(canvas.height()) {
        return;
    }
    let clamped_x0 = x0.max(0);
    let clamped_x1 = x1.min(i64::from(canvas.width()) - 1);
    for x in clamped_x0..=clamped_x1 {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// Draws a 1px vertical segment, clipped to the canvas.
pub fn vertical_line(canvas: &mut RgbImage, x: i64, y0: i64, y1: i64, color: Rgb<u8>) {
    if x < 0 || x >= i64::from(canvas.width()) {
        return;
    }
    let clamped_y0 = y0.max(0);
    let clamped_y1 = y1.min(i64::from(canvas.height()) - 1);
    for y in clamped_y0..=clamped_y1 {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// Outlines the rectangle with corners (x0, y0) and (x1, y1).
pub fn outline_rect(
    canvas: &mut RgbImage,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    color: Rgb<u8>,
    stroke: u32,
) {
    for ring in 0..i64::from(stroke) {
        let (left, top) = (x0 + ring, y0 + ring);
        let (right, bottom) = (x1 - ring, y1 - ring);
        if left > right || top > bottom {
            break;
        }
        horizontal_line(canvas, left, right, top, color);
        horizontal_line(canvas, left, right, bottom, color);
        vertical_line(canvas, left, top, bottom, color);
        vertical_line(canvas, right, top, bottom, color);
    }
}

/// Outlines the ellipse inscribed in the bounding box (x0, y0)-(x1, y1).
///
/// Pixels whose centers fall between the outer ellipse and the ellipse
/// shrunk inward by `stroke` are painted.
pub fn outline_ellipse(
    canvas: &mut RgbImage,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    color: Rgb<u8>,
    stroke: u32,
) {
    let cx = (x0 + x1) as f64 / 2.0;
    let cy = (y0 + y1) as f64 / 2.0;
    let a = (x1 - x0) as f64 / 2.0;
    let b = (y1 - y0) as f64 / 2.0;
    if a <= 0.0 || b <= 0.0 {
        return;
    }
    let inner_a = (a - f64::from(stroke)).max(0.0);
    let inner_b = (b - f64::from(stroke)).max(0.0);

    let scan_x0 = x0.max(0);
    let scan_x1 = x1.min(i64::from(canvas.width()) - 1);
    let scan_y0 = y0.max(0);
    let scan_y1 = y1.min(i64::from(canvas.height()) - 1);

    for y in scan_y0..=scan_y1 {
        for x in scan_x0..=scan_x1 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let outer = (dx / a).powi(2) + (dy / b).powi(2);
            if outer > 1.0 {
                continue;
            }
            let inside_inner = inner_a > 0.0
                && inner_b > 0.0
                && (dx / inner_a).powi(2) + (dy / inner_b).powi(2) < 1.0;
            if !inside_inner {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Draws 1px grid lines across the whole canvas at the given pitch.
pub fn grid(canvas: &mut RgbImage, pitch: u32, color: Rgb<u8>) {
    let width = i64::from(canvas.width());
    let height = i64::from(canvas.height());
    for x in (0..width).step_by(pitch as usize) {
        vertical_line(canvas, x, 0, height - 1, color);
    }
    for y in (0..height).step_by(pitch as usize) {
        horizontal_line(canvas, 0, width - 1, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn rect_outline_stays_on_the_boundary() {
        let mut canvas = RgbImage::new(100, 100);
        outline_rect(&mut canvas, 10, 10, 89, 89, INK, 2);

        assert_eq!(*canvas.get_pixel(10, 50), INK);
        assert_eq!(*canvas.get_pixel(11, 50), INK);
        assert_eq!(*canvas.get_pixel(12, 50), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(50, 50), Rgb([0, 0, 0]));
    }

    #[test]
    fn ellipse_outline_hits_extremes_but_not_center() {
        let mut canvas = RgbImage::new(100, 100);
        outline_ellipse(&mut canvas, 10, 20, 90, 80, INK, 3);

        // Leftmost and topmost points of the ellipse boundary.
        assert_eq!(*canvas.get_pixel(10, 50), INK);
        assert_eq!(*canvas.get_pixel(50, 20), INK);
        assert_eq!(*canvas.get_pixel(50, 50), Rgb([0, 0, 0]));
    }

    #[test]
    fn grid_covers_both_axes() {
        let mut canvas = RgbImage::new(60, 40);
        grid(&mut canvas, 20, INK);

        assert_eq!(*canvas.get_pixel(0, 5), INK);
        assert_eq!(*canvas.get_pixel(20, 5), INK);
        assert_eq!(*canvas.get_pixel(5, 20), INK);
        assert_eq!(*canvas.get_pixel(5, 5), Rgb([0, 0, 0]));
    }

    #[test]
    fn drawing_clips_at_canvas_edges() {
        let mut canvas = RgbImage::new(20, 20);
        outline_rect(&mut canvas, -5, -5, 24, 24, INK, 1);
        grid(&mut canvas, 20, INK);
        // No panic is the assertion; spot-check a clipped edge.
        assert_eq!(*canvas.get_pixel(0, 0), INK);
    }
}
