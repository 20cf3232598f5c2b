//! Caption font handling.
//!
//! Font acquisition is a fallback chain: probe well-known system TrueType
//! paths and rasterize with `ab_glyph`; when no scalable font loads, fall
//! back to the built-in fixed-size glyph set. Acquisition never fails, so
//! rendering never fails.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use image::{Rgb, RgbImage};
use tracing::debug;

/// Pixel size used for scalable caption text.
const SCALABLE_PX: f32 = 16.0;

/// System font locations probed in order. The original service looked for
/// Arial; DejaVu and Liberation cover the common Linux installs.
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "arial.ttf",
];

/// A caption font: a loaded scalable face, or the built-in glyph set.
pub enum CaptionFont {
    /// A TrueType face loaded from the host.
    Scalable(FontVec),
    /// The built-in fixed-size 5x7 glyph set.
    Builtin,
}

impl CaptionFont {
    /// Acquires a caption font, preferring a scalable system face.
    pub fn acquire() -> Self {
        for path in FONT_PATHS {
            if let Ok(bytes) = std::fs::read(path) {
                if let Ok(font) = FontVec::try_from_vec(bytes) {
                    debug!(path = %path, "Loaded scalable caption font");
                    return CaptionFont::Scalable(font);
                }
            }
        }
        debug!("No scalable font found, using built-in glyph set");
        CaptionFont::Builtin
    }

    /// Vertical distance between the tops of consecutive lines.
    pub fn line_height(&self) -> u32 {
        match self {
            CaptionFont::Scalable(_) => 16,
            CaptionFont::Builtin => 10,
        }
    }

    /// Draws one line of text with its top-left corner at (x, y).
    pub fn draw_text(&self, canvas: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>) {
        match self {
            CaptionFont::Scalable(font) => draw_scalable(font, canvas, x, y, text, color),
            CaptionFont::Builtin => draw_builtin(canvas, x, y, text, color),
        }
    }
}

fn draw_scalable(
    font: &FontVec,
    canvas: &mut RgbImage,
    x: i64,
    y: i64,
    text: &str,
    color: Rgb<u8>,
) {
    let scaled = font.as_scaled(PxScale::from(SCALABLE_PX));
    let mut caret = point(x as f32, y as f32 + scaled.ascent());

    for ch in text.chars() {
        let mut glyph = scaled.scaled_glyph(ch);
        glyph.position = caret;
        caret.x += scaled.h_advance(glyph.id);

        if let Some(outlined) = scaled.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i64 + i64::from(gx);
                let py = bounds.min.y as i64 + i64::from(gy);
                if px >= 0
                    && py >= 0
                    && px < i64::from(canvas.width())
                    && py < i64::from(canvas.height())
                    && coverage > 0.0
                {
                    let base = *canvas.get_pixel(px as u32, py as u32);
                    canvas.put_pixel(px as u32, py as u32, blend(base, color, coverage.min(1.0)));
                }
            });
        }
    }
}

fn blend(base: Rgb<u8>, ink: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let mix = |b: u8, i: u8| -> u8 {
        let value = f32::from(b) + (f32::from(i) - f32::from(b)) * coverage;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgb([
        mix(base[0], ink[0]),
        mix(base[1], ink[1]),
        mix(base[2], ink[2]),
    ])
}

/// Glyph cell geometry for the built-in set: 5x7 pixels, 6px advance.
const GLYPH_WIDTH: i64 = 5;
const GLYPH_ADVANCE: i64 = 6;

fn draw_builtin(canvas: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>) {
    let mut caret = x;
    for ch in text.chars() {
        let rows = builtin_glyph(ch);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) != 0 {
                    let px = caret + col;
                    let py = y + row as i64;
                    if px >= 0
                        && py >= 0
                        && px < i64::from(canvas.width())
                        && py < i64::from(canvas.height())
                    {
                        canvas.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
        caret += GLYPH_ADVANCE;
    }
}

/// 5x7 glyph rows, top to bottom, bit 4 = leftmost column.
///
/// Lowercase letters share the uppercase shapes; characters outside the set
/// render as a hollow box.
fn builtin_glyph(ch: char) -> [u8; 7] {
    let upper = ch.to_ascii_uppercase();
    match upper {
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '"' => [0x0A, 0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00],
        '\'' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '-' => [0x00, 0x00, 0x00, 0x0E, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '/' => [0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        _ => [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F],
    }
}
