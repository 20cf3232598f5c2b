//! Placeholder image renderer for the Atelier assistant API.
//!
//! When no photo-search credential is configured (or the remote search
//! fails), the service substitutes a deterministically drawn raster image:
//! a fixed-size canvas with a style-specific decoration and a caption
//! overlay, serialized as a PNG data URI for inline transport.
//!
//! Rendering is total: every (prompt, style) pair produces a well-formed
//! data URI, including empty prompts and unrecognized styles.

mod draw;
mod font;
mod text;

pub use font::CaptionFont;
pub use text::{truncate_chars, wrap};

use atelier_core::ImageStyle;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use tracing::debug;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 400;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 300;
/// Prefix of every rendered data URI.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Dark neutral canvas background.
const BACKGROUND: Rgb<u8> = Rgb([30, 30, 30]);
/// Accent used for decorations and the style caption.
const ACCENT: Rgb<u8> = Rgb([255, 107, 53]);
/// Muted gray for the digital-art grid.
const GRID_GRAY: Rgb<u8> = Rgb([50, 50, 50]);
/// Caption ink.
const CAPTION_WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Characters of the prompt kept in the caption.
const CAPTION_PROMPT_CHARS: usize = 50;
/// Caption wrap width in characters.
const CAPTION_WRAP_COLUMNS: usize = 40;

/// Renders the placeholder image for a prompt and style tag.
///
/// The style tag selects the decoration permissively (unknown tags draw the
/// realistic frame) and is echoed verbatim in the caption. Returns a
/// `data:image/png;base64,` URI.
///
/// # Examples
///
/// ```
/// let uri = atelier_render::render_placeholder("a cat", "anime");
/// assert!(uri.starts_with("data:image/png;base64,"));
/// ```
pub fn render_placeholder(prompt: &str, style_tag: &str) -> String {
    let style = ImageStyle::from_tag(style_tag);
    debug!(style = %style, "Rendering placeholder image");

    let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);
    decorate(&mut canvas, style);
    caption(&mut canvas, prompt, style_tag);

    format!("{}{}", DATA_URI_PREFIX, BASE64.encode(encode_png(&canvas)))
}

fn decorate(canvas: &mut RgbImage, style: ImageStyle) {
    match style {
        ImageStyle::Anime => {
            draw::outline_ellipse(canvas, 50, 50, 350, 250, ACCENT, 3);
            draw::outline_ellipse(canvas, 150, 100, 250, 200, ACCENT, 2);
        }
        ImageStyle::DigitalArt => {
            draw::grid(canvas, 20, GRID_GRAY);
        }
        ImageStyle::Cartoon => {
            draw::outline_rect(canvas, 50, 50, 350, 250, ACCENT, 4);
            draw::outline_rect(canvas, 100, 100, 300, 200, ACCENT, 2);
        }
        ImageStyle::Realistic => {
            draw::outline_rect(canvas, 30, 30, 370, 270, ACCENT, 2);
        }
    }
}

fn caption(canvas: &mut RgbImage, prompt: &str, style_tag: &str) {
    let caption_font = CaptionFont::acquire();
    let height = i64::from(CANVAS_HEIGHT);

    let prompt_line = format!(
        "Prompt: {}...",
        truncate_chars(prompt, CAPTION_PROMPT_CHARS)
    );
    let mut y = height - 60;
    for line in wrap(&prompt_line, CAPTION_WRAP_COLUMNS) {
        caption_font.draw_text(canvas, 20, y, &line, CAPTION_WHITE);
        y += i64::from(caption_font.line_height());
    }

    caption_font.draw_text(canvas, 20, height - 30, &format!("Style: {}", style_tag), ACCENT);
}

fn encode_png(canvas: &RgbImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("PNG encoding of an in-memory canvas succeeds");
    buffer
}
