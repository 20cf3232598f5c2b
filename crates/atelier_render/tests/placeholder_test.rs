use atelier_render::{CANVAS_HEIGHT, CANVAS_WIDTH, DATA_URI_PREFIX, render_placeholder};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::Rgb;

const BACKGROUND: Rgb<u8> = Rgb([30, 30, 30]);
const ACCENT: Rgb<u8> = Rgb([255, 107, 53]);
const GRID_GRAY: Rgb<u8> = Rgb([50, 50, 50]);

fn decode(uri: &str) -> image::RgbImage {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .expect("Data URI carries the PNG prefix");
    let bytes = BASE64.decode(payload).expect("Valid base64 payload");
    image::load_from_memory(&bytes)
        .expect("Decodable PNG")
        .to_rgb8()
}

#[test]
fn rendering_is_total_over_prompts_and_styles() {
    let cases = [
        ("a cat", "realistic"),
        ("a cat", "anime"),
        ("a cat", "digital-art"),
        ("a cat", "cartoon"),
        ("", "realistic"),
        ("", ""),
        ("anything", "van-gogh"),
        ("Ünïcödé prompt with a fairly long tail that gets cut", "ANIME"),
    ];

    for (prompt, style) in cases {
        let image = decode(&render_placeholder(prompt, style));
        assert_eq!(image.width(), CANVAS_WIDTH);
        assert_eq!(image.height(), CANVAS_HEIGHT);
    }
}

#[test]
fn realistic_frame_sits_near_the_edges() {
    let image = decode(&render_placeholder("a cat", "realistic"));

    assert_eq!(*image.get_pixel(30, 150), ACCENT);
    assert_eq!(*image.get_pixel(31, 150), ACCENT);
    assert_eq!(*image.get_pixel(200, 30), ACCENT);
    // Inside the frame is untouched background.
    assert_eq!(*image.get_pixel(200, 150), BACKGROUND);
    // The corner outside the frame stays background.
    assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
}

#[test]
fn unknown_styles_draw_the_realistic_frame() {
    let image = decode(&render_placeholder("a cat", "watercolor"));
    assert_eq!(*image.get_pixel(30, 150), ACCENT);
    assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
}

#[test]
fn anime_ellipses_touch_their_extremes() {
    let image = decode(&render_placeholder("a cat", "anime"));

    // Outer ellipse spans x 50..350 at the vertical center.
    assert_eq!(*image.get_pixel(50, 150), ACCENT);
    assert_eq!(*image.get_pixel(349, 150), ACCENT);
    // Inner ellipse left extreme.
    assert_eq!(*image.get_pixel(150, 150), ACCENT);
    // Canvas corner stays background.
    assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
    // Ellipse center is hollow.
    assert_eq!(*image.get_pixel(200, 150), BACKGROUND);
}

#[test]
fn cartoon_rectangles_are_concentric() {
    let image = decode(&render_placeholder("a cat", "cartoon"));

    // Outer rectangle stroke is 4px, growing inward from x = 50.
    for x in 50..54 {
        assert_eq!(*image.get_pixel(x, 150), ACCENT);
    }
    assert_eq!(*image.get_pixel(100, 150), ACCENT);
    assert_eq!(*image.get_pixel(200, 150), BACKGROUND);
}

#[test]
fn digital_art_grid_runs_both_directions() {
    let image = decode(&render_placeholder("a cat", "digital-art"));

    assert_eq!(*image.get_pixel(20, 5), GRID_GRAY);
    assert_eq!(*image.get_pixel(5, 20), GRID_GRAY);
    assert_eq!(*image.get_pixel(5, 5), BACKGROUND);
}

#[test]
fn caption_paints_the_bottom_of_the_canvas() {
    let image = decode(&render_placeholder("a cat", "realistic"));

    let mut caption_pixels = 0;
    for y in (CANVAS_HEIGHT - 65)..CANVAS_HEIGHT {
        for x in 0..CANVAS_WIDTH {
            let pixel = *image.get_pixel(x, y);
            if pixel != BACKGROUND && pixel != ACCENT && pixel != GRID_GRAY {
                caption_pixels += 1;
            }
        }
    }
    assert!(caption_pixels > 0, "caption text should mark the canvas");
}
