// End-to-end rendering with the embedded font

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use memegen::caption::{
    optimize, Compositor, GlyphFont, LayoutConstraints, RenderRequest, Typeface,
};
use memegen::config::RenderConfig;
use memegen::error::{RenderError, ResourceKind};
use memegen::image_ops::{Background, OutputFormat};
use std::io::Cursor;
use std::sync::Arc;
use std::thread;

const BACKGROUND: Rgba<u8> = Rgba([90, 120, 150, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn background(width: u32, height: u32, format: ImageFormat) -> Arc<Background> {
    let img = RgbaImage::from_pixel(width, height, BACKGROUND);
    Arc::new(Background::from_image(DynamicImage::ImageRgba8(img), Some(format)).unwrap())
}

fn font() -> Arc<dyn Typeface> {
    Arc::new(GlyphFont::embedded().unwrap())
}

fn compositor() -> Compositor {
    Compositor::new(RenderConfig::default()).unwrap()
}

fn rows_contain(img: &RgbaImage, rows: std::ops::Range<u32>, color: Rgba<u8>) -> bool {
    rows.flat_map(|y| (0..img.width()).map(move |x| (x, y)))
        .any(|(x, y)| *img.get_pixel(x, y) == color)
}

fn assert_near(pixel: &Rgba<u8>, expected: [u8; 3]) {
    for channel in 0..3 {
        assert!(
            pixel[channel].abs_diff(expected[channel]) <= 2,
            "pixel {:?}, expected {:?}",
            pixel,
            expected
        );
    }
}

/// Rows that contain at least one pure white pixel.
fn white_rows(img: &RgbaImage) -> Vec<u32> {
    (0..img.height())
        .filter(|&y| (0..img.width()).any(|x| *img.get_pixel(x, y) == WHITE))
        .collect()
}

#[test]
fn test_top_and_bottom_captions() {
    let request = RenderRequest::new(background(400, 300, ImageFormat::Png), font())
        .with_top("TOP TEXT")
        .with_bottom("BOTTOM TEXT");
    let img = compositor().render(&request).unwrap().into_image().to_rgba8();
    assert_eq!(img.dimensions(), (600, 450));

    let rows = white_rows(&img);
    let (top, bottom): (Vec<u32>, Vec<u32>) = rows.iter().partition(|&&y| y < 225);
    assert!(!top.is_empty(), "top caption missing");
    assert!(!bottom.is_empty(), "bottom caption missing");

    // the blocks are separated by untouched rows
    let top_end = *top.iter().max().unwrap();
    let bottom_start = *bottom.iter().min().unwrap();
    assert!(top_end + 1 < bottom_start);
    let gap_row = (top_end + bottom_start) / 2;
    assert!((0..600).all(|x| *img.get_pixel(x, gap_row) != WHITE));
    assert!((0..600).all(|x| *img.get_pixel(x, gap_row) != BLACK));

    // every glyph edge shows black outline right next to the white fill
    let outlined = (0..img.height()).any(|y| {
        (0..img.width()).any(|x| {
            *img.get_pixel(x, y) == WHITE
                && (1..=3u32)
                    .filter_map(|d| x.checked_sub(d))
                    .any(|nx| *img.get_pixel(nx, y) == BLACK)
        })
    });
    assert!(outlined, "no black outline adjacent to white fill");
}

#[test]
fn test_top_caption_on_default_size() {
    let request = RenderRequest::new(background(400, 300, ImageFormat::Png), font())
        .with_top("HELLO");
    let rendered = compositor().render(&request).unwrap();
    assert_eq!((rendered.width(), rendered.height()), (600, 450));
    assert_eq!(rendered.format(), OutputFormat::Png);

    let img = rendered.into_image().to_rgba8();
    assert!(rows_contain(&img, 0..120, WHITE));
    assert!(rows_contain(&img, 0..120, BLACK));
    assert!(!rows_contain(&img, 225..450, WHITE));
    assert!(!rows_contain(&img, 225..450, BLACK));
}

#[test]
fn test_bottom_caption_stays_in_lower_half() {
    let request = RenderRequest::new(background(400, 300, ImageFormat::Png), font())
        .with_bottom("WORLD");
    let img = compositor().render(&request).unwrap().into_image().to_rgba8();

    assert!(rows_contain(&img, 300..450, WHITE));
    assert!(!rows_contain(&img, 0..225, WHITE));
}

#[test]
fn test_exact_box_has_darkened_margins() {
    let request = RenderRequest::new(background(400, 300, ImageFormat::Png), font())
        .with_top("TOP")
        .with_size(500, 500);
    let img = compositor().render(&request).unwrap().into_image().to_rgba8();
    assert_eq!(img.dimensions(), (500, 500));

    // foreground is 500x375 centered; rows above it show the darkened copy
    let margin = img.get_pixel(250, 10);
    assert_near(margin, [36, 48, 60]);
    assert_eq!(margin[3], 255);
    assert_near(img.get_pixel(250, 60), [36, 48, 60]);
    assert_near(img.get_pixel(250, 438), [36, 48, 60]);

    // 500x377 bordered copy at y 61: black frame rows, foreground in between
    assert_eq!(*img.get_pixel(250, 61), BLACK);
    assert_eq!(*img.get_pixel(250, 437), BLACK);
    assert_near(img.get_pixel(5, 62), [90, 120, 150]);
    assert_near(img.get_pixel(5, 300), [90, 120, 150]);
    assert_near(img.get_pixel(5, 436), [90, 120, 150]);

    // the caption is centered horizontally within the foreground
    let white: Vec<u32> = (62..437u32)
        .flat_map(|y| (0..500u32).map(move |x| (x, y)))
        .filter(|&(x, y)| *img.get_pixel(x, y) == WHITE)
        .map(|(x, _)| x)
        .collect();
    assert!(!white.is_empty());
    let (min_x, max_x) = (white[..].iter().min().unwrap(), white.iter().max().unwrap());
    assert!(((min_x + max_x) as i64 - 250).abs() <= 6, "caption spans {}..={}", min_x, max_x);
    assert!(!(0..61u32).any(|y| (0..500u32).any(|x| *img.get_pixel(x, y) == WHITE)));
}

#[test]
fn test_jpeg_source_encodes_as_jpeg() {
    let request = RenderRequest::new(background(320, 240, ImageFormat::Jpeg), font())
        .with_top("JPEG")
        .with_width(300);
    let rendered = compositor().render(&request).unwrap();
    assert_eq!(rendered.format(), OutputFormat::Jpeg);

    let bytes = rendered.encode().unwrap();
    assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
}

#[test]
fn test_decoded_background_round_trip() {
    let mut png = Vec::new();
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(60, 40, BACKGROUND))
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();

    let background = Background::decode(&png).unwrap();
    assert_eq!(background.source_format(), Some(ImageFormat::Png));
    assert_eq!(background.output_format(), OutputFormat::Png);
}

#[test]
fn test_undecodable_background() {
    let err = Background::decode(b"definitely not an image").unwrap_err();
    assert!(matches!(
        err,
        RenderError::Resource {
            kind: ResourceKind::Background,
            ..
        }
    ));
}

#[test]
fn test_long_caption_wraps_within_width() {
    let face = GlyphFont::embedded().unwrap();
    let constraints = LayoutConstraints::for_image(600, 450, &RenderConfig::default());
    let layout = optimize(
        &face,
        "one does not simply walk into mordor without a plan",
        &constraints,
    );

    assert_eq!(layout.lines.len(), 2);
    assert!(!layout.overflow);
    assert!(layout.font_size >= 1);
    for line in &layout.lines {
        assert!(face.line_width(line, layout.font_size as f32).ceil() as u32 <= 580);
    }
}

#[test]
fn test_watermark_with_embedded_font() {
    let request = RenderRequest::new(background(400, 300, ImageFormat::Png), font())
        .with_watermark("memegen.link");
    let img = compositor().render(&request).unwrap().into_image().to_rgba8();

    // only the white fill pushes red above the background's 90
    let filled = (0..120u32)
        .flat_map(|x| (425..450u32).map(move |y| (x, y)))
        .any(|(x, y)| img.get_pixel(x, y)[0] > 160);
    assert!(filled);
}

#[test]
fn test_shared_compositor_across_threads() {
    let compositor = Arc::new(compositor());
    let request = RenderRequest::new(background(200, 150, ImageFormat::Png), font())
        .with_top("SAME")
        .with_bottom("OUTPUT");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let compositor = Arc::clone(&compositor);
            let request = request.clone();
            thread::spawn(move || compositor.render(&request).unwrap().encode().unwrap())
        })
        .collect();

    let outputs: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
}
