//! Background decoding, target sizing and Lanczos resizing

use fast_image_resize::{FilterType, Image, PixelType, ResizeAlg, Resizer};
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::num::NonZeroU32;

use super::format::OutputFormat;
use crate::error::{RenderError, ResourceKind};

/// A decoded background image, shareable read-only across renders.
#[derive(Debug, Clone)]
pub struct Background {
    image: DynamicImage,
    source_format: Option<ImageFormat>,
}

impl Background {
    /// Decode image bytes, sniffing the format from their content.
    pub fn decode(data: &[u8]) -> Result<Self, RenderError> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| RenderError::resource(ResourceKind::Background, e.to_string()))?;
        let source_format = reader.format();
        let image = reader
            .decode()
            .map_err(|e| RenderError::resource(ResourceKind::Background, e.to_string()))?;

        Self::from_image(image, source_format)
    }

    /// Wrap an already decoded image.
    pub fn from_image(
        image: DynamicImage,
        source_format: Option<ImageFormat>,
    ) -> Result<Self, RenderError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(RenderError::resource(
                ResourceKind::Background,
                format!("image is empty ({}x{})", image.width(), image.height()),
            ));
        }
        Ok(Self {
            image,
            source_format,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn source_format(&self) -> Option<ImageFormat> {
        self.source_format
    }

    /// Output tag: photographic for JPEG sources, lossless otherwise.
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_source(self.source_format)
    }

    /// Pixels as RGBA8, converting palette/grey/16-bit sources.
    pub fn to_rgba8(&self) -> RgbaImage {
        self.image.to_rgba8()
    }
}

/// Reject requested dimensions before any pixel work.
pub fn validate_target(
    width: Option<u32>,
    height: Option<u32>,
    max_dimension: u32,
) -> Result<(), RenderError> {
    let (w, h) = (width.unwrap_or(0), height.unwrap_or(0));
    for (name, value) in [("width", width), ("height", height)] {
        match value {
            Some(0) => {
                return Err(RenderError::invalid_dimensions(
                    w,
                    h,
                    format!("{} must be greater than 0", name),
                ))
            }
            Some(v) if v > max_dimension => {
                return Err(RenderError::invalid_dimensions(
                    w,
                    h,
                    format!("{} exceeds maximum of {}", name, max_dimension),
                ))
            }
            _ => {}
        }
    }
    Ok(())
}

/// Reject a computed resize target larger than `max_dimension` on either side.
///
/// Proportional sizing can blow one side far past the requested one when the
/// source aspect ratio is extreme.
pub fn validate_fitted(width: u32, height: u32, max_dimension: u32) -> Result<(), RenderError> {
    if width > max_dimension || height > max_dimension {
        return Err(RenderError::invalid_dimensions(
            width,
            height,
            format!("computed size exceeds maximum of {}", max_dimension),
        ));
    }
    Ok(())
}

/// Dimensions the background is resized to before captioning.
///
/// With both width and height the source aspect ratio is kept and the result
/// fits inside the box. With one of them the other follows proportionally.
/// With neither, `baseline_width` is used.
pub fn fit_dimensions(
    src_width: u32,
    src_height: u32,
    width: Option<u32>,
    height: Option<u32>,
    baseline_width: u32,
) -> (u32, u32) {
    let ratio = src_width as f64 / src_height.max(1) as f64;

    let by_width = |w: u32| (w, (w as f64 / ratio) as u32);
    let by_height = |h: u32| ((h as f64 * ratio) as u32, h);

    let (w, h) = match (width, height) {
        (Some(w), Some(h)) => {
            if (w as f64) < h as f64 * ratio {
                by_width(w)
            } else {
                by_height(h)
            }
        }
        (Some(w), None) => by_width(w),
        (None, Some(h)) => by_height(h),
        (None, None) => by_width(baseline_width),
    };

    (w.max(1), h.max(1))
}

/// Resize using fast-image-resize with Lanczos3 filter
pub fn resize_rgba(
    img: &RgbaImage,
    target_w: u32,
    target_h: u32,
) -> Result<RgbaImage, RenderError> {
    if img.width() == target_w && img.height() == target_h {
        return Ok(img.clone());
    }

    let src_width = NonZeroU32::new(img.width())
        .ok_or_else(|| RenderError::resize_failed("Source width is 0"))?;
    let src_height = NonZeroU32::new(img.height())
        .ok_or_else(|| RenderError::resize_failed("Source height is 0"))?;
    let dst_width =
        NonZeroU32::new(target_w).ok_or_else(|| RenderError::resize_failed("Target width is 0"))?;
    let dst_height = NonZeroU32::new(target_h)
        .ok_or_else(|| RenderError::resize_failed("Target height is 0"))?;

    let src_image =
        Image::from_vec_u8(src_width, src_height, img.as_raw().clone(), PixelType::U8x4).map_err(
            |e| RenderError::resize_failed(format!("Failed to create source image: {:?}", e)),
        )?;

    let mut dst_image = Image::new(dst_width, dst_height, PixelType::U8x4);

    let mut resizer = Resizer::new(ResizeAlg::Convolution(FilterType::Lanczos3));
    resizer
        .resize(&src_image.view(), &mut dst_image.view_mut())
        .map_err(|e| RenderError::resize_failed(format!("Resize operation failed: {:?}", e)))?;

    RgbaImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| RenderError::resize_failed("Failed to create output image buffer"))
}
