//! Output format tags and encoding

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

use crate::error::RenderError;

/// Output format of a rendered caption image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossy, opaque ("photographic")
    Jpeg,
    /// Lossless, alpha capable ("graphic")
    Png,
}

impl OutputFormat {
    /// JPEG sources stay photographic; everything else becomes lossless.
    pub fn from_source(source: Option<ImageFormat>) -> Self {
        match source {
            Some(ImageFormat::Jpeg) => OutputFormat::Jpeg,
            _ => OutputFormat::Png,
        }
    }

    pub fn image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, OutputFormat::Png)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Jpeg => write!(f, "JPEG"),
            OutputFormat::Png => write!(f, "PNG"),
        }
    }
}

/// Encode `image` in `format`.
pub fn encode(image: &DynamicImage, format: OutputFormat) -> Result<Vec<u8>, RenderError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format.image_format())
        .map_err(|e| RenderError::encode_failed(format.to_string(), e.to_string()))?;
    Ok(buffer.into_inner())
}
