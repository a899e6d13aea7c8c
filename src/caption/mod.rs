//! Caption rendering engine.
//!
//! Fits top and bottom text onto a background image, draws it as white type
//! with a black outline, and optionally letterboxes the result to an exact
//! size over a blurred copy of the background.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use memegen::caption::{Compositor, GlyphFont, RenderRequest};
//! use memegen::config::RenderConfig;
//! use memegen::image_ops::Background;
//!
//! let background = Arc::new(Background::decode(&std::fs::read("template.jpg")?)?);
//! let font = Arc::new(GlyphFont::from_bytes(std::fs::read("impact.ttf")?)?);
//!
//! let request = RenderRequest::new(background, font)
//!     .with_top("ONE DOES NOT SIMPLY")
//!     .with_bottom("WALK INTO MORDOR");
//!
//! let rendered = Compositor::new(RenderConfig::default())?.render(&request)?;
//! let bytes = rendered.encode()?;
//! ```

pub mod compositor;
pub mod metrics;
pub mod optimizer;
pub mod outline;
pub mod position;
pub mod request;
pub mod splitter;
pub mod typeface;
pub mod variant;

// Re-export main types for convenience
pub use compositor::Compositor;
pub use metrics::{FontMetrics, TextSize, LINE_SPACING};
pub use optimizer::{optimize, LayoutConstraints, LayoutResult};
pub use outline::{outline_thickness, OutlinedTextRenderer, FILL_COLOR, OUTLINE_COLOR};
pub use position::{bottom_position, top_position, watermark_position, TextPosition};
pub use request::{RenderRequest, RenderedImage};
pub use splitter::split;
pub use typeface::{GlyphFont, Typeface};
pub use variant::{StyleFields, VariantKey};
