//! Pixel-level image operations used by the compositor
//!
//! Wraps the `image` and `fast_image_resize` crates:
//! decode → resize → (caption) → letterbox → encode

pub mod format;
pub mod letterbox;
pub mod processor;

pub use format::{encode, OutputFormat};
pub use letterbox::{darken, pad_with_blurred_background};
pub use processor::{fit_dimensions, resize_rgba, validate_fitted, validate_target, Background};
