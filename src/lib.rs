// Memegen caption rendering library

pub mod caption;
pub mod config;
pub mod error;
pub mod image_ops;
pub mod logging;
pub mod store;
