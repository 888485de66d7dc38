//! Dominant color extraction for cover art.
//!
//! Given an image URL, produce the single most vibrant color in it as
//! `#rrggbb`, for theming the card that shows the image:
//! - [`loader`]: URL to downsampled RGBA raster (canvas in the browser)
//! - [`sample`]: scoring pixels by saturation and mid-tone brightness
//! - [`ColorCache`]: session-lifetime memo, injected by the app root
//! - [`ColorExtractor`]: the memoized, never-failing entry point
//!
//! # Example
//!
//! ```ignore
//! let extractor = ColorExtractor::new(CanvasImageLoader, ColorCache::new());
//! extractor.preload_colors([Some("https://i.scdn.co/image/ab67"), None]);
//! let accent = extractor.dominant_color(Some("https://i.scdn.co/image/ab67")).await;
//! ```

mod cache;
mod extractor;
mod hook;
pub mod loader;
pub mod sample;

pub use cache::ColorCache;
pub use extractor::{ColorExtractor, ExtractorConfig};
pub use hook::use_album_color;
pub use loader::{CanvasImageLoader, ImageLoader, LoadError};
pub use sample::Raster;
