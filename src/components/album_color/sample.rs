//! Pixel scoring: pick the color that pops, not the most frequent one.

use super::ExtractorConfig;
use crate::components::theme::Color;

/// Decoded RGBA pixels, row-major, four bytes per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
	/// Pixels per row.
	pub width: u32,
	/// Number of rows.
	pub height: u32,
	/// `width * height * 4` bytes.
	pub rgba: Vec<u8>,
}

impl Raster {
	/// Wrap raw RGBA bytes.
	pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
		Self { width, height, rgba }
	}

	/// Build a raster from opaque RGB pixels.
	pub fn from_pixels(width: u32, height: u32, pixels: &[Color]) -> Self {
		let rgba = pixels
			.iter()
			.flat_map(|c| [c.r, c.g, c.b, 255])
			.collect();
		Self::new(width, height, rgba)
	}
}

/// Vibrancy of one pixel, or `None` when it is too dark or too light to count.
///
/// Saturated mid-tones score highest: saturation times normalised
/// brightness times closeness of brightness to the midpoint.
pub fn vibrancy(r: u8, g: u8, b: u8, config: &ExtractorConfig) -> Option<f64> {
	let brightness = (r as f64 + g as f64 + b as f64) / 3.0;
	if brightness < config.min_brightness || brightness > config.max_brightness {
		return None;
	}
	let max = r.max(g).max(b) as f64;
	let min = r.min(g).min(b) as f64;
	let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };
	Some(saturation * (brightness / 255.0) * (1.0 - (brightness - 127.0).abs() / 127.0))
}

/// Highest scoring pixel among every `config.stride`-th one.
pub fn most_vibrant(raster: &Raster, config: &ExtractorConfig) -> Option<Color> {
	let mut best: Option<(f64, Color)> = None;
	for px in raster.rgba.chunks_exact(4).step_by(config.stride.max(1)) {
		let Some(score) = vibrancy(px[0], px[1], px[2], config) else {
			continue;
		};
		if score > best.map_or(0.0, |(top, _)| top) {
			best = Some((score, Color::rgb(px[0], px[1], px[2])));
		}
	}
	best.map(|(_, color)| color)
}
