//! Color handling shared by the card grid and the album color extractor.
//!
//! Cards are themed from a single accent color, either extracted from
//! artwork or taken from the content record. Everything here works on
//! plain sRGB bytes and produces CSS strings.

/// Accent orange, the site-wide fallback accent.
pub const ACCENT_ORANGE: Color = Color::rgb(255, 107, 61);

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Parse `#rrggbb` or `rrggbb` (case-insensitive).
	pub fn from_hex(hex: &str) -> Option<Self> {
		let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
		if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
			return None;
		}
		let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
		Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
	}

	/// Parse a hex color, falling back to [`ACCENT_ORANGE`] when malformed.
	pub fn from_hex_or_accent(hex: &str) -> Self {
		Self::from_hex(hex).unwrap_or(ACCENT_ORANGE)
	}

	/// Same channels, new opacity.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	/// Rec. 601 luma in `[0, 1]`.
	pub fn luminance(self) -> f64 {
		(0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
	}

	/// Whether dark text reads better than light text on this color.
	pub fn is_light(self) -> bool {
		self.luminance() > 0.5
	}

	/// Per-channel inversion.
	pub fn complementary(self) -> Self {
		Self {
			r: 255 - self.r,
			g: 255 - self.g,
			b: 255 - self.b,
			a: self.a,
		}
	}

	/// Shift every channel by `percent` of full scale, clamped to `0..=255`.
	pub fn adjust_brightness(self, percent: f64) -> Self {
		let adjust = |c: u8| (c as f64 + 255.0 * percent / 100.0).round().clamp(0.0, 255.0) as u8;
		Self {
			r: adjust(self.r),
			g: adjust(self.g),
			b: adjust(self.b),
			a: self.a,
		}
	}

	/// Hex when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// `#rrggbb`, opacity dropped.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

impl Default for Color {
	fn default() -> Self {
		ACCENT_ORANGE
	}
}
