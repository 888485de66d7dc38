//! Per-card style derivation.
//!
//! Every card's look is a pure function of its position in the list. The
//! position is multiplied by a prime to get a base seed, and each attribute
//! rolls from `base + k` with its own small `k`, so rotation, offset and
//! variant look unrelated while staying reproducible without storing
//! anything.

use std::f64::consts::TAU;

use super::random::{seeded_random, symmetric};
use crate::components::theme::Color;

/// Card footprint in the grid, smallest to largest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardSize {
	/// One cell, widest chaos.
	Tiny,
	/// One cell.
	Small,
	/// One column, two rows.
	Medium,
	/// Two by two.
	Large,
	/// Reserved for the hero slot.
	Massive,
}

impl CardSize {
	fn from_roll(index: usize, roll: f64) -> Self {
		if index < 3 && roll > 0.5 {
			CardSize::Large
		} else if roll > 0.75 {
			CardSize::Large
		} else if roll > 0.4 {
			CardSize::Medium
		} else if roll > 0.15 {
			CardSize::Small
		} else {
			CardSize::Tiny
		}
	}

	/// Small cards tolerate more chaos without hurting readability.
	fn is_compact(self) -> bool {
		matches!(self, CardSize::Small | CardSize::Tiny)
	}

	/// Grid `(columns, rows)` spanned by the card.
	pub fn span(self) -> (u8, u8) {
		match self {
			CardSize::Massive | CardSize::Large => (2, 2),
			CardSize::Medium => (1, 2),
			CardSize::Small | CardSize::Tiny => (1, 1),
		}
	}

	/// CSS modifier, e.g. `chaos-card--large`.
	pub fn class_name(self) -> &'static str {
		match self {
			CardSize::Tiny => "tiny",
			CardSize::Small => "small",
			CardSize::Medium => "medium",
			CardSize::Large => "large",
			CardSize::Massive => "massive",
		}
	}
}

/// Visual treatment of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardVariant {
	/// Dark gradient faintly tinted by the accent.
	Default,
	/// Dashed border, no fill.
	Outlined,
	/// Frosted translucent panel.
	Glassy,
	/// Accent-to-violet gradient.
	Accent,
	/// White card, black hard shadow.
	Inverted,
	/// Solid accent fill, thick black border.
	Brutalist,
	/// Black card with a glowing accent border.
	Neon,
	/// Paper scrap with a ragged clip path.
	Torn,
}

/// Roll thresholds for the article grid, checked top-down. Anything below
/// the last one is `Default`.
const VARIANT_THRESHOLDS: [(f64, CardVariant); 7] = [
	(0.92, CardVariant::Torn),
	(0.84, CardVariant::Neon),
	(0.76, CardVariant::Brutalist),
	(0.66, CardVariant::Inverted),
	(0.54, CardVariant::Accent),
	(0.40, CardVariant::Glassy),
	(0.24, CardVariant::Outlined),
];

/// Music page table. No `Torn`, and `Default` is rarer.
const MUSIC_VARIANT_THRESHOLDS: [(f64, CardVariant); 6] = [
	(0.88, CardVariant::Neon),
	(0.76, CardVariant::Brutalist),
	(0.62, CardVariant::Inverted),
	(0.48, CardVariant::Glassy),
	(0.32, CardVariant::Outlined),
	(0.18, CardVariant::Accent),
];

impl CardVariant {
	/// Every variant, plainest first.
	pub const ALL: [CardVariant; 8] = [
		CardVariant::Default,
		CardVariant::Outlined,
		CardVariant::Glassy,
		CardVariant::Accent,
		CardVariant::Inverted,
		CardVariant::Brutalist,
		CardVariant::Neon,
		CardVariant::Torn,
	];

	fn from_roll(roll: f64) -> Self {
		Self::from_table(&VARIANT_THRESHOLDS, roll)
	}

	fn from_table(table: &[(f64, CardVariant)], roll: f64) -> Self {
		table
			.iter()
			.find(|(threshold, _)| roll > *threshold)
			.map(|&(_, variant)| variant)
			.unwrap_or(CardVariant::Default)
	}

	/// CSS modifier, e.g. `chaos-card--neon`.
	pub fn class_name(self) -> &'static str {
		match self {
			CardVariant::Default => "default",
			CardVariant::Outlined => "outlined",
			CardVariant::Glassy => "glassy",
			CardVariant::Accent => "accent",
			CardVariant::Inverted => "inverted",
			CardVariant::Brutalist => "brutalist",
			CardVariant::Neon => "neon",
			CardVariant::Torn => "torn",
		}
	}

	/// Inline background, border and shadow declarations tinted by `accent`.
	pub fn css(self, accent: Color) -> String {
		let ink = if accent.is_light() { "#000000" } else { "#ffffff" };
		match self {
			CardVariant::Default => format!(
				"background: linear-gradient(135deg, {}, {}); border: 1px solid {};",
				accent.lerp(Color::rgb(18, 18, 20), 0.92).with_alpha(0.95).to_css(),
				Color::rgba(8, 8, 10, 0.95).to_css(),
				Color::rgba(255, 255, 255, 0.05).to_css(),
			),
			CardVariant::Outlined => format!(
				"background: transparent; border: 2px dashed {};",
				Color::rgba(255, 255, 255, 0.3).to_css(),
			),
			CardVariant::Glassy => format!(
				"background: {}; border: 1px solid {}; backdrop-filter: blur(24px);",
				Color::rgba(255, 255, 255, 0.1).to_css(),
				Color::rgba(255, 255, 255, 0.2).to_css(),
			),
			CardVariant::Accent => format!(
				"background: linear-gradient(135deg, {}, transparent, {}); border: 1px solid {};",
				accent.with_alpha(0.2).to_css(),
				Color::rgba(124, 119, 198, 0.2).to_css(),
				Color::rgba(255, 255, 255, 0.1).to_css(),
			),
			CardVariant::Inverted => {
				"background: #ffffff; color: #000000; border: 2px solid #000000; box-shadow: 6px 6px 0 0 #000000;"
					.to_string()
			}
			CardVariant::Brutalist => format!(
				"background: {}; color: {ink}; border: 4px solid #000000; box-shadow: 8px 8px 0 0 #000000;",
				accent.to_css_rgb(),
			),
			CardVariant::Neon => format!(
				"background: #050505; border: 2px solid {}; box-shadow: 0 0 20px {};",
				accent.to_css_rgb(),
				accent.with_alpha(0.2).to_css(),
			),
			CardVariant::Torn => format!(
				"background: {}; color: #111111; box-shadow: 4px 4px 0 0 {}; \
				 clip-path: polygon(0 2%, 8% 0, 22% 3%, 41% 0, 63% 2%, 80% 0, 100% 3%, 100% 97%, 86% 100%, 64% 98%, 45% 100%, 23% 97%, 0 100%);",
				accent.lighten(0.85).to_css_rgb(),
				accent.darken(0.4).to_css_rgb(),
			),
		}
	}
}

/// How rolls are turned into a descriptor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Derivation {
	/// Article grid: size classes, optional hero, skew and the eight-way
	/// variant table. Attributes roll from `base + 1 ..= base + 11`.
	Grid,
	/// Music page: rotation from `base + 1`, offsets from `+ 2` and `+ 3`,
	/// scale from `+ 4`, variant from `+ 5` over the seven-way table.
	/// Motion is the symmetric roll times a damping factor; no skew.
	Music {
		/// Multiplier on the rotation swing.
		rotation_damping: f64,
		/// Multiplier on both offset swings.
		offset_damping: f64,
		/// Prime for the unsalted size roll. `None` keeps every card in one cell.
		size_prime: Option<u64>,
	},
}

/// Tuning for style derivation.
///
/// Magnitudes can be retuned freely; the seed layout (`prime`, `salt`,
/// per-attribute offsets) is what keeps a given position stable.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
	/// Multiplier turning a position into a base seed.
	pub seed_prime: u64,
	/// Added to the position before seeding, so two grids on one page differ.
	pub salt: u64,
	/// Which roll layout and variant table to use.
	pub derivation: Derivation,
	/// Force the first card to [`CardSize::Massive`].
	pub hero_first: bool,
	/// Stacking order of the hero card.
	pub hero_z_index: u32,
	/// Rotation bound in degrees for regular cards.
	pub rotation_range: f64,
	/// Horizontal offset bound in pixels.
	pub offset_x_range: f64,
	/// Vertical offset bound in pixels.
	pub offset_y_range: f64,
	/// Extra spread for compact cards.
	pub chaos_multiplier: f64,
	/// Highest z-index a regular card can roll.
	pub max_z_index: u32,
	/// Scale wobble around 1.0.
	pub scale_jitter: f64,
	/// Skew bound in degrees.
	pub skew_range: f64,
}

impl StyleConfig {
	/// Article grid on the home page (default).
	pub fn articles() -> Self {
		Self {
			seed_prime: 7919,
			salt: 0,
			derivation: Derivation::Grid,
			hero_first: true,
			hero_z_index: 10,
			rotation_range: 3.0,
			offset_x_range: 10.0,
			offset_y_range: 8.0,
			chaos_multiplier: 1.5,
			max_z_index: 5,
			scale_jitter: 0.02,
			skew_range: 2.0,
		}
	}

	/// Top-tracks grid on the music page.
	pub fn tracks() -> Self {
		Self {
			derivation: Derivation::Music {
				rotation_damping: 0.6,
				offset_damping: 0.4,
				size_prime: None,
			},
			hero_first: false,
			rotation_range: 4.0,
			offset_x_range: 15.0,
			offset_y_range: 10.0,
			chaos_multiplier: 1.0,
			skew_range: 0.0,
			..Self::articles()
		}
	}

	/// Playlist grid on the music page: seeded past the track range, first
	/// card large.
	pub fn playlists() -> Self {
		let mut config = Self::tracks();
		config.salt = 50;
		if let Derivation::Music { size_prime, .. } = &mut config.derivation {
			*size_prime = Some(999);
		}
		config
	}

	/// Tab strip above the music grids.
	pub fn tabs() -> Self {
		Self {
			salt: 100,
			..Self::tracks()
		}
	}

	/// Largest rotation any card can get, in degrees.
	pub fn max_rotation(&self) -> f64 {
		match self.derivation {
			Derivation::Grid => self.rotation_range * self.chaos_multiplier.max(1.0),
			Derivation::Music { rotation_damping, .. } => self.rotation_range * rotation_damping,
		}
	}

	/// Largest horizontal offset, in pixels.
	pub fn max_offset_x(&self) -> f64 {
		match self.derivation {
			Derivation::Grid => self.offset_x_range * self.chaos_multiplier.max(1.0),
			Derivation::Music { offset_damping, .. } => self.offset_x_range * offset_damping,
		}
	}

	/// Largest vertical offset, in pixels.
	pub fn max_offset_y(&self) -> f64 {
		match self.derivation {
			Derivation::Grid => self.offset_y_range,
			Derivation::Music { offset_damping, .. } => self.offset_y_range * offset_damping,
		}
	}

	/// Largest skew on either axis, in degrees.
	pub fn max_skew(&self) -> f64 {
		self.skew_range
	}
}

impl Default for StyleConfig {
	fn default() -> Self {
		Self::articles()
	}
}

/// Everything needed to place and paint one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleDescriptor {
	/// Grid footprint.
	pub size: CardSize,
	/// Degrees.
	pub rotation: f64,
	/// Pixels.
	pub offset_x: f64,
	/// Pixels.
	pub offset_y: f64,
	/// Paint order only.
	pub z_index: u32,
	/// Background and border treatment.
	pub variant: CardVariant,
	/// Uniform scale, close to 1.0.
	pub scale: f64,
	/// Radians, desynchronises idle animations between cards.
	pub phase: f64,
	/// Idle animation strength in `[0.5, 1.0)`.
	pub intensity: f64,
	/// Degrees.
	pub skew_x: f64,
	/// Degrees.
	pub skew_y: f64,
}

impl StyleDescriptor {
	/// Inline CSS placing the card: transform, stacking, grid span and animation knobs.
	pub fn css_transform(&self) -> String {
		let (columns, rows) = self.size.span();
		format!(
			"transform: translate({:.2}px, {:.2}px) rotate({:.2}deg) skew({:.2}deg, {:.2}deg) scale({:.3}); \
			 z-index: {}; grid-column: span {columns}; grid-row: span {rows}; \
			 --chaos-phase: {:.3}; --chaos-intensity: {:.2};",
			self.offset_x,
			self.offset_y,
			self.rotation,
			self.skew_x,
			self.skew_y,
			self.scale,
			self.z_index,
			self.phase,
			self.intensity,
		)
	}
}

/// Style for the card at `index` with the default tuning.
///
/// `_total_count` is accepted for callers that know the list length but does
/// not affect the result: a card keeps its look when the list around it grows.
pub fn compute_style(index: usize, _total_count: usize) -> StyleDescriptor {
	compute_style_with(&StyleConfig::default(), index)
}

/// Style for the card at `index` under `config`.
pub fn compute_style_with(config: &StyleConfig, index: usize) -> StyleDescriptor {
	let base = (index as u64)
		.wrapping_add(config.salt)
		.wrapping_mul(config.seed_prime);
	let roll = |k: u64| seeded_random(base.wrapping_add(k));

	let phase = roll(8) * TAU;
	let intensity = 0.5 + roll(9) * 0.5;

	if let Derivation::Music {
		rotation_damping,
		offset_damping,
		size_prime,
	} = config.derivation
	{
		// `roll * 2r - r` keeps the music page's operation order, bit for bit.
		let swing = |k: u64, range: f64| roll(k) * 2.0 * range - range;
		return StyleDescriptor {
			size: size_prime.map_or(CardSize::Small, |prime| music_size(index, prime)),
			rotation: swing(1, config.rotation_range) * rotation_damping,
			offset_x: swing(2, config.offset_x_range) * offset_damping,
			offset_y: swing(3, config.offset_y_range) * offset_damping,
			z_index: 1,
			variant: CardVariant::from_table(&MUSIC_VARIANT_THRESHOLDS, roll(5)),
			scale: 1.0 - config.scale_jitter + roll(4) * 2.0 * config.scale_jitter,
			phase,
			intensity,
			skew_x: 0.0,
			skew_y: 0.0,
		};
	}

	if config.hero_first && index == 0 {
		return StyleDescriptor {
			size: CardSize::Massive,
			rotation: symmetric(roll(0), config.rotation_range / 3.0),
			offset_x: 0.0,
			offset_y: 0.0,
			z_index: config.hero_z_index,
			variant: CardVariant::Default,
			scale: 1.0,
			phase,
			intensity,
			skew_x: 0.0,
			skew_y: 0.0,
		};
	}

	let size = CardSize::from_roll(index, roll(1));
	let chaos = if size.is_compact() { config.chaos_multiplier } else { 1.0 };
	let rotation_chaos = if size == CardSize::Tiny { config.chaos_multiplier } else { 1.0 };

	StyleDescriptor {
		size,
		rotation: symmetric(roll(2), config.rotation_range) * rotation_chaos,
		offset_x: symmetric(roll(3), config.offset_x_range) * chaos,
		offset_y: symmetric(roll(4), config.offset_y_range),
		z_index: (roll(5) * config.max_z_index as f64).floor() as u32 + 1,
		variant: CardVariant::from_roll(roll(6)),
		scale: 1.0 - config.scale_jitter + roll(7) * 2.0 * config.scale_jitter,
		phase,
		intensity,
		skew_x: symmetric(roll(10), config.skew_range),
		skew_y: symmetric(roll(11), config.skew_range),
	}
}

/// Playlist footprint. Rolled from the bare index, so the salt never moves it.
fn music_size(index: usize, prime: u64) -> CardSize {
	let roll = seeded_random((index as u64).wrapping_mul(prime));
	if index == 0 || roll > 0.85 {
		CardSize::Large
	} else if roll > 0.5 {
		CardSize::Medium
	} else {
		CardSize::Small
	}
}

/// Theme for the now-playing widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackVariant {
	/// Glowing accent outline.
	Neon,
	/// Frosted panel.
	Glassy,
	/// Accent gradient.
	Accent,
	/// Plain dark badge.
	Minimal,
}

impl TrackVariant {
	/// CSS modifier, e.g. `now-playing--glassy`.
	pub fn class_name(self) -> &'static str {
		match self {
			TrackVariant::Neon => "neon",
			TrackVariant::Glassy => "glassy",
			TrackVariant::Accent => "accent",
			TrackVariant::Minimal => "minimal",
		}
	}
}

/// Pick a now-playing theme from the track title, stable per title.
pub fn track_variant(title: &str) -> TrackVariant {
	let seed: u64 = title.encode_utf16().map(u64::from).sum();
	let roll = seeded_random(seed);
	if roll > 0.75 {
		TrackVariant::Neon
	} else if roll > 0.5 {
		TrackVariant::Glassy
	} else if roll > 0.25 {
		TrackVariant::Accent
	} else {
		TrackVariant::Minimal
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn style_is_deterministic() {
		for index in 0..500 {
			assert_eq!(compute_style(index, 500), compute_style(index, 500));
		}
	}

	#[test]
	fn first_card_is_always_the_hero() {
		for total in [1, 2, 10, 100, 10_000] {
			let hero = compute_style(0, total);
			assert_eq!(hero.size, CardSize::Massive);
			assert_eq!(hero.z_index, 10);
			assert_eq!((hero.offset_x, hero.offset_y), (0.0, 0.0));
		}
	}

	#[test]
	fn only_the_hero_is_massive() {
		assert!((1..2_000).all(|index| compute_style(index, 2_000).size != CardSize::Massive));
	}

	#[test]
	fn total_count_does_not_change_the_style() {
		assert_eq!(compute_style(0, 10), compute_style(0, 100));
		for index in [1, 2, 3, 17, 999] {
			assert_eq!(compute_style(index, index + 1), compute_style(index, 50_000));
		}
	}

	fn assert_bounded(config: &StyleConfig) {
		for index in 0..10_000 {
			let style = compute_style_with(config, index);
			assert!(style.rotation.abs() <= config.max_rotation(), "rotation {index}: {style:?}");
			assert!(style.offset_x.abs() <= config.max_offset_x(), "offset_x {index}: {style:?}");
			assert!(style.offset_y.abs() <= config.max_offset_y(), "offset_y {index}: {style:?}");
			assert!(style.skew_x.abs() <= config.max_skew(), "skew_x {index}: {style:?}");
			assert!(style.skew_y.abs() <= config.max_skew(), "skew_y {index}: {style:?}");
			assert!((0.0..TAU).contains(&style.phase));
			assert!((0.5..1.0).contains(&style.intensity));
			assert!(style.scale >= 1.0 - config.scale_jitter && style.scale <= 1.0 + config.scale_jitter);
			if style.size == CardSize::Massive {
				assert_eq!(style.z_index, config.hero_z_index);
			} else {
				assert!((1..=config.max_z_index).contains(&style.z_index), "z {index}: {style:?}");
			}
		}
	}

	#[test]
	fn article_styles_stay_in_bounds() {
		assert_bounded(&StyleConfig::articles());
	}

	#[test]
	fn playlist_styles_stay_in_bounds() {
		assert_bounded(&StyleConfig::playlists());
	}

	#[test]
	fn compact_cards_get_wider_rotation() {
		let config = StyleConfig::articles();
		let widest = (1..10_000)
			.map(|index| compute_style_with(&config, index))
			.filter(|style| style.size == CardSize::Tiny)
			.map(|style| style.rotation.abs())
			.fold(0.0, f64::max);
		assert!(widest > config.rotation_range);
	}

	#[test]
	fn every_size_and_variant_shows_up() {
		let styles: Vec<_> = (0..2_000).map(|index| compute_style(index, 2_000)).collect();
		let sizes: HashSet<_> = styles.iter().map(|style| style.size).collect();
		let variants: HashSet<_> = styles.iter().map(|style| style.variant).collect();
		assert_eq!(sizes.len(), 5);
		assert_eq!(variants.len(), CardVariant::ALL.len());
	}

	#[test]
	fn salt_shifts_the_seed_window() {
		let salted = StyleConfig {
			salt: 50,
			..StyleConfig::articles()
		};
		assert_eq!(
			compute_style_with(&salted, 10),
			compute_style_with(&StyleConfig::articles(), 60)
		);
	}

	#[test]
	fn playlists_have_no_hero() {
		assert_ne!(compute_style_with(&StyleConfig::playlists(), 0).size, CardSize::Massive);
	}

	#[test]
	fn track_and_tab_styles_stay_in_bounds() {
		assert_bounded(&StyleConfig::tracks());
		assert_bounded(&StyleConfig::tabs());
	}

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	/// Music page layout written out longhand: rotation `+1`, offsets `+2`/`+3`,
	/// scale `+4`, variant `+5`.
	fn music_page_style(position: u64) -> (f64, f64, f64, f64, CardVariant) {
		let seed = position * 7919;
		let variant_roll = seeded_random(seed + 5);
		let variant = if variant_roll > 0.88 {
			CardVariant::Neon
		} else if variant_roll > 0.76 {
			CardVariant::Brutalist
		} else if variant_roll > 0.62 {
			CardVariant::Inverted
		} else if variant_roll > 0.48 {
			CardVariant::Glassy
		} else if variant_roll > 0.32 {
			CardVariant::Outlined
		} else if variant_roll > 0.18 {
			CardVariant::Accent
		} else {
			CardVariant::Default
		};
		(
			(seeded_random(seed + 1) * 8.0 - 4.0) * 0.6,
			(seeded_random(seed + 2) * 30.0 - 15.0) * 0.4,
			(seeded_random(seed + 3) * 20.0 - 10.0) * 0.4,
			0.98 + seeded_random(seed + 4) * 0.04,
			variant,
		)
	}

	#[test]
	fn music_presets_follow_the_music_page_layout() {
		for (config, salt) in [
			(StyleConfig::tracks(), 0),
			(StyleConfig::playlists(), 50),
			(StyleConfig::tabs(), 100),
		] {
			for index in 0..20 {
				let style = compute_style_with(&config, index);
				let (rotation, offset_x, offset_y, scale, variant) = music_page_style(index as u64 + salt);
				assert_eq!(style.rotation, rotation, "rotation at {index}+{salt}");
				assert_eq!(style.offset_x, offset_x, "offset_x at {index}+{salt}");
				assert_eq!(style.offset_y, offset_y, "offset_y at {index}+{salt}");
				assert!(close(style.scale, scale), "scale at {index}+{salt}");
				assert_eq!(style.variant, variant, "variant at {index}+{salt}");
				assert_eq!((style.skew_x, style.skew_y, style.z_index), (0.0, 0.0, 1));
			}
		}
	}

	#[test]
	fn first_playlist_rotation_is_pinned() {
		// sin(395951) * 10000 has fractional part .733, so the roll is 0.73.
		assert_eq!(seeded_random(50 * 7919 + 1), 0.73);
		let style = compute_style_with(&StyleConfig::playlists(), 0);
		assert!(close(style.rotation, 1.104), "{style:?}");
	}

	#[test]
	fn music_variants_never_tear() {
		let variants: HashSet<_> = (0..2_000)
			.map(|index| compute_style_with(&StyleConfig::tracks(), index).variant)
			.collect();
		assert!(!variants.contains(&CardVariant::Torn));
		assert_eq!(variants.len(), 7);
		assert_eq!(CardVariant::from_table(&MUSIC_VARIANT_THRESHOLDS, 0.18), CardVariant::Default);
		assert_eq!(CardVariant::from_table(&MUSIC_VARIANT_THRESHOLDS, 0.19), CardVariant::Accent);
		assert_eq!(CardVariant::from_table(&MUSIC_VARIANT_THRESHOLDS, 0.89), CardVariant::Neon);
	}

	#[test]
	fn playlist_sizes_ignore_the_salt() {
		let config = StyleConfig::playlists();
		assert_eq!(compute_style_with(&config, 0).size, CardSize::Large);
		for index in 1..200 {
			let roll = seeded_random(index as u64 * 999);
			let expected = if roll > 0.85 {
				CardSize::Large
			} else if roll > 0.5 {
				CardSize::Medium
			} else {
				CardSize::Small
			};
			assert_eq!(compute_style_with(&config, index).size, expected, "size at {index}");
		}
		assert!((0..200).all(|index| compute_style_with(&StyleConfig::tracks(), index).size == CardSize::Small));
	}

	#[test]
	fn variant_thresholds() {
		assert_eq!(CardVariant::from_roll(0.0), CardVariant::Default);
		assert_eq!(CardVariant::from_roll(0.24), CardVariant::Default);
		assert_eq!(CardVariant::from_roll(0.25), CardVariant::Outlined);
		assert_eq!(CardVariant::from_roll(0.99), CardVariant::Torn);
	}

	#[test]
	fn early_cards_lean_large() {
		assert_eq!(CardSize::from_roll(1, 0.6), CardSize::Large);
		assert_eq!(CardSize::from_roll(5, 0.6), CardSize::Medium);
	}

	#[test]
	fn brutalist_ink_follows_accent_lightness() {
		assert!(CardVariant::Brutalist.css(Color::rgb(250, 240, 200)).contains("color: #000000"));
		assert!(CardVariant::Brutalist.css(Color::rgb(20, 30, 90)).contains("color: #ffffff"));
	}

	#[test]
	fn transform_css_carries_span_and_stacking() {
		let css = compute_style(0, 1).css_transform();
		assert!(css.contains("grid-column: span 2"));
		assert!(css.contains("z-index: 10"));
	}

	#[test]
	fn track_variant_is_stable_per_title() {
		assert_eq!(track_variant("Windowlicker"), track_variant("Windowlicker"));
		assert_eq!(track_variant(""), TrackVariant::Minimal);
	}
}
