//! Content records fed into the grid.

use serde::Deserialize;

use super::style::StyleConfig;

/// A post or track as delivered by the content backend.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContentItem {
	/// Opaque backend identifier.
	pub id: String,
	/// Card heading.
	pub title: String,
	/// Teaser shown under the title.
	#[serde(default)]
	pub excerpt: Option<String>,
	/// Cover art or album image. Drives the card's accent when present.
	#[serde(default)]
	pub image_url: Option<String>,
	/// Hex accent used when there is no image to sample.
	#[serde(default)]
	pub accent_color: Option<String>,
	/// Short labels listed at the bottom of the card.
	#[serde(default)]
	pub tags: Vec<String>,
	/// Link target. Posts and playlists both carry one.
	#[serde(default)]
	pub href: Option<String>,
	/// ISO 8601 timestamp, shown as-is.
	#[serde(default)]
	pub published_at: Option<String>,
}

/// Which page the grid sits on.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
	/// Blog posts, hero card first.
	#[default]
	Articles,
	/// Top tracks on the music page.
	Tracks,
	/// Playlists on the music page.
	Playlists,
}

impl LayoutKind {
	/// Style preset for this page.
	pub fn style_config(self) -> StyleConfig {
		match self {
			LayoutKind::Articles => StyleConfig::articles(),
			LayoutKind::Tracks => StyleConfig::tracks(),
			LayoutKind::Playlists => StyleConfig::playlists(),
		}
	}
}

/// Track currently playing, as reported by the music backend.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NowPlaying {
	/// Track title.
	pub title: String,
	/// Artist name as credited.
	pub artist: String,
	/// Album art, sampled for the badge accent.
	#[serde(default)]
	pub album_image_url: Option<String>,
	/// Where the badge links to.
	#[serde(default)]
	pub song_url: Option<String>,
}

/// Complete page payload: heading, layout and ordered items.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GridData {
	/// Page heading.
	#[serde(default)]
	pub title: Option<String>,
	/// Style preset selector.
	#[serde(default)]
	pub layout: LayoutKind,
	/// Cards in display order.
	#[serde(default)]
	pub items: Vec<ContentItem>,
	/// Optional badge shown over the grid.
	#[serde(default)]
	pub now_playing: Option<NowPlaying>,
}

impl GridData {
	/// Image URLs in display order, `None` for items without artwork.
	/// The now-playing album art comes last.
	pub fn image_urls(&self) -> impl Iterator<Item = Option<&str>> {
		self.items
			.iter()
			.map(|item| item.image_url.as_deref())
			.chain(self.now_playing.iter().map(|track| track.album_image_url.as_deref()))
	}
}
