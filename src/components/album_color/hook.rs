//! Leptos glue for album colors.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::extractor::ColorExtractor;
use crate::components::theme::Color;

/// Reactive accent for `url`.
///
/// Starts at the cached color, or at `fallback` (the extractor's own fallback
/// when `None`), and updates once the image has been sampled. If the image
/// fails to load the starting accent stays. If the card unmounts first, the
/// load still finishes and warms the cache; the update is dropped.
pub fn use_album_color(url: Option<String>, fallback: Option<Color>, extractor: &ColorExtractor) -> ReadSignal<String> {
	let (color, set_color) = signal(initial_accent(url.as_deref(), fallback, extractor));

	let Some(url) = url else {
		return color;
	};
	if extractor.cache().contains(&url) {
		return color;
	}

	let extractor = extractor.clone();
	spawn_local(async move {
		if let Some(hex) = extractor.try_dominant_color(Some(&url)).await {
			let _ = set_color.try_set(hex);
		}
	});
	color
}

fn initial_accent(url: Option<&str>, fallback: Option<Color>, extractor: &ColorExtractor) -> String {
	url.and_then(|url| extractor.cache().get(url))
		.unwrap_or_else(|| fallback.unwrap_or(extractor.config().fallback).to_css_rgb())
}
