//! Leptos components for the chaotic card grid.
//!
//! Placement comes from [`compute_style_with`] and never changes for a given
//! position. The accent color is reactive: it starts at the cached or
//! fallback color and switches once the card's artwork has been sampled.

use leptos::prelude::*;

use super::style::{StyleConfig, compute_style_with, track_variant};
use super::types::{ContentItem, NowPlaying};
use crate::components::album_color::{ColorExtractor, use_album_color};
use crate::components::theme::Color;

/// Renders `items` as a grid of chaotically placed cards.
///
/// The extractor is shared by every card so artwork is only sampled once
/// per session, whichever card asks first.
#[component]
pub fn ChaoticGrid(
	items: Vec<ContentItem>,
	extractor: ColorExtractor,
	#[prop(default = StyleConfig::default())] config: StyleConfig,
) -> impl IntoView {
	let cards = items
		.into_iter()
		.enumerate()
		.map(|(index, item)| {
			view! { <ChaosCard item=item index=index extractor=extractor.clone() config=config.clone() /> }
		})
		.collect_view();

	view! { <section class="chaos-grid">{cards}</section> }
}

#[component]
fn ChaosCard(item: ContentItem, index: usize, extractor: ColorExtractor, config: StyleConfig) -> impl IntoView {
	let style = compute_style_with(&config, index);
	let placement = style.css_transform();
	let variant = style.variant;

	// The record's own accent holds until the artwork is sampled, and stays
	// if it never is.
	let own = item.accent_color.as_deref().and_then(Color::from_hex);
	let accent = use_album_color(item.image_url.clone(), own, &extractor);
	let card_style = move || {
		let hex = accent.get();
		format!("{placement} --accent: {hex}; {}", variant.css(Color::from_hex_or_accent(&hex)))
	};

	let class = format!(
		"chaos-card chaos-card--{} chaos-card--{}",
		style.size.class_name(),
		variant.class_name()
	);
	let ContentItem {
		id,
		title,
		excerpt,
		image_url,
		tags,
		href,
		published_at,
		..
	} = item;
	let alt = title.clone();

	view! {
		<article class=class style=card_style data-id=id>
			<a href=href.unwrap_or_else(|| "#".to_string())>
				{image_url.map(move |src| view! { <img src=src alt=alt loading="lazy" /> })}
				<h2 class="chaos-card__title">{title}</h2>
				{published_at.map(|date| {
					let stamp = date.clone();
					view! { <time datetime=stamp>{date}</time> }
				})}
				{excerpt.map(|text| view! { <p class="chaos-card__excerpt">{text}</p> })}
				<ul class="chaos-card__tags">
					{tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
				</ul>
			</a>
		</article>
	}
}

/// Small floating badge for the track currently playing.
#[component]
pub fn NowPlayingBadge(track: NowPlaying, extractor: ColorExtractor) -> impl IntoView {
	let variant = track_variant(&track.title);
	let accent = use_album_color(track.album_image_url.clone(), None, &extractor);
	let badge_style = move || {
		let hex = accent.get();
		let color = Color::from_hex_or_accent(&hex);
		format!(
			"--accent: {hex}; --accent-dim: {}; --accent-contrast: {};",
			color.adjust_brightness(-20.0).to_css_rgb(),
			color.complementary().to_css_rgb()
		)
	};
	let NowPlaying {
		title,
		artist,
		album_image_url,
		song_url,
	} = track;
	let alt = format!("{title} by {artist}");

	view! {
		<aside class=format!("now-playing now-playing--{}", variant.class_name()) style=badge_style>
			{album_image_url.map(move |src| view! { <img src=src alt=alt /> })}
			<a href=song_url.unwrap_or_else(|| "#".to_string()) target="_blank" rel="noopener noreferrer">
				<span class="now-playing__title">{title}</span>
				<span class="now-playing__artist">{artist}</span>
			</a>
		</aside>
	}
}
