//! chaos-cards: chaotic card grids for a personal blog and music page.
//!
//! This crate provides a WASM front end that lays out posts and playlists as
//! a deliberately messy, yet fully deterministic, grid of cards, each tinted
//! with the most vibrant color of its artwork.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::album_color::{CanvasImageLoader, ColorCache, ColorExtractor};
pub use components::chaos_grid::{
	ChaoticGrid, ContentItem, GridData, NowPlayingBadge, StyleDescriptor, compute_style,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("chaos-cards: logging initialized");
}

/// Load page content from a script element with id="grid-data".
/// Expected format: JSON with { title?, layout?, items: [...], now_playing? }
fn load_grid_data() -> Option<GridData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("grid-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<GridData>(&json_text) {
		Ok(data) => {
			info!(
				"chaos-cards: loaded {} items ({:?} layout)",
				data.items.len(),
				data.layout
			);
			Some(data)
		}
		Err(e) => {
			warn!("chaos-cards: failed to parse grid data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads content from the DOM, warms the album color cache and renders the grid.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let data = load_grid_data().unwrap_or_default();

	// One cache and extractor for the whole session, shared by every card.
	let extractor = ColorExtractor::new(CanvasImageLoader, ColorCache::new());
	extractor.preload_colors(data.image_urls());

	let config = data.layout.style_config();
	let heading = data.title.clone().unwrap_or_else(|| "Writing".to_string());
	let badge = data.now_playing.clone().map({
		let extractor = extractor.clone();
		move |track| view! { <NowPlayingBadge track=track extractor=extractor /> }
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=heading.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="chaos-page">
			<header class="chaos-page__header">
				<h1>{heading}</h1>
			</header>
			<ChaoticGrid items=data.items extractor=extractor config=config />
			{badge}
		</main>
	}
}
