//! Memoized dominant-color lookups.
//!
//! The flow for one URL is: cache lookup, join or start the in-flight load,
//! sample the raster, write the cache. Failures leave the cache untouched so
//! a later request can retry; [`ColorExtractor::dominant_color`] turns them
//! into the fallback accent, [`ColorExtractor::try_dominant_color`] into `None`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use log::{debug, warn};

use super::cache::ColorCache;
use super::loader::ImageLoader;
use super::sample::most_vibrant;
use crate::components::theme::{ACCENT_ORANGE, Color};

/// Sampling parameters and the fallback accent.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractorConfig {
	/// Side of the square the image is scaled to before sampling.
	pub sample_size: u32,
	/// Sample every n-th pixel.
	pub stride: usize,
	/// Mean channel value below which a pixel is ignored.
	pub min_brightness: f64,
	/// Mean channel value above which a pixel is ignored.
	pub max_brightness: f64,
	/// Accent used when no color can be extracted.
	pub fallback: Color,
}

impl Default for ExtractorConfig {
	fn default() -> Self {
		Self {
			sample_size: 50,
			stride: 4,
			min_brightness: 30.0,
			max_brightness: 225.0,
			fallback: ACCENT_ORANGE,
		}
	}
}

type PendingColor = Shared<LocalBoxFuture<'static, Option<String>>>;

struct Inner {
	loader: Box<dyn ImageLoader>,
	cache: ColorCache,
	config: ExtractorConfig,
	/// Loads that have started but not settled, so concurrent callers share one.
	pending: RefCell<HashMap<String, PendingColor>>,
}

impl Inner {
	fn fallback(&self) -> String {
		self.config.fallback.to_css_rgb()
	}

	async fn extract(&self, url: &str) -> Option<String> {
		let raster = match self.loader.load(url.to_string(), self.config.sample_size).await {
			Ok(raster) => raster,
			Err(err) => {
				warn!("album color: {err}; falling back for {url}");
				return None;
			}
		};

		let hex = match most_vibrant(&raster, &self.config) {
			Some(color) => color.to_css_rgb(),
			None => {
				debug!("album color: no vibrant pixel in {url}");
				self.fallback()
			}
		};
		self.cache.insert(url, hex.clone());
		Some(hex)
	}
}

/// Cheaply clonable handle; clones share the loader, cache and in-flight loads.
#[derive(Clone)]
pub struct ColorExtractor {
	inner: Rc<Inner>,
}

impl ColorExtractor {
	/// Extractor with the default sampling parameters.
	pub fn new(loader: impl ImageLoader + 'static, cache: ColorCache) -> Self {
		Self::with_config(loader, cache, ExtractorConfig::default())
	}

	/// Extractor with custom sampling parameters or fallback.
	pub fn with_config(loader: impl ImageLoader + 'static, cache: ColorCache, config: ExtractorConfig) -> Self {
		Self {
			inner: Rc::new(Inner {
				loader: Box::new(loader),
				cache,
				config,
				pending: RefCell::default(),
			}),
		}
	}

	/// Backing cache, shared with anything else holding it.
	pub fn cache(&self) -> &ColorCache {
		&self.inner.cache
	}

	/// Sampling parameters in use.
	pub fn config(&self) -> &ExtractorConfig {
		&self.inner.config
	}

	/// Best-effort color without waiting: the cached value or the fallback.
	pub fn cached_color(&self, url: Option<&str>) -> String {
		usable(url)
			.and_then(|url| self.inner.cache.get(url))
			.unwrap_or_else(|| self.inner.fallback())
	}

	/// Dominant color for `url`, loading and sampling the image on a cache miss.
	///
	/// Always resolves; missing URLs and failed loads give the fallback.
	pub async fn dominant_color(&self, url: Option<&str>) -> String {
		self.try_dominant_color(url)
			.await
			.unwrap_or_else(|| self.inner.fallback())
	}

	/// Like [`dominant_color`](Self::dominant_color), but `None` for a missing
	/// URL or an image that failed to load, so the caller can pick its own
	/// accent. An image that loads without a vibrant pixel still gives the
	/// configured fallback.
	pub async fn try_dominant_color(&self, url: Option<&str>) -> Option<String> {
		let url = usable(url)?;
		if let Some(hex) = self.inner.cache.get(url) {
			debug!("album color: cache hit for {url}");
			return Some(hex);
		}
		self.pending(url).await
	}

	/// Warm the cache for `urls` on the Leptos local executor.
	pub fn preload_colors<'a>(&self, urls: impl IntoIterator<Item = Option<&'a str>>) {
		self.preload_colors_with(urls, |task| leptos::task::spawn_local(task));
	}

	/// Warm the cache, handing each load to `spawn`. Nothing is returned to
	/// any caller; results only land in the cache.
	pub fn preload_colors_with<'a, S>(&self, urls: impl IntoIterator<Item = Option<&'a str>>, mut spawn: S)
	where
		S: FnMut(LocalBoxFuture<'static, ()>),
	{
		for url in urls.into_iter().filter_map(usable) {
			if self.inner.cache.contains(url) {
				continue;
			}
			let pending = self.pending(url);
			spawn(
				async move {
					let _ = pending.await;
				}
				.boxed_local(),
			);
		}
	}

	fn pending(&self, url: &str) -> PendingColor {
		let mut pending = self.inner.pending.borrow_mut();
		if let Some(load) = pending.get(url) {
			debug!("album color: joining in-flight load for {url}");
			return load.clone();
		}

		debug!("album color: cache miss for {url}");
		let inner = Rc::clone(&self.inner);
		let key = url.to_string();
		let load = async move {
			let hex = inner.extract(&key).await;
			inner.pending.borrow_mut().remove(&key);
			hex
		}
		.boxed_local()
		.shared();
		pending.insert(url.to_string(), load.clone());
		load
	}
}

fn usable(url: Option<&str>) -> Option<&str> {
	url.filter(|url| !url.trim().is_empty())
}
