//! Turning an image URL into a small RGBA raster.
//!
//! The browser loader goes through an `<img>` element and an offscreen
//! canvas. Drawing into a `sample_size`-square canvas does the downsampling,
//! which bounds sampling cost no matter how large the source image is.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::sample::Raster;

/// Why a raster could not be produced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
	/// The image fired `error`: network failure, bad data or CORS rejection.
	#[error("image failed to load: {0}")]
	Load(String),
	/// The offscreen canvas has no 2d context.
	#[error("2d canvas context unavailable")]
	NoContext,
	/// A DOM call threw.
	#[error("browser call failed: {0}")]
	Js(String),
}

impl From<JsValue> for LoadError {
	fn from(value: JsValue) -> Self {
		let message = value
			.dyn_ref::<js_sys::Error>()
			.map(|err| String::from(err.message()))
			.or_else(|| value.as_string())
			.unwrap_or_else(|| format!("{value:?}"));
		LoadError::Js(message)
	}
}

/// Source of downsampled pixels for an image URL.
pub trait ImageLoader {
	/// Load `url` and return it scaled to `sample_size` x `sample_size`.
	fn load(&self, url: String, sample_size: u32) -> LocalBoxFuture<'static, Result<Raster, LoadError>>;
}

/// Loads images through the DOM. Only usable in a browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanvasImageLoader;

impl ImageLoader for CanvasImageLoader {
	fn load(&self, url: String, sample_size: u32) -> LocalBoxFuture<'static, Result<Raster, LoadError>> {
		load_through_canvas(url, sample_size).boxed_local()
	}
}

async fn load_through_canvas(url: String, sample_size: u32) -> Result<Raster, LoadError> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| LoadError::Js("no document".to_string()))?;

	let img = HtmlImageElement::new()?;
	// Without this the canvas is tainted and getImageData throws.
	img.set_cross_origin(Some("anonymous"));

	let (tx, rx) = oneshot::channel::<bool>();
	let tx = Rc::new(RefCell::new(Some(tx)));
	let settle = move |loaded: bool| {
		let tx = tx.clone();
		move || {
			if let Some(tx) = tx.borrow_mut().take() {
				let _ = tx.send(loaded);
			}
		}
	};
	let on_load = Closure::<dyn FnMut()>::new(settle(true));
	let on_error = Closure::<dyn FnMut()>::new(settle(false));
	img.set_onload(Some(on_load.as_ref().unchecked_ref()));
	img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
	img.set_src(&url);

	let settled = rx.await;
	img.set_onload(None);
	img.set_onerror(None);
	drop((on_load, on_error));

	image_loaded(url, settled)?;

	let canvas: HtmlCanvasElement = document
		.create_element("canvas")?
		.dyn_into()
		.map_err(|_| LoadError::NoContext)?;
	canvas.set_width(sample_size);
	canvas.set_height(sample_size);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(LoadError::NoContext)?
		.dyn_into()
		.map_err(|_| LoadError::NoContext)?;

	let side = sample_size as f64;
	ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, side, side)?;
	let data = ctx.get_image_data(0.0, 0.0, side, side)?;

	Ok(Raster::new(data.width(), data.height(), data.data().0))
}

/// Anything but a fired `load` event counts as a failed load of `url`.
fn image_loaded(url: String, settled: Result<bool, oneshot::Canceled>) -> Result<(), LoadError> {
	match settled {
		Ok(true) => Ok(()),
		Ok(false) | Err(_) => Err(LoadError::Load(url)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn errors_render_readably() {
		assert_eq!(
			LoadError::Load("https://invalid.example/404.png".into()).to_string(),
			"image failed to load: https://invalid.example/404.png"
		);
		assert_eq!(LoadError::NoContext.to_string(), "2d canvas context unavailable");
	}

	#[test]
	fn unsettled_image_is_a_load_failure() {
		let url = "https://img.example/a.png";
		assert_eq!(image_loaded(url.into(), Ok(true)), Ok(()));
		assert_eq!(image_loaded(url.into(), Ok(false)), Err(LoadError::Load(url.into())));
		assert_eq!(
			image_loaded(url.into(), Err(oneshot::Canceled)),
			Err(LoadError::Load(url.into()))
		);
	}
}
