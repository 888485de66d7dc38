//! Session-wide memo of extracted colors.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// URL -> `#rrggbb` map shared by every clone.
///
/// Entries are never evicted; a page only ever shows a few dozen images.
#[derive(Clone, Debug, Default)]
pub struct ColorCache {
	entries: Rc<RefCell<HashMap<String, String>>>,
}

impl ColorCache {
	/// Empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Cached `#rrggbb` for `url`.
	pub fn get(&self, url: &str) -> Option<String> {
		self.entries.borrow().get(url).cloned()
	}

	/// Whether `url` has been sampled already.
	pub fn contains(&self, url: &str) -> bool {
		self.entries.borrow().contains_key(url)
	}

	/// Store `hex` for `url`, replacing any earlier value.
	pub fn insert(&self, url: impl Into<String>, hex: impl Into<String>) {
		self.entries.borrow_mut().insert(url.into(), hex.into());
	}

	/// Number of cached URLs.
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	/// True before the first sample lands.
	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clones_share_entries() {
		let cache = ColorCache::new();
		let other = cache.clone();
		cache.insert("https://img/a.png", "#112233");
		assert_eq!(other.get("https://img/a.png").as_deref(), Some("#112233"));
		assert!(other.contains("https://img/a.png"));
		assert_eq!(other.len(), 1);
	}

	#[test]
	fn later_insert_replaces() {
		let cache = ColorCache::new();
		assert!(cache.is_empty());
		cache.insert("u", "#000001");
		cache.insert("u", "#000002");
		assert_eq!(cache.get("u").as_deref(), Some("#000002"));
		assert_eq!(cache.len(), 1);
	}
}
