//! Chaotic card grid.
//!
//! Lays out posts and playlists as a deliberately messy grid: every card gets
//! its own size, tilt, offset and treatment, yet the same list always renders
//! the same way, with no style state stored anywhere.
//!
//! # Example
//!
//! ```ignore
//! let style = compute_style(3, posts.len());
//! assert_eq!(style, compute_style(3, posts.len() + 10));
//!
//! view! { <ChaoticGrid items=posts extractor=extractor config=StyleConfig::articles() /> }
//! ```

mod component;
pub mod random;
pub mod style;
mod types;

pub use component::{ChaoticGrid, NowPlayingBadge};
pub use random::seeded_random;
pub use style::{
	CardSize, CardVariant, Derivation, StyleConfig, StyleDescriptor, TrackVariant, compute_style,
	compute_style_with, track_variant,
};
pub use types::{ContentItem, GridData, LayoutKind, NowPlaying};
