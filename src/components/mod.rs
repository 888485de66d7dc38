//! UI building blocks: the card grid, album color extraction and shared colors.

pub mod album_color;
pub mod chaos_grid;
pub mod theme;
