//! Album display: rendering organized photos and rejected lines
//!
//! Photos and error records are merged back into original input order and
//! each is rendered as one output string.
//!
//! - [`renderer`] - [`AlbumDisplay`], the merge and render pass
//! - [`photo_display`] - Name rendering for a single photo, including index padding

pub mod photo_display;
pub mod renderer;

#[cfg(test)]
pub mod tests;

pub use photo_display::{PhotoDisplay, padded_index};
pub use renderer::{AlbumDisplay, DisplayItem};
