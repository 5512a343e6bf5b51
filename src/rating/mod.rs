//! Indicator rating and ranking.
//!
//! - [`classifier`] — maps an indicator value to a [`Rating`](crate::models::Rating)
//!   per [`MapCategory`](crate::models::MapCategory), and ranks the dataset.
//! - [`palette`] — theme and badge colours shared by every renderer.

pub mod classifier;
pub mod palette;
