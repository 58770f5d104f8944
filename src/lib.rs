// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` lays out image galleries and drives their full-screen viewer.
//!
//! The crate is split into pure computation and a thin host seam:
//!
//! - [`layout`] packs visible items into masonry, grid, justified-row or
//!   mosaic arrangements for a given container width.
//! - [`gallery`] owns per-gallery data (configuration, items, filter state).
//! - [`ui::viewer`] is the lightbox state machine (navigation, zoom,
//!   fullscreen, miniature strip, inactivity-driven chrome collapse).
//! - [`app`] routes host events into instances and applies the resulting
//!   effects to a [`app::Host`].

#![doc(html_root_url = "https://docs.rs/gallery_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod layout;
pub mod ui;

#[cfg(test)]
mod test_utils;
