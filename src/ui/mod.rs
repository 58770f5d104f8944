// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! These are host-facing view models, not widgets: the host renders them.
//!
//! This module organizes all UI-related code following the Elm-style
//! "state down, messages up" pattern. Components never draw anything: they
//! return effects and derived views that the host turns into pixels.
//!
//! # Components
//!
//! - [`viewer`] - Full-screen viewer with zoom, pan, fullscreen and navigation
//! - [`gallery_view`] - Category bar, search box and thumbnail overlays
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable validated state (zoom level, drag, timer tokens)
//! - [`icons`] - Icon set provisioned once per runtime

pub mod gallery_view;
pub mod icons;
pub mod state;
pub mod viewer;
