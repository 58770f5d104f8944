// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── zoom        - Zoom level
//!     ├── overlay     - Chrome visibility and inactivity timer
//!     ├── drag        - Pan offset and touch swipes
//!     └── navigation  - Stepping over hidden items
//! ```

pub mod drag;
pub mod navigation;
pub mod overlay;
pub mod zoom;
