// SPDX-License-Identifier: MPL-2.0
//! UI state value types
//!
//! Small validated types shared by the viewer sub-components.

pub mod drag;
pub mod timer;
pub mod zoom;

pub use drag::DragState;
pub use timer::TimerToken;
pub use zoom::ZoomLevel;
