// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer ("lightbox") for one gallery.

pub mod component;
pub mod render;
pub mod subcomponents;

pub use component::{Effect, Effects, Message, State as ViewerController};
pub use render::{Caption, FullscreenButton, Miniature, MiniatureStrip, PageIndex, ViewerContent, ViewerView};
pub use subcomponents::navigation::Direction;
