// SPDX-License-Identifier: MPL-2.0
//! Capabilities the embedding environment provides.
//!
//! The runtime never draws anything itself. Every observable change is pushed
//! through a [`Host`]: placements for the thumbnails, the derived gallery and
//! viewer views, timers, fullscreen and scroll locking.

use crate::gallery::ElementHandle;
use crate::layout::Layout;
use crate::ui::gallery_view::GalleryView;
use crate::ui::icons::Icon;
use crate::ui::state::TimerToken;
use crate::ui::viewer::ViewerView;
use std::time::Duration;

pub trait Host {
    /// Makes the icon set available. Called at most once per runtime.
    fn provision_assets(&mut self, icons: &[Icon]);

    fn request_fullscreen(&mut self, gallery: ElementHandle);

    fn exit_fullscreen(&mut self, gallery: ElementHandle);

    /// Locks or unlocks page scrolling behind the open viewer.
    fn set_page_scroll_locked(&mut self, locked: bool);

    /// Starts a download of `url`.
    fn download(&mut self, url: &str);

    /// Schedules a [`crate::app::Event::TimerFired`] carrying `token` after
    /// `after`. Arming replaces any pending timer of the same gallery.
    fn arm_timer(&mut self, gallery: ElementHandle, token: TimerToken, after: Duration);

    fn cancel_timer(&mut self, gallery: ElementHandle, token: TimerToken);

    /// Positions thumbnails. Items missing from `layout.placements` are hidden.
    fn apply_placements(&mut self, gallery: ElementHandle, layout: &Layout);

    fn render_gallery(&mut self, gallery: ElementHandle, view: &GalleryView);

    /// Draws the viewer, or removes it when `view` is `None`.
    fn render_viewer(&mut self, gallery: ElementHandle, view: Option<&ViewerView>);

    /// Drops everything rendered for a torn down gallery.
    fn remove_gallery(&mut self, gallery: ElementHandle);
}
