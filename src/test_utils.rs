// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.
//! It also provides gallery fixtures and a [`Host`] that records every call.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::app::Host;
use crate::config::DEFAULT_GALLERY_CLASS;
use crate::gallery::{ElementHandle, ItemContent, ItemId, SourceChild, SourceElement};
use crate::layout::Layout;
use crate::ui::gallery_view::GalleryView;
use crate::ui::icons::Icon;
use crate::ui::state::TimerToken;
use crate::ui::viewer::ViewerView;
use std::time::Duration;

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

/// A gallery root tagged with the default class, one plain-image child per
/// category, titled "Item N".
pub fn gallery_element(raw: u64, categories: &[&str]) -> SourceElement {
    let children = categories
        .iter()
        .enumerate()
        .map(|(index, category)| SourceChild {
            attribute: Some(format!(
                r#"{{"src": "{index}.jpg", "category": "{category}", "title": "Item {index}"}}"#
            )),
            content: ItemContent::Source,
        })
        .collect();

    SourceElement {
        handle: ElementHandle::new(raw),
        id: None,
        classes: vec![DEFAULT_GALLERY_CLASS.to_string()],
        attribute: None,
        children,
    }
}

/// One recorded [`Host`] call, reduced to what tests assert on.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ProvisionAssets(usize),
    RequestFullscreen(ElementHandle),
    ExitFullscreen(ElementHandle),
    ScrollLocked(bool),
    Download(String),
    ArmTimer(ElementHandle, TimerToken),
    CancelTimer(ElementHandle, TimerToken),
    /// Number of placed items.
    ApplyPlacements(ElementHandle, usize),
    RenderGallery(ElementHandle),
    /// Item shown, `None` when the viewer was removed.
    RenderViewer(ElementHandle, Option<ItemId>),
    RemoveGallery(ElementHandle),
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl Host for RecordingHost {
    fn provision_assets(&mut self, icons: &[Icon]) {
        self.calls.push(HostCall::ProvisionAssets(icons.len()));
    }

    fn request_fullscreen(&mut self, gallery: ElementHandle) {
        self.calls.push(HostCall::RequestFullscreen(gallery));
    }

    fn exit_fullscreen(&mut self, gallery: ElementHandle) {
        self.calls.push(HostCall::ExitFullscreen(gallery));
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        self.calls.push(HostCall::ScrollLocked(locked));
    }

    fn download(&mut self, url: &str) {
        self.calls.push(HostCall::Download(url.to_string()));
    }

    fn arm_timer(&mut self, gallery: ElementHandle, token: TimerToken, _after: Duration) {
        self.calls.push(HostCall::ArmTimer(gallery, token));
    }

    fn cancel_timer(&mut self, gallery: ElementHandle, token: TimerToken) {
        self.calls.push(HostCall::CancelTimer(gallery, token));
    }

    fn apply_placements(&mut self, gallery: ElementHandle, layout: &Layout) {
        self.calls
            .push(HostCall::ApplyPlacements(gallery, layout.placements.len()));
    }

    fn render_gallery(&mut self, gallery: ElementHandle, _view: &GalleryView) {
        self.calls.push(HostCall::RenderGallery(gallery));
    }

    fn render_viewer(&mut self, gallery: ElementHandle, view: Option<&ViewerView>) {
        self.calls
            .push(HostCall::RenderViewer(gallery, view.map(|view| view.item)));
    }

    fn remove_gallery(&mut self, gallery: ElementHandle) {
        self.calls.push(HostCall::RemoveGallery(gallery));
    }
}
