// SPDX-License-Identifier: MPL-2.0
//! Event handling for one gallery instance.
//!
//! [`update`] mutates the instance and reports what the runtime must push to
//! the host. It never touches the host itself, which keeps every branch
//! testable without one.

use super::message::{Event, Key, ViewerAction};
use crate::error::Result;
use crate::gallery::GalleryInstance;
use crate::ui::viewer::{self, Effects};

/// What changed while handling one event.
#[derive(Debug, Default, PartialEq)]
pub struct Outcome {
    /// Viewer effects, in emission order.
    pub effects: Effects,
    /// The top bar or thumbnail visibility changed.
    pub gallery_changed: bool,
}

impl Outcome {
    fn viewer(effects: Effects) -> Self {
        Self {
            effects,
            gallery_changed: false,
        }
    }

    fn filtered(effects: Effects) -> Self {
        Self {
            effects,
            gallery_changed: true,
        }
    }
}

/// Applies `event` to `instance`.
///
/// Layout inputs only mark the instance dirty; the caller decides when to run
/// the pass.
pub fn update(instance: &mut GalleryInstance, event: Event) -> Result<Outcome> {
    match event {
        Event::Resized { width } => {
            instance.set_container_width(width);
            Ok(Outcome::default())
        }
        Event::ImageReady { item, size } => {
            instance.record_size(item, size)?;
            Ok(Outcome::default())
        }
        Event::ImageFailed { item } => {
            tracing::warn!(handle = %instance.handle(), item, "thumbnail failed to load");
            instance.forget_size(item)?;
            Ok(Outcome::default())
        }
        Event::ThumbnailClicked(id) => viewer_outcome(instance, viewer::Message::Open(id)),
        Event::CategorySelected(label) => Ok(Outcome::filtered(instance.select_category(&label))),
        Event::SearchChanged(text) => Ok(Outcome::filtered(instance.set_search(&text))),
        Event::SearchCleared => Ok(Outcome::filtered(instance.clear_search())),
        Event::Key(key) => {
            if !instance.viewer().is_open() {
                return Ok(Outcome::default());
            }
            let mut effects = instance.update_viewer(viewer::Message::Activity)?;
            let step = match key {
                Key::ArrowLeft => -1,
                Key::ArrowRight => 1,
                Key::Other => return Ok(Outcome::viewer(effects)),
            };
            effects.extend(instance.update_viewer(viewer::Message::Navigate(step))?);
            Ok(Outcome::viewer(effects))
        }
        Event::Wheel { delta_y } => viewer_outcome(instance, viewer::Message::Wheel { delta_y }),
        Event::PointerMoved => viewer_outcome(instance, viewer::Message::Activity),
        Event::TouchStart(position) => {
            viewer_outcome(instance, viewer::Message::TouchStart(position))
        }
        Event::TouchMove { position, bounds } => {
            viewer_outcome(instance, viewer::Message::TouchMove { position, bounds })
        }
        Event::TouchEnd => viewer_outcome(instance, viewer::Message::TouchEnd),
        Event::DragStart(position) => viewer_outcome(instance, viewer::Message::DragStart(position)),
        Event::DragMove { position, bounds } => {
            viewer_outcome(instance, viewer::Message::DragMove { position, bounds })
        }
        Event::DragEnd => viewer_outcome(instance, viewer::Message::DragEnd),
        Event::TimerFired(token) => {
            viewer_outcome(instance, viewer::Message::InactivityTimeout(token))
        }
        Event::FullscreenChanged(active) => {
            viewer_outcome(instance, viewer::Message::FullscreenChanged(active))
        }
        Event::Viewer(action) => viewer_outcome(instance, action_message(action)),
    }
}

fn viewer_outcome(instance: &mut GalleryInstance, message: viewer::Message) -> Result<Outcome> {
    instance.update_viewer(message).map(Outcome::viewer)
}

fn action_message(action: ViewerAction) -> viewer::Message {
    match action {
        ViewerAction::Close => viewer::Message::Close,
        ViewerAction::Previous => viewer::Message::Navigate(-1),
        ViewerAction::Next => viewer::Message::Navigate(1),
        ViewerAction::ZoomIn => viewer::Message::Zoom {
            delta: 1,
            relative: true,
        },
        ViewerAction::ZoomOut => viewer::Message::Zoom {
            delta: -1,
            relative: true,
        },
        ViewerAction::ToggleMiniatures => viewer::Message::ToggleMiniatures,
        ViewerAction::EnterFullscreen => viewer::Message::EnterFullscreen,
        ViewerAction::ExitFullscreen => viewer::Message::ExitFullscreen,
        ViewerAction::Download => viewer::Message::Download,
        ViewerAction::SelectMiniature(id) => viewer::Message::Select(id),
    }
}
