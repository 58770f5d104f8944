// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating lightbox state and update logic.
//!
//! The viewer is either closed or open on one visible item. While open it
//! tracks zoom, pan, fullscreen, the miniature strip and whether the chrome
//! collapsed after inactivity. Host capabilities (fullscreen, scroll lock,
//! timers, downloads) are requested through [`Effect`] values; nothing here
//! talks to the host directly.

use super::subcomponents::{drag, navigation, overlay, zoom};
use crate::config::INACTIVITY_TIMEOUT;
use crate::error::{Error, Result};
use crate::gallery::{ItemId, ItemRecord};
use crate::geometry::{Point, Size};
use crate::ui::state::{TimerToken, ZoomLevel};
use std::time::Duration;

/// Messages consumed by the viewer component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Open(ItemId),
    Close,
    /// Step through visible items. Must be non-zero.
    Navigate(i64),
    /// Jump to an item, e.g. from the miniature strip.
    Select(ItemId),
    Zoom { delta: i32, relative: bool },
    ToggleMiniatures,
    EnterFullscreen,
    ExitFullscreen,
    /// The host left (or entered) fullscreen on its own.
    FullscreenChanged(bool),
    Activity,
    InactivityTimeout(TimerToken),
    Download,
    /// Mouse wheel over the content.
    Wheel { delta_y: f32 },
    DragStart(Point),
    DragMove { position: Point, bounds: Size },
    DragEnd,
    TouchStart(Point),
    TouchMove { position: Point, bounds: Size },
    TouchEnd,
    /// Item visibility changed after a filter update.
    VisibilityChanged,
    Teardown,
}

/// Host requests produced by the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetPageScrollLocked(bool),
    RequestFullscreen,
    ExitFullscreen,
    ArmTimer { token: TimerToken, after: Duration },
    CancelTimer(TimerToken),
    Download { url: String },
    /// Viewer output changed and must be rendered again.
    Render,
}

/// Effects of one transition, in the order they must be applied.
pub type Effects = Vec<Effect>;

/// Complete viewer state for one gallery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    current: Option<ItemId>,
    zoom: zoom::State,
    overlay: overlay::State,
    drag: drag::State,
    fullscreen: bool,
    show_miniatures: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Item shown while open.
    #[must_use]
    pub fn current(&self) -> Option<ItemId> {
        self.current
    }

    #[must_use]
    pub fn zoom_level(&self) -> ZoomLevel {
        self.zoom.level()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn show_miniatures(&self) -> bool {
        self.show_miniatures
    }

    /// Chrome collapsed after inactivity.
    #[must_use]
    pub fn is_minimal(&self) -> bool {
        self.overlay.is_minimal()
    }

    #[must_use]
    pub fn pan_offset(&self) -> Point {
        self.drag.offset()
    }

    #[must_use]
    pub fn armed_timer(&self) -> Option<TimerToken> {
        self.overlay.armed()
    }

    // =========================================================================
    // Message routing
    // =========================================================================

    /// Handles a viewer message against the owning gallery's items.
    pub fn handle(&mut self, message: Message, items: &[ItemRecord]) -> Result<Effects> {
        match message {
            Message::Open(id) => self.open(items, id),
            Message::Close => Ok(self.close()),
            Message::Navigate(step) => self.navigate(items, step),
            Message::Select(id) => self.select(items, id),
            Message::Zoom { delta, relative } => Ok(self.zoom(delta, relative)),
            Message::ToggleMiniatures => Ok(self.toggle_miniatures()),
            Message::EnterFullscreen => Ok(self.enter_fullscreen()),
            Message::ExitFullscreen => Ok(self.exit_fullscreen()),
            Message::FullscreenChanged(active) => Ok(self.fullscreen_changed(active)),
            Message::Activity => Ok(self.activity()),
            Message::InactivityTimeout(token) => Ok(self.inactivity_timeout(token)),
            Message::Download => Ok(self.download(items)),
            Message::Wheel { delta_y } => Ok(self.wheel(delta_y)),
            Message::DragStart(position) => Ok(self.route_drag(drag::Message::DragStart {
                position,
                zoomed: self.zoom.is_zoomed(),
            })),
            Message::DragMove { position, bounds } => {
                Ok(self.route_drag(drag::Message::DragMove { position, bounds }))
            }
            Message::DragEnd => Ok(self.route_drag(drag::Message::DragEnd)),
            Message::TouchStart(position) => {
                let mut effects = self.activity();
                effects.extend(self.route_drag(drag::Message::TouchStart(position)));
                Ok(effects)
            }
            Message::TouchMove { position, bounds } => {
                match self.drag_effect(drag::Message::TouchMove {
                    position,
                    bounds,
                    zoomed: self.zoom.is_zoomed(),
                }) {
                    drag::Effect::Swipe(direction) => self.navigate(items, direction.step()),
                    drag::Effect::Panned(_) => Ok(vec![Effect::Render]),
                    drag::Effect::None => Ok(Effects::new()),
                }
            }
            Message::TouchEnd => Ok(self.route_drag(drag::Message::TouchEnd)),
            Message::VisibilityChanged => Ok(self.revalidate(items)),
            Message::Teardown => Ok(self.teardown()),
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Opens the viewer on `id`. Opening while already open selects `id`.
    pub fn open(&mut self, items: &[ItemRecord], id: ItemId) -> Result<Effects> {
        check_selectable(items, id)?;
        if self.is_open() {
            return Ok(self.show(id));
        }

        tracing::debug!(item = id, "viewer opened");
        self.current = Some(id);
        self.zoom.handle(zoom::Message::Reset);
        self.drag.handle(drag::Message::Reset);

        let mut effects = vec![Effect::SetPageScrollLocked(true)];
        effects.extend(overlay_effects(self.overlay.handle(overlay::Message::Opened)));
        effects.push(Effect::Render);
        Ok(effects)
    }

    /// Closes the viewer, leaving fullscreen first when needed.
    pub fn close(&mut self) -> Effects {
        if !self.is_open() {
            return Effects::new();
        }

        tracing::debug!(item = ?self.current, "viewer closed");
        let mut effects = Effects::new();
        if self.fullscreen {
            self.fullscreen = false;
            effects.push(Effect::ExitFullscreen);
        }
        effects.push(Effect::SetPageScrollLocked(false));
        effects.extend(overlay_effects(self.overlay.handle(overlay::Message::Disarm)));

        self.current = None;
        self.zoom.handle(zoom::Message::Reset);
        self.drag.handle(drag::Message::Reset);
        effects.push(Effect::Render);
        effects
    }

    /// Moves to the next visible item `step` ids away.
    ///
    /// Stays put when the walk leaves the list. A zero step is an error;
    /// navigating a closed viewer does nothing.
    pub fn navigate(&mut self, items: &[ItemRecord], step: i64) -> Result<Effects> {
        if step == 0 {
            return Err(Error::InvalidArgument(
                "navigation step must be non-zero".to_string(),
            ));
        }
        let Some(current) = self.current else {
            return Ok(Effects::new());
        };

        match navigation::step_to_visible(items, current, step) {
            Some(next) => {
                tracing::debug!(from = current, to = next, "viewer navigated");
                Ok(self.show(next))
            }
            None => Ok(Effects::new()),
        }
    }

    /// Jumps to `id`, opening the viewer if it is closed.
    pub fn select(&mut self, items: &[ItemRecord], id: ItemId) -> Result<Effects> {
        if !self.is_open() {
            return self.open(items, id);
        }
        check_selectable(items, id)?;
        Ok(self.show(id))
    }

    /// Changes the zoom level, clamped to the valid range.
    pub fn zoom(&mut self, delta: i32, relative: bool) -> Effects {
        if !self.is_open() {
            return Effects::new();
        }
        let message = if relative {
            zoom::Message::ZoomBy(delta)
        } else {
            zoom::Message::ZoomTo(delta)
        };
        match self.zoom.handle(message) {
            zoom::Effect::None => Effects::new(),
            zoom::Effect::ZoomChanged { rested } => {
                if rested {
                    self.drag.handle(drag::Message::Reset);
                }
                self.refresh()
            }
        }
    }

    pub fn toggle_miniatures(&mut self) -> Effects {
        self.show_miniatures = !self.show_miniatures;
        if self.is_open() {
            self.refresh()
        } else {
            Effects::new()
        }
    }

    pub fn enter_fullscreen(&mut self) -> Effects {
        if !self.is_open() || self.fullscreen {
            return Effects::new();
        }
        self.fullscreen = true;
        let mut effects = vec![Effect::RequestFullscreen];
        effects.extend(self.refresh());
        effects
    }

    pub fn exit_fullscreen(&mut self) -> Effects {
        if !self.fullscreen {
            return Effects::new();
        }
        self.fullscreen = false;
        let mut effects = vec![Effect::ExitFullscreen];
        effects.extend(self.refresh());
        effects
    }

    /// Host-originated fullscreen change.
    ///
    /// Only exits are tracked: the flag drops without asking the host to leave
    /// fullscreen again.
    pub fn fullscreen_changed(&mut self, active: bool) -> Effects {
        if active || !self.fullscreen {
            return Effects::new();
        }
        self.fullscreen = false;
        if self.is_open() {
            vec![Effect::Render]
        } else {
            Effects::new()
        }
    }

    /// Any user interaction: re-arm the inactivity timer, restore the chrome.
    pub fn activity(&mut self) -> Effects {
        if !self.is_open() {
            return Effects::new();
        }
        overlay_effects(self.overlay.handle(overlay::Message::Activity))
    }

    /// The inactivity timer `token` elapsed.
    pub fn inactivity_timeout(&mut self, token: TimerToken) -> Effects {
        if !self.is_open() {
            return Effects::new();
        }
        overlay_effects(self.overlay.handle(overlay::Message::TimerFired(token)))
    }

    /// Requests a download of the current image, when the download
    /// affordance is available.
    pub fn download(&self, items: &[ItemRecord]) -> Effects {
        self.current
            .and_then(|id| items.get(id))
            .filter(|item| item.is_plain_image())
            .and_then(ItemRecord::image_url)
            .map(|url| {
                vec![Effect::Download {
                    url: url.to_string(),
                }]
            })
            .unwrap_or_default()
    }

    /// Wheel over the content: scrolling down zooms out, up zooms in.
    pub fn wheel(&mut self, delta_y: f32) -> Effects {
        if delta_y > 0.0 {
            self.zoom(-1, true)
        } else if delta_y < 0.0 {
            self.zoom(1, true)
        } else {
            Effects::new()
        }
    }

    /// Re-resolves the current item after a visibility change.
    ///
    /// A hidden current item is replaced by the next visible one, else the
    /// previous one. The viewer closes when nothing is visible.
    pub fn revalidate(&mut self, items: &[ItemRecord]) -> Effects {
        let Some(current) = self.current else {
            return Effects::new();
        };
        match navigation::resolve_visible(items, current) {
            Some(id) if id == current => vec![Effect::Render],
            Some(id) => {
                tracing::debug!(from = current, to = id, "current item hidden by filter");
                self.show(id)
            }
            None => {
                tracing::debug!(item = current, "no visible item left, closing viewer");
                self.close()
            }
        }
    }

    /// Instance teardown: close and drop any outstanding timer.
    pub fn teardown(&mut self) -> Effects {
        let mut effects = self.close();
        effects.extend(overlay_effects(self.overlay.handle(overlay::Message::Disarm)));
        effects.retain(|effect| *effect != Effect::Render);
        effects
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Shows `id` in the open viewer with zoom and pan reset.
    fn show(&mut self, id: ItemId) -> Effects {
        self.current = Some(id);
        self.zoom.handle(zoom::Message::Reset);
        self.drag.handle(drag::Message::Reset);
        self.refresh()
    }

    /// Re-arms the inactivity timer and asks for a render.
    fn refresh(&mut self) -> Effects {
        let mut effects = overlay_effects(self.overlay.handle(overlay::Message::Rearm));
        effects.push(Effect::Render);
        effects
    }

    fn drag_effect(&mut self, message: drag::Message) -> drag::Effect {
        if !self.is_open() {
            return drag::Effect::None;
        }
        self.drag.handle(message)
    }

    fn route_drag(&mut self, message: drag::Message) -> Effects {
        match self.drag_effect(message) {
            drag::Effect::Panned(_) => vec![Effect::Render],
            drag::Effect::Swipe(_) | drag::Effect::None => Effects::new(),
        }
    }
}

fn check_selectable(items: &[ItemRecord], id: ItemId) -> Result<()> {
    let item = items
        .get(id)
        .ok_or_else(|| Error::NotFound(format!("item {id}")))?;
    if !item.visible {
        return Err(Error::InvalidArgument(format!("item {id} is hidden")));
    }
    Ok(())
}

fn overlay_effects(effect: overlay::Effect) -> Effects {
    match effect {
        overlay::Effect::None => Effects::new(),
        overlay::Effect::Rearm {
            previous,
            token,
            restored,
        } => {
            let mut effects: Effects = previous.map(Effect::CancelTimer).into_iter().collect();
            effects.push(Effect::ArmTimer {
                token,
                after: INACTIVITY_TIMEOUT,
            });
            if restored {
                effects.push(Effect::Render);
            }
            effects
        }
        overlay::Effect::Cancel(token) => vec![Effect::CancelTimer(token)],
        overlay::Effect::Collapsed => vec![Effect::Render],
    }
}
