// SPDX-License-Identifier: MPL-2.0
//! Runtime root: gallery lifecycle and event dispatch.
//!
//! [`GalleryRuntime`] owns the [`GalleryStore`] and a [`Host`]. Host events
//! enter through [`GalleryRuntime::dispatch`], are handled by [`update`], and
//! the resulting effects are pushed back to the host. Layout passes are
//! coalesced: an instance is laid out at most once per dispatch call.

mod host;
mod message;
pub mod timer;
mod update;

pub use host::Host;
pub use message::{Event, Key, ViewerAction};
pub use update::{update, Outcome};

use crate::config::DEFAULT_GALLERY_CLASS;
use crate::error::{Error, Result};
use crate::gallery::{Document, ElementHandle, GalleryInstance, GalleryStore, SourceElement};
use crate::ui::icons::Icon;
use crate::ui::viewer::Effect;

/// Live galleries of one page plus the host they render into.
#[derive(Debug)]
pub struct GalleryRuntime<H: Host> {
    host: H,
    store: GalleryStore,
    assets_provisioned: bool,
}

impl<H: Host> GalleryRuntime<H> {
    #[must_use]
    pub fn new(host: H) -> Self {
        Self {
            host,
            store: GalleryStore::new(),
            assets_provisioned: false,
        }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn store(&self) -> &GalleryStore {
        &self.store
    }

    pub fn instance(&self, handle: ElementHandle) -> Result<&GalleryInstance> {
        self.store.get(handle)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Initializes every element carrying the default gallery class.
    pub fn init_all<D: Document + ?Sized>(&mut self, document: &D) -> Vec<ElementHandle> {
        self.init_by_class(document, DEFAULT_GALLERY_CLASS)
    }

    /// Initializes every element carrying `class`, in document order.
    pub fn init_by_class<D: Document + ?Sized>(
        &mut self,
        document: &D,
        class: &str,
    ) -> Vec<ElementHandle> {
        document
            .elements_by_class(class)
            .into_iter()
            .map(|element| self.init_by_element(element))
            .collect()
    }

    pub fn init_by_id<D: Document + ?Sized>(
        &mut self,
        document: &D,
        id: &str,
    ) -> Result<ElementHandle> {
        let element = document
            .element_by_id(id)
            .ok_or_else(|| Error::NotFound(format!("no element with id {id:?}")))?;
        Ok(self.init_by_element(element))
    }

    /// Initializes one gallery and renders it.
    ///
    /// Re-initializing a registered handle tears the previous instance down
    /// and replaces it.
    pub fn init_by_element(&mut self, element: &SourceElement) -> ElementHandle {
        self.provision_assets();

        let handle = element.handle;
        if let Ok(previous) = self.store.remove(handle) {
            tracing::warn!(%handle, "gallery re-initialised, replacing previous instance");
            teardown(&mut self.host, previous);
        }

        let mut instance = GalleryInstance::new(element);
        self.host.render_gallery(handle, &instance.gallery_view());
        self.host.apply_placements(handle, instance.relayout());
        self.store.insert(instance);
        handle
    }

    /// Tears a gallery down and removes its rendered output.
    pub fn deinit_by_element(&mut self, handle: ElementHandle) -> Result<()> {
        let instance = self.store.remove(handle)?;
        teardown(&mut self.host, instance);
        Ok(())
    }

    fn provision_assets(&mut self) {
        if !self.assets_provisioned {
            self.host.provision_assets(&Icon::ALL);
            self.assets_provisioned = true;
        }
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Handles one event for `handle`.
    pub fn dispatch(&mut self, handle: ElementHandle, event: Event) -> Result<()> {
        self.dispatch_batch(handle, [event])
    }

    /// Handles several events for `handle` with a single layout pass at the
    /// end.
    ///
    /// Processing stops at the first failing event; effects of the events
    /// before it are still applied and the layout still runs.
    pub fn dispatch_batch<I>(&mut self, handle: ElementHandle, events: I) -> Result<()>
    where
        I: IntoIterator<Item = Event>,
    {
        let instance = self.store.get_mut(handle)?;

        let mut result = Ok(());
        for event in events {
            match update(instance, event) {
                Ok(outcome) => apply(&mut self.host, instance, outcome),
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }

        if let Some(layout) = instance.relayout_if_dirty() {
            self.host.apply_placements(handle, layout);
        }
        result
    }
}

/// Pushes one event's outcome to the host. Several render requests collapse
/// into a single viewer render after the other effects.
fn apply<H: Host>(host: &mut H, instance: &GalleryInstance, outcome: Outcome) {
    let handle = instance.handle();
    if outcome.gallery_changed {
        host.render_gallery(handle, &instance.gallery_view());
    }

    let mut render = false;
    for effect in outcome.effects {
        match effect {
            Effect::SetPageScrollLocked(locked) => host.set_page_scroll_locked(locked),
            Effect::RequestFullscreen => host.request_fullscreen(handle),
            Effect::ExitFullscreen => host.exit_fullscreen(handle),
            Effect::ArmTimer { token, after } => host.arm_timer(handle, token, after),
            Effect::CancelTimer(token) => host.cancel_timer(handle, token),
            Effect::Download { url } => host.download(&url),
            Effect::Render => render = true,
        }
    }
    if render {
        host.render_viewer(handle, instance.viewer_view().as_ref());
    }
}

fn teardown<H: Host>(host: &mut H, mut instance: GalleryInstance) {
    let effects = instance.teardown();
    let handle = instance.handle();
    apply(
        host,
        &instance,
        Outcome {
            effects,
            gallery_changed: false,
        },
    );
    host.remove_gallery(handle);
}
