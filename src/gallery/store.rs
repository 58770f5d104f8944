// SPDX-License-Identifier: MPL-2.0
//! Registry of live gallery instances keyed by their root element.

use super::{ElementHandle, GalleryInstance};
use crate::error::{Error, Result};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct GalleryStore {
    instances: HashMap<ElementHandle, GalleryInstance>,
}

impl GalleryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an instance. Returns the instance it replaced, if any.
    pub fn insert(&mut self, instance: GalleryInstance) -> Option<GalleryInstance> {
        self.instances.insert(instance.handle(), instance)
    }

    pub fn get(&self, handle: ElementHandle) -> Result<&GalleryInstance> {
        self.instances.get(&handle).ok_or_else(|| not_found(handle))
    }

    pub fn get_mut(&mut self, handle: ElementHandle) -> Result<&mut GalleryInstance> {
        self.instances.get_mut(&handle).ok_or_else(|| not_found(handle))
    }

    pub fn remove(&mut self, handle: ElementHandle) -> Result<GalleryInstance> {
        self.instances.remove(&handle).ok_or_else(|| not_found(handle))
    }

    #[must_use]
    pub fn contains(&self, handle: ElementHandle) -> bool {
        self.instances.contains_key(&handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Registered handles in ascending order.
    #[must_use]
    pub fn handles(&self) -> Vec<ElementHandle> {
        let mut handles: Vec<ElementHandle> = self.instances.keys().copied().collect();
        handles.sort_unstable();
        handles
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut GalleryInstance> {
        self.instances.values_mut()
    }
}

fn not_found(handle: ElementHandle) -> Error {
    Error::NotFound(format!("no gallery registered for {handle}"))
}
