// SPDX-License-Identifier: MPL-2.0
//! Natural image sizes.
//!
//! Layout only needs the width and height of each thumbnail. The host reports
//! them as images finish loading ([`SizeTable`]); the command-line tool reads
//! them from image headers on disk ([`FileMeasurer`]).

use crate::gallery::{ItemId, ItemRecord};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Intrinsic size of a thumbnail image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NaturalSize {
    pub width: f32,
    pub height: f32,
}

impl NaturalSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A size is usable once both sides are finite and positive. Anything
    /// else counts as "not loaded yet".
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

impl From<(u32, u32)> for NaturalSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f32, height as f32)
    }
}

/// Source of natural sizes for a layout pass.
///
/// `None` means the item is not ready and must be left out of the pass.
pub trait Measurer {
    fn measure(&mut self, item: &ItemRecord) -> Option<NaturalSize>;
}

impl<F> Measurer for F
where
    F: FnMut(&ItemRecord) -> Option<NaturalSize>,
{
    fn measure(&mut self, item: &ItemRecord) -> Option<NaturalSize> {
        self(item)
    }
}

// =============================================================================
// Host-reported sizes
// =============================================================================

/// Sizes reported by the host, keyed by item id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeTable {
    sizes: HashMap<ItemId, NaturalSize>,
}

impl SizeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a size. Returns `true` when it changed.
    pub fn record(&mut self, id: ItemId, size: NaturalSize) -> bool {
        self.sizes.insert(id, size) != Some(size)
    }

    /// Drops a size, e.g. after the host reported a failed load.
    pub fn forget(&mut self, id: ItemId) -> bool {
        self.sizes.remove(&id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<NaturalSize> {
        self.sizes.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl Measurer for SizeTable {
    fn measure(&mut self, item: &ItemRecord) -> Option<NaturalSize> {
        self.get(item.id)
    }
}

// =============================================================================
// Sizes read from disk
// =============================================================================

const FILE_CACHE_CAPACITY: usize = 256;

/// Reads natural sizes from image headers, relative to a root directory.
///
/// Results (including failures) are cached per resolved path so repeated
/// layout passes do not hit the disk again.
pub struct FileMeasurer {
    root: PathBuf,
    cache: LruCache<PathBuf, Option<NaturalSize>>,
}

impl FileMeasurer {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_capacity(root, FILE_CACHE_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(root: impl Into<PathBuf>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            root: root.into(),
            cache: LruCache::new(capacity),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(path: &Path) -> Option<NaturalSize> {
        match image_rs::image_dimensions(path) {
            Ok(dimensions) => Some(NaturalSize::from(dimensions)).filter(NaturalSize::is_usable),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot read image size");
                None
            }
        }
    }
}

impl Measurer for FileMeasurer {
    fn measure(&mut self, item: &ItemRecord) -> Option<NaturalSize> {
        if item.src.is_empty() {
            return None;
        }
        let path = self.root.join(&item.src);
        if let Some(cached) = self.cache.get(&path) {
            return *cached;
        }
        let size = Self::read(&path);
        self.cache.put(path, size);
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::ItemContent;
    use crate::test_utils::{assert_relative_eq, F32_EPSILON};
    use tempfile::tempdir;

    #[test]
    fn unusable_sizes_are_rejected() {
        assert!(NaturalSize::new(4.0, 3.0).is_usable());
        assert!(!NaturalSize::new(0.0, 3.0).is_usable());
        assert!(!NaturalSize::new(4.0, -1.0).is_usable());
        assert!(!NaturalSize::new(f32::NAN, 3.0).is_usable());
    }

    #[test]
    fn aspect_ratio_from_pixel_dimensions() {
        let size = NaturalSize::from((1920, 1080));
        assert_relative_eq!(size.aspect_ratio(), 16.0 / 9.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn size_table_reports_changes() {
        let mut table = SizeTable::new();
        assert!(table.record(0, NaturalSize::new(10.0, 5.0)));
        assert!(!table.record(0, NaturalSize::new(10.0, 5.0)));
        assert!(table.record(0, NaturalSize::new(20.0, 5.0)));
        assert_eq!(table.len(), 1);
        assert!(table.forget(0));
        assert!(!table.forget(0));
        assert!(table.is_empty());
    }

    #[test]
    fn file_measurer_reads_image_headers() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        image_rs::RgbImage::new(40, 30)
            .save(temp_dir.path().join("a.png"))
            .expect("failed to write png");

        let mut measurer = FileMeasurer::new(temp_dir.path());
        let item = ItemRecord::new(0, "a.png", ItemContent::Source);
        assert_eq!(measurer.measure(&item), Some(NaturalSize::new(40.0, 30.0)));
        // Served from cache after the file is gone.
        std::fs::remove_file(temp_dir.path().join("a.png")).expect("failed to remove png");
        assert_eq!(measurer.measure(&item), Some(NaturalSize::new(40.0, 30.0)));
    }

    #[test]
    fn file_measurer_treats_missing_files_as_not_ready() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut measurer = FileMeasurer::new(temp_dir.path());
        assert_eq!(measurer.measure(&ItemRecord::new(0, "missing.jpg", ItemContent::Source)), None);
        assert_eq!(measurer.measure(&ItemRecord::new(1, "", ItemContent::Source)), None);
    }
}
