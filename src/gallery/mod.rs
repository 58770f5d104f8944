// SPDX-License-Identifier: MPL-2.0
//! Gallery instances: configuration, items, filter and viewer of one root.
//!
//! A [`GalleryInstance`] is created from a host [`SourceElement`] and owns
//! everything about that gallery. Filter changes recompute visibility, let the
//! viewer re-resolve its current item, then mark the layout dirty; the layout
//! itself is only recomputed when [`GalleryInstance::relayout_if_dirty`] is
//! called, which lets the caller coalesce several triggers into one pass.

pub mod filter;
mod item;
mod source;
mod store;

pub use item::{ItemContent, ItemId, ItemRecord};
pub use source::{Document, ElementHandle, SourceChild, SourceElement};
pub use store::GalleryStore;

use crate::config::GalleryConfig;
use crate::error::{Error, Result};
use crate::layout::{self, Layout, NaturalSize, SizeTable};
use crate::ui::gallery_view::GalleryView;
use crate::ui::viewer::{self, ViewerController, ViewerView};
use filter::{CategoryFilter, ItemFilter, SearchFilter};

#[derive(Debug)]
pub struct GalleryInstance {
    handle: ElementHandle,
    config: GalleryConfig,
    items: Vec<ItemRecord>,
    filter: ItemFilter,
    viewer: ViewerController,
    sizes: SizeTable,
    container_width: f32,
    layout: Layout,
    layout_dirty: bool,
}

impl GalleryInstance {
    /// Builds an instance from its root element. Item ids follow child order.
    #[must_use]
    pub fn new(element: &SourceElement) -> Self {
        let mut config = GalleryConfig::from_attribute(element.attribute.as_deref());
        let mut items: Vec<ItemRecord> = element
            .children
            .iter()
            .enumerate()
            .map(|(id, child)| {
                ItemRecord::from_attribute(id, child.attribute.as_deref(), child.content.clone())
            })
            .collect();
        config.collect_categories(&items);

        let filter = ItemFilter::new();
        filter.apply(&mut items);

        tracing::debug!(
            handle = %element.handle,
            style = %config.style,
            items = items.len(),
            categories = config.categories.len(),
            "gallery initialised"
        );

        let layout = Layout::empty(config.style, config.padding as f32);
        Self {
            handle: element.handle,
            config,
            items,
            filter,
            viewer: ViewerController::new(),
            sizes: SizeTable::new(),
            container_width: 0.0,
            layout,
            layout_dirty: true,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn handle(&self) -> ElementHandle {
        self.handle
    }

    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    #[must_use]
    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    #[must_use]
    pub fn filter(&self) -> &ItemFilter {
        &self.filter
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerController {
        &self.viewer
    }

    /// Result of the last layout pass.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    #[must_use]
    pub fn is_layout_dirty(&self) -> bool {
        self.layout_dirty
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|item| item.visible).count()
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Selects a category by label. An empty label keeps the current one and
    /// only re-applies the search.
    pub fn select_category(&mut self, label: &str) -> viewer::Effects {
        if !label.is_empty() {
            self.filter.category = CategoryFilter::from_selection(label);
        }
        self.refilter()
    }

    pub fn set_search(&mut self, text: &str) -> viewer::Effects {
        self.filter.search = SearchFilter::new(text);
        self.refilter()
    }

    pub fn clear_search(&mut self) -> viewer::Effects {
        self.filter.search = SearchFilter::default();
        self.refilter()
    }

    /// Recomputes visibility and lets the viewer move off hidden items.
    fn refilter(&mut self) -> viewer::Effects {
        let visible = self.filter.apply(&mut self.items);
        tracing::debug!(
            handle = %self.handle,
            category = self.filter.category.label(),
            search = self.filter.search.text(),
            visible,
            "filter applied"
        );
        self.layout_dirty = true;
        self.viewer.revalidate(&self.items)
    }

    // =========================================================================
    // Layout inputs
    // =========================================================================

    /// Records a new container width. Returns `true` when it changed.
    pub fn set_container_width(&mut self, width: f32) -> bool {
        if width == self.container_width {
            return false;
        }
        self.container_width = width;
        self.layout_dirty = true;
        true
    }

    /// Records the natural size of a loaded thumbnail.
    pub fn record_size(&mut self, id: ItemId, size: NaturalSize) -> Result<bool> {
        self.check_item(id)?;
        let changed = self.sizes.record(id, size);
        self.layout_dirty |= changed;
        Ok(changed)
    }

    /// Forgets the size of a thumbnail whose load failed.
    pub fn forget_size(&mut self, id: ItemId) -> Result<bool> {
        self.check_item(id)?;
        let changed = self.sizes.forget(id);
        self.layout_dirty |= changed;
        Ok(changed)
    }

    fn check_item(&self, id: ItemId) -> Result<()> {
        if id < self.items.len() {
            Ok(())
        } else {
            Err(Error::NotFound(format!("item {id} in {}", self.handle)))
        }
    }

    /// Runs a layout pass unconditionally.
    pub fn relayout(&mut self) -> &Layout {
        self.layout = layout::layout(
            &self.config,
            &self.items,
            self.container_width,
            &mut self.sizes,
        );
        self.layout_dirty = false;
        &self.layout
    }

    /// Runs a layout pass when an input changed since the last one.
    pub fn relayout_if_dirty(&mut self) -> Option<&Layout> {
        if self.layout_dirty {
            Some(self.relayout())
        } else {
            None
        }
    }

    // =========================================================================
    // Viewer
    // =========================================================================

    /// Routes a message to the viewer with this gallery's items.
    pub fn update_viewer(&mut self, message: viewer::Message) -> Result<viewer::Effects> {
        self.viewer.handle(message, &self.items)
    }

    /// Closes the viewer and drops any outstanding timer.
    pub fn teardown(&mut self) -> viewer::Effects {
        tracing::debug!(handle = %self.handle, "gallery torn down");
        self.viewer.teardown()
    }

    // =========================================================================
    // Views
    // =========================================================================

    #[must_use]
    pub fn gallery_view(&self) -> GalleryView {
        GalleryView::build(&self.config, &self.items, &self.filter)
    }

    #[must_use]
    pub fn viewer_view(&self) -> Option<ViewerView> {
        ViewerView::build(&self.viewer, &self.items, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element() -> SourceElement {
        let child = |attribute: &str| SourceChild {
            attribute: Some(attribute.to_string()),
            content: ItemContent::Source,
        };
        SourceElement {
            handle: ElementHandle::new(1),
            id: Some("main".into()),
            classes: vec!["gallery-lens".into()],
            attribute: Some(r#"{"style": "grid", "thumbnailSize": 100, "gap": 0}"#.into()),
            children: vec![
                child(r#"{"src": "a.jpg", "category": "birds", "title": "Heron"}"#),
                child(r#"{"src": "b.jpg", "category": "mammals", "title": "Fox"}"#),
                child(r#"{"src": "c.jpg", "category": "birds", "title": "Kingfisher"}"#),
            ],
        }
    }

    fn ready(instance: &mut GalleryInstance) {
        for id in 0..instance.items().len() {
            instance
                .record_size(id, NaturalSize::new(100.0, 100.0))
                .expect("item exists");
        }
    }

    #[test]
    fn new_instance_reads_config_and_items() {
        let instance = GalleryInstance::new(&element());
        assert_eq!(instance.config().style, layout::LayoutStyle::Grid);
        assert_eq!(instance.config().categories, vec!["birds", "mammals"]);
        assert_eq!(instance.items().len(), 3);
        assert_eq!(instance.items()[2].id, 2);
        assert_eq!(instance.visible_count(), 3);
        assert!(instance.is_layout_dirty());
    }

    #[test]
    fn layout_runs_once_per_change() {
        let mut instance = GalleryInstance::new(&element());
        ready(&mut instance);
        instance.set_container_width(300.0);

        let placed = instance
            .relayout_if_dirty()
            .map(|layout| layout.placements.len());
        assert_eq!(placed, Some(3));
        assert!(instance.relayout_if_dirty().is_none());

        assert!(!instance.set_container_width(300.0));
        assert!(instance.relayout_if_dirty().is_none());
    }

    #[test]
    fn unmeasured_items_wait_for_their_size() {
        let mut instance = GalleryInstance::new(&element());
        instance.set_container_width(300.0);
        assert!(instance.relayout().placements.is_empty());

        instance
            .record_size(1, NaturalSize::new(40.0, 30.0))
            .expect("item exists");
        assert!(instance.is_layout_dirty());
        assert_eq!(instance.relayout().placements.len(), 1);

        assert!(matches!(
            instance.record_size(7, NaturalSize::new(1.0, 1.0)),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn category_selection_filters_and_dirties_layout() {
        let mut instance = GalleryInstance::new(&element());
        ready(&mut instance);
        instance.set_container_width(300.0);
        instance.relayout();

        instance.select_category("mammals");
        assert!(instance.is_layout_dirty());
        assert_eq!(instance.visible_count(), 1);
        assert_eq!(instance.relayout().placements.len(), 1);

        // An empty selection keeps "mammals" and re-applies the search.
        instance.set_search("heron");
        instance.select_category("");
        assert_eq!(instance.filter().category.label(), "mammals");
        assert_eq!(instance.visible_count(), 0);

        instance.select_category("All");
        instance.clear_search();
        assert_eq!(instance.visible_count(), 3);
    }

    #[test]
    fn filtering_moves_the_open_viewer() {
        let mut instance = GalleryInstance::new(&element());
        instance
            .update_viewer(viewer::Message::Open(1))
            .expect("open should succeed");

        instance.select_category("birds");
        assert_eq!(instance.viewer().current(), Some(2));

        instance.set_search("nothing matches this");
        assert!(!instance.viewer().is_open());
    }

    #[test]
    fn views_reflect_state() {
        let mut instance = GalleryInstance::new(&element());
        assert!(instance.viewer_view().is_none());
        instance
            .update_viewer(viewer::Message::Open(0))
            .expect("open should succeed");

        let view = instance.viewer_view().expect("viewer is open");
        assert_eq!(view.page_index.to_string(), "1 / 3");
        assert_eq!(instance.gallery_view().categories.len(), 3);
    }
}
