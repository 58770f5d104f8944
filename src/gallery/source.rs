// SPDX-License-Identifier: MPL-2.0
//! Host-side description of gallery markup.
//!
//! The host walks its element tree and hands over one [`SourceElement`] per
//! gallery root. The crate never touches host nodes; it only reads the
//! attributes and the content classification captured here.

use super::ItemContent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a gallery root element, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementHandle(u64);

impl ElementHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gallery #{}", self.0)
    }
}

/// One child of a gallery root: an item's attribute and viewer payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceChild {
    /// Raw per-item JSON attribute.
    pub attribute: Option<String>,
    pub content: ItemContent,
}

/// A gallery root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceElement {
    pub handle: ElementHandle,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Raw gallery JSON attribute.
    pub attribute: Option<String>,
    pub children: Vec<SourceChild>,
}

impl SourceElement {
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Lookup of gallery roots in the host document.
pub trait Document {
    /// Elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<&SourceElement>;

    /// The element whose id is `id`, if any.
    fn element_by_id(&self, id: &str) -> Option<&SourceElement>;
}

impl Document for [SourceElement] {
    fn elements_by_class(&self, class: &str) -> Vec<&SourceElement> {
        self.iter().filter(|element| element.has_class(class)).collect()
    }

    fn element_by_id(&self, id: &str) -> Option<&SourceElement> {
        self.iter().find(|element| element.id.as_deref() == Some(id))
    }
}

impl Document for Vec<SourceElement> {
    fn elements_by_class(&self, class: &str) -> Vec<&SourceElement> {
        self.as_slice().elements_by_class(class)
    }

    fn element_by_id(&self, id: &str) -> Option<&SourceElement> {
        self.as_slice().element_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(raw: u64, id: Option<&str>, classes: &[&str]) -> SourceElement {
        SourceElement {
            handle: ElementHandle::new(raw),
            id: id.map(str::to_owned),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            attribute: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn lookup_by_class_keeps_document_order() {
        let doc = vec![
            element(1, None, &["a", "gallery"]),
            element(2, None, &["b"]),
            element(3, None, &["gallery"]),
        ];
        let found: Vec<u64> = doc
            .elements_by_class("gallery")
            .iter()
            .map(|e| e.handle.value())
            .collect();
        assert_eq!(found, vec![1, 3]);
    }

    #[test]
    fn lookup_by_id() {
        let doc = vec![element(1, Some("main"), &[]), element(2, None, &[])];
        assert_eq!(
            doc.element_by_id("main").map(|e| e.handle),
            Some(ElementHandle::new(1))
        );
        assert!(doc.element_by_id("other").is_none());
    }
}
