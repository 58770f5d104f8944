// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest files.
//!
//! A manifest describes one gallery outside of any markup: the gallery
//! attribute object and one attribute object per item. JSON is the default
//! format; files with a `.toml` extension are read and written as TOML.
//!
//! ```json
//! {
//!   "gallery": { "style": "horizontal", "thumbnailSize": 200 },
//!   "items": [
//!     { "src": "a.jpg", "category": "birds", "title": "Heron" },
//!     { "src": "b.jpg", "content": "<iframe src=\"...\"></iframe>" }
//!   ]
//! }
//! ```

use crate::error::Result;
use crate::gallery::{ElementHandle, ItemContent, SourceChild, SourceElement};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Key of the optional rich payload inside an item object.
const CONTENT_KEY: &str = "content";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default = "empty_object")]
    pub gallery: Value,
    #[serde(default)]
    pub items: Vec<Value>,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

impl Manifest {
    /// Converts the manifest into the source element a host would hand to
    /// [`crate::app::GalleryRuntime::init_by_element`].
    #[must_use]
    pub fn to_element(&self, handle: ElementHandle) -> SourceElement {
        let children = self
            .items
            .iter()
            .map(|item| {
                let content = item
                    .get(CONTENT_KEY)
                    .and_then(Value::as_str)
                    .filter(|markup| !markup.trim().is_empty())
                    .map_or(ItemContent::Source, |markup| {
                        ItemContent::Rich(markup.to_string())
                    });
                SourceChild {
                    attribute: Some(item.to_string()),
                    content,
                }
            })
            .collect();

        SourceElement {
            handle,
            id: None,
            classes: Vec::new(),
            attribute: Some(self.gallery.to_string()),
            children,
        }
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

pub fn load_from_path(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    if is_toml(path) {
        Ok(toml::from_str(&content)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

pub fn save_to_path(manifest: &Manifest, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = if is_toml(path) {
        toml::to_string_pretty(manifest)?
    } else {
        serde_json::to_string_pretty(manifest)?
    };
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;
    use tempfile::tempdir;

    fn sample() -> Manifest {
        Manifest {
            gallery: json!({ "style": "mosaic", "gap": 4 }),
            items: vec![
                json!({ "src": "a.jpg", "spanX": 2, "spanY": 1 }),
                json!({ "src": "b.jpg", "content": "<video src=\"b.mp4\"></video>" }),
            ],
        }
    }

    #[test]
    fn json_manifest_round_trips_through_disk() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("gallery.json");

        save_to_path(&sample(), &path).expect("failed to save manifest");
        let loaded = load_from_path(&path).expect("failed to load manifest");
        assert_eq!(loaded, sample());
    }

    #[test]
    fn toml_manifest_is_detected_by_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("gallery.toml");
        fs::write(
            &path,
            "[gallery]\nstyle = \"grid\"\n\n[[items]]\nsrc = \"a.jpg\"\ntitle = \"A\"\n",
        )
        .expect("failed to write toml");

        let loaded = load_from_path(&path).expect("failed to load toml manifest");
        assert_eq!(loaded.gallery["style"], "grid");
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.items[0]["title"], "A");
    }

    #[test]
    fn invalid_manifest_surfaces_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("gallery.json");
        fs::write(&path, "{ not json").expect("failed to write file");

        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_manifest_surfaces_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn to_element_classifies_rich_content() {
        let element = sample().to_element(ElementHandle::new(7));
        assert_eq!(element.handle, ElementHandle::new(7));
        assert_eq!(element.children.len(), 2);
        assert_eq!(element.children[0].content, ItemContent::Source);
        assert!(matches!(element.children[1].content, ItemContent::Rich(_)));
    }
}
