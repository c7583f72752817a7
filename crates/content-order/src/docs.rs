//! Documentation pages, ordered by the `pages` list of a folder's `meta.json`.

use serde::{Deserialize, Serialize};

use crate::collation::Collation;
use crate::record::order_records;

/// One documentation page under `contents/docs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocPage {
    #[serde(default)]
    pub path: String,
    /// Slug relative to the docs root, e.g. `overview`.
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A folder's `meta.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub pages: Vec<String>,
}

impl DocsMeta {
    /// Position of `slug` in `pages`. Separators and `...` never match a slug.
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.pages.iter().position(|p| p == slug)
    }
}

/// Order pages: listed slugs in `meta.pages` order, the rest by title, then path.
///
/// Without a meta file every page is ordered by title.
pub fn order_docs(pages: &[DocPage], meta: Option<&DocsMeta>, collation: &Collation) -> Vec<DocPage> {
    order_records(
        pages,
        |p| meta.and_then(|m| m.position(&p.slug)).map(|i| i as f64),
        |p| p.title.as_str(),
        |p| p.path.as_str(),
        collation,
    )
}
