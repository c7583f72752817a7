//! FAQ entries: ordered by `order`, then by question text.

use serde::{Deserialize, Serialize};

use crate::collation::Collation;
use crate::record::{order_content, ContentRecord};

/// One FAQ entry as loaded from `contents/faqs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

impl ContentRecord for FaqItem {
    fn path(&self) -> &str {
        &self.path
    }

    fn order(&self) -> Option<f64> {
        self.order
    }

    fn fallback_key(&self) -> &str {
        &self.question
    }
}

/// Order FAQ entries for display.
pub fn order_faqs(items: &[FaqItem], collation: &Collation) -> Vec<FaqItem> {
    order_content(items, collation)
}

/// Order FAQ entries, then group them by category.
///
/// Groups appear in the order their first entry appears in the ordered list,
/// and entries keep their relative order inside a group. Entries without a
/// category (or with a blank one) are grouped under `None`.
pub fn group_faqs_by_category(
    items: &[FaqItem],
    collation: &Collation,
) -> Vec<(Option<String>, Vec<FaqItem>)> {
    let mut groups: Vec<(Option<String>, Vec<FaqItem>)> = Vec::new();

    for item in order_faqs(items, collation) {
        let key = item
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        match groups.iter_mut().find(|(category, _)| *category == key) {
            Some((_, members)) => members.push(item),
            None => groups.push((key, vec![item])),
        }
    }

    groups
}
