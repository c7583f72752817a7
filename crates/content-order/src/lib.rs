//! # content-order
//!
//! Deterministic ordering for the hackathon site's content collections:
//! documentation pages, FAQ entries and team/submission records.
//!
//! Every ordering is a strict total order built from three keys, in turn:
//!
//! 1. an explicit numeric `order` (records without one sort last),
//! 2. a fallback string compared with locale-aware collation (Korean by default),
//! 3. the record path, byte-wise, so no two distinct records ever tie.
//!
//! ```rust
//! use content_order::{order_faqs, Collation, FaqItem};
//!
//! let collation = Collation::korean().unwrap();
//! let faqs = vec![
//!     FaqItem { path: "b.mdx".into(), question: "나".into(), ..Default::default() },
//!     FaqItem { path: "a.mdx".into(), question: "가".into(), ..Default::default() },
//! ];
//! let ordered = order_faqs(&faqs, &collation);
//! assert_eq!(ordered[0].question, "가");
//! ```
//!
//! ## Modules
//!
//! - [`collation`] — ICU collator wrapper bound to an explicit locale
//! - [`record`] — `ContentRecord` trait and the generic comparator
//! - [`faq`] — FAQ ordering and category grouping
//! - [`team`] — team ordering, role priority and submission cards
//! - [`docs`] — documentation page ordering driven by `meta.json`
//! - [`json`] — JSON-in/JSON-out entry points for the CLI and WASM bindings
//! - [`error`] — Error types

pub mod collation;
pub mod docs;
pub mod error;
pub mod faq;
pub mod json;
pub mod record;
pub mod team;

pub use collation::{Collation, DEFAULT_LOCALE};
pub use docs::{order_docs, DocPage, DocsMeta};
pub use error::OrderError;
pub use faq::{group_faqs_by_category, order_faqs, FaqItem};
pub use record::{compare_records, order_content, order_records, ContentRecord};
pub use team::{
    order_team, order_team_by_role, team_cards, PrimaryLink, RolePriority, TeamCard, TeamMember,
};
