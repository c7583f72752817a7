//! JSON entry points -- a JSON array of records in, the ordered array out.
//!
//! Used by the `hackathon` CLI and the WASM bindings, which both receive
//! records as JSON from the content loader.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::collation::Collation;
use crate::docs::{order_docs, DocPage, DocsMeta};
use crate::error::Result;
use crate::faq::{order_faqs, FaqItem};
use crate::team::{order_team, order_team_by_role, team_cards, RolePriority, TeamMember};

fn parse<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(json)?)
}

/// Output layout for the ordered array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Single line, for machine consumers.
    #[default]
    Compact,
    /// Indented, for terminals and files people read.
    Pretty,
}

fn render<T: Serialize>(records: &[T], style: JsonStyle) -> Result<String> {
    let out = match style {
        JsonStyle::Compact => serde_json::to_string(records)?,
        JsonStyle::Pretty => serde_json::to_string_pretty(records)?,
    };
    Ok(out)
}

pub fn order_faqs_json(json: &str, collation: &Collation, style: JsonStyle) -> Result<String> {
    let items: Vec<FaqItem> = parse(json)?;
    render(&order_faqs(&items, collation), style)
}

pub fn order_team_json(json: &str, collation: &Collation, style: JsonStyle) -> Result<String> {
    let members: Vec<TeamMember> = parse(json)?;
    render(&order_team(&members, collation), style)
}

pub fn order_team_by_role_json(
    json: &str,
    priority: &RolePriority,
    collation: &Collation,
    style: JsonStyle,
) -> Result<String> {
    let members: Vec<TeamMember> = parse(json)?;
    render(&order_team_by_role(&members, priority, collation), style)
}

/// `meta_json` is the folder's `meta.json` contents, if any.
pub fn order_docs_json(
    json: &str,
    meta_json: Option<&str>,
    collation: &Collation,
    style: JsonStyle,
) -> Result<String> {
    let pages: Vec<DocPage> = parse(json)?;
    let meta: Option<DocsMeta> = meta_json.map(serde_json::from_str).transpose()?;
    render(&order_docs(&pages, meta.as_ref(), collation), style)
}

pub fn team_cards_json(json: &str, collation: &Collation, style: JsonStyle) -> Result<String> {
    let members: Vec<TeamMember> = parse(json)?;
    render(&team_cards(&members, collation), style)
}
