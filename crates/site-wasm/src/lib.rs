//! WASM bindings for the hackathon site core.
//!
//! Exposes D-day labels and content ordering to the site's JavaScript
//! rendering layer via `wasm-bindgen`. Record collections cross the boundary
//! as JSON strings; failures surface as thrown JS errors.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p site-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/site-core-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/site_wasm.wasm
//! ```

use chrono::{DateTime, Utc};
use content_order::json::{self, JsonStyle};
use content_order::{Collation, RolePriority};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Native helpers (testable without a JS host)
// ---------------------------------------------------------------------------

/// Parse an RFC 3339 instant such as `2026-02-21T00:00:00+09:00`.
fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid instant '{}': {}", s, e))
}

fn collation(locale: Option<&str>) -> Result<Collation, String> {
    let locale = locale.unwrap_or(content_order::DEFAULT_LOCALE);
    Collation::new(locale).map_err(|e| e.to_string())
}

fn role_priority(roles_json: Option<&str>) -> Result<RolePriority, String> {
    match roles_json {
        Some(raw) => serde_json::from_str::<Vec<String>>(raw)
            .map(RolePriority::new)
            .map_err(|e| format!("Invalid roles JSON: {}", e)),
        None => Ok(RolePriority::default()),
    }
}

fn dday_label_inner(event_date: &str, now: &str) -> Result<String, String> {
    let now = parse_instant(now)?;
    countdown::dday_label(event_date, now).map_err(|e| e.to_string())
}

fn order_inner(
    records_json: &str,
    locale: Option<&str>,
    order: impl FnOnce(&str, &Collation) -> content_order::error::Result<String>,
) -> Result<String, String> {
    let collation = collation(locale)?;
    order(records_json, &collation).map_err(|e| e.to_string())
}

fn to_js(result: Result<String, String>) -> Result<String, JsValue> {
    result.map_err(|e| JsValue::from_str(&e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// D-day label ("D-7", "D-Day", "D+3") for `event_date` (`YYYY-MM-DD`, KST)
/// as seen at `now` (RFC 3339). The caller supplies `now`, typically
/// `new Date().toISOString()`.
#[wasm_bindgen(js_name = "ddayLabel")]
pub fn dday_label(event_date: &str, now: &str) -> Result<String, JsValue> {
    to_js(dday_label_inner(event_date, now))
}

/// Order a JSON array of FAQ entries. `locale` defaults to `"ko"`.
#[wasm_bindgen(js_name = "orderFaqs")]
pub fn order_faqs(records_json: &str, locale: Option<String>) -> Result<String, JsValue> {
    to_js(order_inner(records_json, locale.as_deref(), |records, c| {
        json::order_faqs_json(records, c, JsonStyle::Compact)
    }))
}

/// Order a JSON array of team submissions by `order`, then name.
#[wasm_bindgen(js_name = "orderTeam")]
pub fn order_team(records_json: &str, locale: Option<String>) -> Result<String, JsValue> {
    to_js(order_inner(records_json, locale.as_deref(), |records, c| {
        json::order_team_json(records, c, JsonStyle::Compact)
    }))
}

/// Order a JSON array of team members by role priority.
///
/// `roles_json` is a JSON array of role names; the organizer roles are used
/// when it is omitted.
#[wasm_bindgen(js_name = "orderTeamByRole")]
pub fn order_team_by_role(
    records_json: &str,
    roles_json: Option<String>,
    locale: Option<String>,
) -> Result<String, JsValue> {
    to_js(role_priority(roles_json.as_deref()).and_then(|priority| {
        order_inner(records_json, locale.as_deref(), |records, c| {
            json::order_team_by_role_json(records, &priority, c, JsonStyle::Compact)
        })
    }))
}

/// Order a JSON array of docs pages, using a folder's `meta.json` if given.
#[wasm_bindgen(js_name = "orderDocs")]
pub fn order_docs(
    records_json: &str,
    meta_json: Option<String>,
    locale: Option<String>,
) -> Result<String, JsValue> {
    to_js(order_inner(records_json, locale.as_deref(), |records, c| {
        json::order_docs_json(records, meta_json.as_deref(), c, JsonStyle::Compact)
    }))
}

/// Order submissions and return display-ready cards as JSON.
#[wasm_bindgen(js_name = "teamCards")]
pub fn team_cards(records_json: &str, locale: Option<String>) -> Result<String, JsValue> {
    to_js(order_inner(records_json, locale.as_deref(), |records, c| {
        json::team_cards_json(records, c, JsonStyle::Compact)
    }))
}

/// Submission timestamp rendered in KST, or the "not recorded" placeholder.
#[wasm_bindgen(js_name = "formatSubmittedAt")]
pub fn format_submitted_at(value: Option<String>) -> String {
    countdown::format_submitted_at(value.as_deref())
}
