//! Site configuration: event metadata and navigation.
//!
//! Read from a JSON file whose keys mirror the site's `siteConfig`
//! (`eventDateKst`, `eventTimeLabel`, ...). Missing keys fall back to the
//! built-in defaults, so a file may override only what it needs.

use std::path::Path;

use anyhow::{Context, Result};
use countdown::EventDate;
use serde::{Deserialize, Serialize};

/// Used when neither the config file nor `HACKATHON_APP_URL` sets a URL.
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub url: String,
    pub nav: Vec<NavigationItem>,
    pub event_date_kst: EventDate,
    pub event_time_label: String,
    pub event_title: String,
    pub event_description: String,
}

fn nav(label: &str, href: &str) -> NavigationItem {
    NavigationItem {
        label: label.to_string(),
        href: href.to_string(),
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            name: "OKKY 바이브 코딩 해카톤".to_string(),
            description: "국내 최대 개발자 커뮤니티 OKKY가 진행하는 AI 바이브 코딩 해커톤"
                .to_string(),
            url: DEFAULT_APP_URL.to_string(),
            nav: vec![
                nav("홈", "/"),
                nav("행사개요", "/docs/overview"),
                nav("일정", "/docs/schedule"),
                nav("FAQ", "/faq"),
            ],
            event_date_kst: EventDate::from(
                chrono::NaiveDate::from_ymd_opt(2026, 2, 21).unwrap_or_default(),
            ),
            event_time_label: "2026.02.21(토) 13:00 ~ 18:30".to_string(),
            event_title: "‘코드 짜면 안되는’ 바이브코딩 해커톤".to_string(),
            event_description: "AI로 기획·구현·배포까지 완주하는 해커톤".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load the config from `path`, or the defaults when no path is given.
    ///
    /// `app_url` (from `HACKATHON_APP_URL` or `--app-url`) wins over the
    /// file's `url`.
    pub fn load(path: Option<&Path>, app_url: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                Self::from_json(&raw)
                    .with_context(|| format!("Invalid config: {}", path.display()))?
            }
            None => SiteConfig::default(),
        };

        if let Some(url) = app_url.map(str::trim).filter(|u| !u.is_empty()) {
            log::debug!("app url overridden: {}", url);
            config.url = url.to_string();
        }

        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Failed to parse site config JSON")
    }
}
