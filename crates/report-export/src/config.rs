use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::query::Touchpoint;

pub const DEFAULT_BASE_URL: &str = "https://1md.org/admin/analytics/reporting/export/report";

/// A reporting platform: the code sent to the dashboard and the label used in file names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Platform {
    pub code: String,
    pub label: String,
}

/// A named window of days relative to today, e.g. `2w` = `-14..-1`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimeFrame {
    pub code: String,
    pub start: i64,
    pub end: i64,
}

impl Platform {
    pub fn new(code: &str, label: &str) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
        }
    }
}

impl TimeFrame {
    pub fn new(code: &str, start: i64, end: i64) -> Self {
        Self {
            code: code.to_string(),
            start,
            end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub base_url: String,
    pub platforms: Vec<Platform>,
    pub time_frames: Vec<TimeFrame>,
    /// Platform codes reported on first touch; every other platform uses last touch.
    pub first_touch: Vec<String>,
    /// Upper bound on in-flight downloads. `None` launches every item at once.
    pub concurrency: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            platforms: vec![
                Platform::new("aws", "adwords"),
                Platform::new("awd", "display"),
                Platform::new("bad", "bing"),
                Platform::new("fba", "facebook"),
                Platform::new("gnn", "native"),
                Platform::new("gns", "yahoo"),
                Platform::new("ytb", "youtube"),
                Platform::new("tab", "taboola"),
            ],
            time_frames: vec![
                TimeFrame::new("2w", -14, -1),
                TimeFrame::new("4w", -28, -15),
                TimeFrame::new("lm", -30, -1),
                TimeFrame::new("pm", -60, -31),
            ],
            first_touch: vec!["awd".to_string()],
            concurrency: None,
        }
    }
}

impl ReportConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ReportConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("base_url {:?}: {}", self.base_url, e)))?;

        if self.platforms.is_empty() {
            return Err(Error::Config("no platforms configured".into()));
        }
        if self.time_frames.is_empty() {
            return Err(Error::Config("no time frames configured".into()));
        }

        let mut seen = HashSet::new();
        for platform in &self.platforms {
            if platform.code.is_empty() || platform.label.is_empty() {
                return Err(Error::Config("platform code and label must be non-empty".into()));
            }
            if !seen.insert(platform.code.as_str()) {
                return Err(Error::Config(format!("duplicate platform {:?}", platform.code)));
            }
        }

        let mut seen = HashSet::new();
        for frame in &self.time_frames {
            if frame.code.is_empty() {
                return Err(Error::Config("time frame code must be non-empty".into()));
            }
            if !seen.insert(frame.code.as_str()) {
                return Err(Error::Config(format!("duplicate time frame {:?}", frame.code)));
            }
        }

        if self.concurrency == Some(0) {
            return Err(Error::Config("concurrency must be at least 1".into()));
        }

        Ok(())
    }

    pub fn touchpoint_for(&self, code: &str) -> Touchpoint {
        if self.first_touch.iter().any(|c| c == code) {
            Touchpoint::First
        } else {
            Touchpoint::Last
        }
    }
}
