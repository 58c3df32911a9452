use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use url::Url;

use crate::config::ReportConfig;
use crate::dates::{date_range, format_date, DateRange};
use crate::query::{report_url, Touchpoint};

/// One report to fetch: a (platform, time frame) pair and where its CSV goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub platform: String,
    pub label: String,
    pub time_frame: String,
    pub range: DateRange,
    pub touchpoint: Touchpoint,
    pub path: PathBuf,
}

impl WorkItem {
    pub fn url(&self, config: &ReportConfig) -> Result<Url, url::ParseError> {
        report_url(
            &config.base_url,
            &self.platform,
            &self.range.to_string(),
            self.touchpoint,
        )
    }
}

pub fn output_dir(root: &Path, today: NaiveDate) -> PathBuf {
    root.join(format_date(today))
}

pub fn file_name(today: NaiveDate, label: &str, time_frame: &str) -> String {
    format!("{}_{}_{}.csv", format_date(today), label, time_frame)
}

/// Every configured platform crossed with every configured time frame, platform-major.
pub fn build_work_items(config: &ReportConfig, root: &Path, today: NaiveDate) -> Vec<WorkItem> {
    let dir = output_dir(root, today);
    let mut items = Vec::with_capacity(config.platforms.len() * config.time_frames.len());

    for platform in &config.platforms {
        let touchpoint = config.touchpoint_for(&platform.code);
        for frame in &config.time_frames {
            items.push(WorkItem {
                platform: platform.code.clone(),
                label: platform.label.clone(),
                time_frame: frame.code.clone(),
                range: date_range(today, frame),
                touchpoint,
                path: dir.join(file_name(today, &platform.label, &frame.code)),
            });
        }
    }

    items
}
