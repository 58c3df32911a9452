use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;
use log::{debug, error, info};
use reqwest::Client;
use tokio::sync::Semaphore;

use crate::client::{create_http_client, SessionCredential};
use crate::config::ReportConfig;
use crate::error::{DownloadError, Result};
use crate::utils::download_report;
use crate::work::{build_work_items, output_dir, WorkItem};

/// Terminal state of one work item.
#[derive(Debug)]
pub struct ItemOutcome {
    pub item: WorkItem,
    pub result: std::result::Result<u64, DownloadError>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<ItemOutcome>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn total_bytes(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} reports downloaded ({} bytes)",
            self.succeeded(),
            self.total(),
            self.total_bytes()
        )
    }
}

pub struct ReportDownloader {
    client: Client,
    credential: Arc<SessionCredential>,
    config: Arc<ReportConfig>,
}

impl ReportDownloader {
    pub fn new(client: Client, credential: SessionCredential, config: ReportConfig) -> Self {
        Self {
            client,
            credential: Arc::new(credential),
            config: Arc::new(config),
        }
    }

    /// Downloads every item concurrently and waits for all of them.
    ///
    /// One failing item never cancels its siblings. Outcomes come back in the order
    /// the items were given.
    pub async fn run_all(&self, items: Vec<WorkItem>) -> RunSummary {
        let permits = self
            .config
            .concurrency
            .unwrap_or(items.len())
            .min(items.len())
            .clamp(1, Semaphore::MAX_PERMITS);
        let semaphore = Arc::new(Semaphore::new(permits));
        debug!("launching {} downloads, {} at a time", items.len(), permits);

        let mut launched = Vec::with_capacity(items.len());
        let mut handles = Vec::with_capacity(items.len());
        for item in items {
            launched.push(item.clone());
            let client = self.client.clone();
            let credential = Arc::clone(&self.credential);
            let config = Arc::clone(&self.config);
            let semaphore = Arc::clone(&semaphore);

            handles.push(tokio::spawn(async move {
                // The semaphore is never closed.
                let _permit = semaphore.acquire_owned().await.ok();
                debug!("fetching {} {} -> {}", item.platform, item.time_frame, item.path.display());
                let result = download_report(&client, &credential, &config, &item).await;
                match &result {
                    Ok(bytes) => info!("saved {} ({} bytes)", item.path.display(), bytes),
                    Err(e) => error!("{} {}: {}", item.platform, item.time_frame, e),
                }
                ItemOutcome { item, result }
            }));
        }

        let outcomes = join_all(handles)
            .await
            .into_iter()
            .zip(launched)
            .map(|(joined, item)| match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("{} {}: task failed: {}", item.platform, item.time_frame, e);
                    ItemOutcome {
                        result: Err(DownloadError::Task {
                            path: item.path.clone(),
                            message: e.to_string(),
                        }),
                        item,
                    }
                }
            })
            .collect();

        RunSummary { outcomes }
    }
}

pub fn prepare_output_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Validates `config`, creates `<root>/<today>/` and downloads every report into it.
pub async fn run(
    config: ReportConfig,
    credential: SessionCredential,
    root: &Path,
    today: NaiveDate,
) -> Result<RunSummary> {
    config.validate()?;
    prepare_output_dir(&output_dir(root, today))?;

    let items = build_work_items(&config, root, today);
    let downloader = ReportDownloader::new(create_http_client()?, credential, config);
    let summary = downloader.run_all(items).await;
    info!("{}", summary);
    Ok(summary)
}
