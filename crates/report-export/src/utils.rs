use log::warn;
use reqwest::header::COOKIE;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::client::SessionCredential;
use crate::config::ReportConfig;
use crate::error::DownloadError;
use crate::work::WorkItem;

/// Fetches one report into `item.path`, returning the number of bytes written.
///
/// The file is created before the request goes out. A transport failure leaves it
/// empty; a non-2xx response removes it. The file and response are dropped on every
/// return path.
pub async fn download_report(
    client: &Client,
    credential: &SessionCredential,
    config: &ReportConfig,
    item: &WorkItem,
) -> Result<u64, DownloadError> {
    let mut file = File::create(&item.path)
        .await
        .map_err(|source| DownloadError::FileCreate {
            path: item.path.clone(),
            source,
        })?;

    let url = item.url(config).map_err(|source| DownloadError::RequestBuild {
        path: item.path.clone(),
        source,
    })?;

    let network = |source| DownloadError::Network {
        path: item.path.clone(),
        source,
    };
    let mut response = client
        .get(url)
        .header(COOKIE, credential.cookie_header())
        .send()
        .await
        .map_err(network)?;

    // An error page is not a report: leave no file behind.
    if let Err(source) = response.error_for_status_ref() {
        drop(file);
        if let Err(e) = tokio::fs::remove_file(&item.path).await {
            warn!("could not remove {}: {}", item.path.display(), e);
        }
        return Err(network(source));
    }

    let copy = |source| DownloadError::BodyCopy {
        path: item.path.clone(),
        source,
    };
    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await.map_err(|e| copy(e.into()))? {
        file.write_all(&chunk).await.map_err(|e| copy(e.into()))?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(|e| copy(e.into()))?;

    Ok(written)
}
