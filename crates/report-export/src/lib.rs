mod client;
mod config;
mod dates;
mod downloader;
mod error;
mod query;
mod utils;
mod work;


pub use client::{create_http_client, SessionCredential, SESSION_ENV};
pub use config::{Platform, ReportConfig, TimeFrame, DEFAULT_BASE_URL};
pub use dates::{date_range, format_date, get_range, DateRange};
pub use downloader::{prepare_output_dir, run, ItemOutcome, ReportDownloader, RunSummary};
pub use error::{BodyCopySource, DownloadError, Error, Result};
pub use query::{encode_query, query_pairs, report_url, Touchpoint};
pub use work::{build_work_items, file_name, output_dir, WorkItem};
