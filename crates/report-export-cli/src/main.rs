use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;
use log::{error, info};
use report_export::{run, ReportConfig, SessionCredential};

/// Downloads every acquisition report (platform x time frame) as CSV into
/// `<out-dir>/<date>/`. The session id is read from `PHPSESSID`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML file overriding the platform and time frame tables
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "./downloads")]
    out_dir: PathBuf,

    /// Maximum number of downloads in flight (default: all at once)
    #[arg(long)]
    concurrency: Option<usize>,

    /// Reference date in YYYY-MM-DD, defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match fetch_reports(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn fetch_reports(args: Args) -> report_export::Result<bool> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    if args.concurrency.is_some() {
        config.concurrency = args.concurrency;
    }

    let credential = SessionCredential::from_env()?;
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    info!("exporting reports for {} into {}", today, args.out_dir.display());

    let summary = run(config, credential, &args.out_dir, today).await?;
    if !summary.is_success() {
        error!("{} reports failed", summary.total() - summary.succeeded());
    }
    println!("finished");
    Ok(summary.is_success())
}
