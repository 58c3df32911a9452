use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single report download. Always carries the destination path.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("could not create file {}: {source}", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not build request for {}: {source}", .path.display())]
    RequestBuild {
        path: PathBuf,
        #[source]
        source: url::ParseError,
    },

    #[error("could not get csv for {}: {source}", .path.display())]
    Network {
        path: PathBuf,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not copy csv to {}: {source}", .path.display())]
    BodyCopy {
        path: PathBuf,
        #[source]
        source: BodyCopySource,
    },

    #[error("download task for {} did not complete: {message}", .path.display())]
    Task { path: PathBuf, message: String },
}

#[derive(Debug, Error)]
pub enum BodyCopySource {
    #[error(transparent)]
    Read(#[from] reqwest::Error),
    #[error(transparent)]
    Write(#[from] io::Error),
}

impl DownloadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            DownloadError::FileCreate { path, .. }
            | DownloadError::RequestBuild { path, .. }
            | DownloadError::Network { path, .. }
            | DownloadError::BodyCopy { path, .. }
            | DownloadError::Task { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("session credential: {0}")]
    Credential(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
