use std::io;
use std::process::ExitStatus;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("READWISE_TOKEN not found in environment variables")]
    MissingToken,

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid export url {url:?}: {reason}")]
    InvalidExportUrl { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to request export: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to reach Readwise: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse export response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("{0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Failed to create Day One entry: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("Day One CLI not found. Please install it first.")]
    ToolNotFound {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to run Day One CLI: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}
