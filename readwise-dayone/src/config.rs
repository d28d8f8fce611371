use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_EXPORT_URL: &str = "https://readwise.io/api/v2/export/";

#[derive(Debug, Parser)]
#[command(
    name = "readwise-dayone",
    about = "Create one Day One entry per book for the highlights updated today"
)]
pub struct Cli {
    /// Readwise API token
    #[arg(long, env = "READWISE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Day One journal to create the entries in, the app's default journal when unset
    #[arg(long, short, env = "DAYONE_JOURNAL_PATH")]
    pub journal: Option<String>,

    /// Readwise export endpoint
    #[arg(long, env = "READWISE_EXPORT_URL", default_value = DEFAULT_EXPORT_URL)]
    pub export_url: String,

    /// Day One command line tool
    #[arg(long, env = "DAYONE_BIN", default_value = "dayone2")]
    pub dayone_bin: String,

    /// Where cover images are downloaded to before being attached
    #[arg(long, env = "READWISE_IMAGE_DIR")]
    pub image_dir: Option<PathBuf>,

    /// Sync highlights updated on this UTC day (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<String>,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, env = "READWISE_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

/// Everything a sync run needs, resolved once at startup.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub journal: Option<String>,
    pub export_url: Url,
    pub dayone_bin: String,
    pub image_dir: PathBuf,
    pub date: NaiveDate,
    pub timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"[REDACTED]")
            .field("journal", &self.journal)
            .field("export_url", &self.export_url.as_str())
            .field("dayone_bin", &self.dayone_bin)
            .field("image_dir", &self.image_dir)
            .field("date", &self.date)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn from_cli(cli: Cli, today: NaiveDate) -> Result<Self, ConfigError> {
        let token = cli
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let export_url =
            Url::parse(&cli.export_url).map_err(|e| ConfigError::InvalidExportUrl {
                url: cli.export_url.clone(),
                reason: e.to_string(),
            })?;

        let date = match cli.date {
            Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map_err(|_| ConfigError::InvalidDate(raw))?,
            None => today,
        };

        Ok(Config {
            token,
            journal: cli.journal.filter(|j| !j.is_empty()),
            export_url,
            dayone_bin: cli.dayone_bin,
            image_dir: cli.image_dir.unwrap_or_else(default_image_dir),
            date,
            timeout: Duration::from_secs(cli.timeout_secs),
        })
    }
}

pub fn default_image_dir() -> PathBuf {
    std::env::temp_dir().join("readwise_images")
}
