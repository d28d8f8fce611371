pub mod config;
pub mod dayone;
pub mod error;
pub mod images;
pub mod readwise;
pub mod sync;

pub use config::{Cli, Config};
pub use dayone::{DayOneCli, EntryPublisher, Receipt};
pub use error::{ConfigError, FetchError, ImageError, PublishError, SyncError};
pub use images::{ImageFetcher, TempImage};
pub use readwise::{DayWindow, Readwise};
pub use sync::{SyncOutcome, Syncer};
