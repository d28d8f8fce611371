use std::fmt::{Display, Formatter};

use anyhow::Context as _;
use chrono::NaiveDate;
use readwise_common::{compose_entry, BookEntry};
use reqwest::Client;
use tracing::{error, info};

use crate::config::Config;
use crate::dayone::{DayOneCli, EntryPublisher, Receipt};
use crate::error::{PublishError, SyncError};
use crate::images::ImageFetcher;
use crate::readwise::Readwise;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    NoHighlights,
    Created { entries: usize },
}

impl Display for SyncOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncOutcome::NoHighlights => write!(f, "No highlights for today."),
            SyncOutcome::Created { .. } => {
                write!(f, "Successfully created entries for all highlights!")
            }
        }
    }
}

/// Fetch, format and publish, one journal entry per book.
pub struct Syncer<P> {
    readwise: Readwise,
    images: ImageFetcher,
    publisher: P,
}

impl Syncer<DayOneCli> {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build http client")?;

        let readwise = Readwise::new(client.clone(), &config.token, config.export_url.clone());
        let images = ImageFetcher::new(client, config.image_dir.clone())
            .context("Failed to build title sanitizer")?;
        let publisher = DayOneCli::new(config.dayone_bin.clone(), config.journal.clone());

        Ok(Syncer::new(readwise, images, publisher))
    }
}

impl<P: EntryPublisher> Syncer<P> {
    pub fn new(readwise: Readwise, images: ImageFetcher, publisher: P) -> Self {
        Self {
            readwise,
            images,
            publisher,
        }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Publishes every book updated on `date`.
    ///
    /// Stops at the first publish failure: books after it are not attempted
    /// and entries already created stay in the journal.
    pub async fn run(&self, date: NaiveDate) -> Result<SyncOutcome, SyncError> {
        let export = self.readwise.fetch_day(date).await?;

        if export.is_empty() {
            info!("No highlights updated on {}", date);
            return Ok(SyncOutcome::NoHighlights);
        }

        let total = export.results.len();
        for (index, book) in export.results.iter().enumerate() {
            info!("Publishing {:?} ({}/{})", book.title, index + 1, total);

            match self.sync_book(book).await {
                Ok(receipt) => match receipt.entry_id() {
                    Some(id) => info!("Created entry {} for {:?}", id, book.title),
                    None => info!("Created entry for {:?}", book.title),
                },
                Err(e) => {
                    error!(
                        "Failed to publish {:?}, skipping {} remaining books",
                        book.title,
                        total - index - 1
                    );
                    return Err(e.into());
                }
            }
        }

        Ok(SyncOutcome::Created { entries: total })
    }

    async fn sync_book(&self, book: &BookEntry) -> Result<Receipt, PublishError> {
        let image = self
            .images
            .download(book.cover_image_url.as_deref(), &book.title)
            .await;

        let markdown = compose_entry(book, image.is_some());

        self.publisher.publish(&markdown, image).await
    }
}
