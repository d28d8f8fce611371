use std::path::{Path, PathBuf};

use regex::Regex;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::error::ImageError;

/// A downloaded cover image. The file is removed when this is dropped, so
/// whoever holds it last (the publisher) cleans it up on every path.
#[derive(Debug)]
pub struct TempImage {
    path: PathBuf,
}

impl TempImage {
    /// Takes ownership of an existing file, which is deleted on drop.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempImage {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed temporary image {:?}", self.path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove temporary image {:?}: {}", self.path, e),
        }
    }
}

pub struct ImageFetcher {
    client: Client,
    dir: PathBuf,
    sanitizer: Regex,
}

impl ImageFetcher {
    pub fn new(client: Client, dir: PathBuf) -> Result<Self, regex::Error> {
        Ok(Self {
            client,
            dir,
            sanitizer: Regex::new(r"[^\p{L}\p{N}_]")?,
        })
    }

    /// Downloads the cover for `title`, or `None` when there is no url or the
    /// download fails. Failures are logged and otherwise ignored.
    pub async fn download(&self, url: Option<&str>, title: &str) -> Option<TempImage> {
        let url = url?;

        match self.fetch(url, title).await {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Failed to download image: {}", e);
                None
            }
        }
    }

    async fn fetch(&self, url: &str, title: &str) -> Result<TempImage, ImageError> {
        debug!("Downloading cover image {}", url);

        let response = self.client.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(ImageError::Status(response.status()));
        }
        let bytes = response.bytes().await?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let image = TempImage::new(self.dir.join(format!("{}.jpg", self.sanitize_title(title))));
        // A failed write drops `image`, taking any partial file with it.
        tokio::fs::write(image.path(), &bytes).await?;

        debug!("Saved cover image to {:?}", image.path());
        Ok(image)
    }

    pub fn sanitize_title(&self, title: &str) -> String {
        self.sanitizer
            .replace_all(title, "_")
            .trim_end_matches('_')
            .to_string()
    }
}
