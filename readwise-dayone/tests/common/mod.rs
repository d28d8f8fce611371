#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use readwise_dayone::{
    EntryPublisher, ImageFetcher, PublishError, Readwise, Receipt, Syncer, TempImage,
};
use reqwest::{Client, Url};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";
pub const EXPORT_PATH: &str = "/api/v2/export/";

pub fn sync_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

pub fn export_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}{}", server.uri(), EXPORT_PATH)).unwrap()
}

pub fn readwise(server: &MockServer) -> Readwise {
    Readwise::new(Client::new(), TOKEN, export_url(server))
}

pub fn syncer<P: EntryPublisher>(server: &MockServer, image_dir: &Path, publisher: P) -> Syncer<P> {
    let images = ImageFetcher::new(Client::new(), image_dir.to_path_buf()).unwrap();
    Syncer::new(readwise(server), images, publisher)
}

#[derive(Debug, Clone)]
pub struct PublishedEntry {
    pub markdown: String,
    pub image: Option<PathBuf>,
    pub image_existed: bool,
}

/// Publisher that keeps what it was given, optionally failing on the n-th
/// call (1-based).
#[derive(Default)]
pub struct RecordingPublisher {
    pub fail_on: Option<usize>,
    pub attempts: Mutex<usize>,
    pub entries: Mutex<Vec<PublishedEntry>>,
}

impl RecordingPublisher {
    pub fn failing_on(attempt: usize) -> Self {
        Self {
            fail_on: Some(attempt),
            ..Default::default()
        }
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn entries(&self) -> Vec<PublishedEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl EntryPublisher for RecordingPublisher {
    async fn publish(
        &self,
        markdown: &str,
        image: Option<TempImage>,
    ) -> Result<Receipt, PublishError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };

        if self.fail_on == Some(attempt) {
            return Err(PublishError::Io(io::Error::new(
                io::ErrorKind::Other,
                "journal is locked",
            )));
        }

        let image_path = image.as_ref().map(|i| i.path().to_path_buf());
        self.entries.lock().unwrap().push(PublishedEntry {
            markdown: markdown.to_string(),
            image_existed: image_path.as_ref().is_some_and(|p| p.exists()),
            image: image_path,
        });

        Ok(Receipt {
            output: format!("Created new entry with uuid: ENTRY{}", attempt),
        })
    }
}

/// Writes a stand-in for `dayone2` into `dir`. Every call appends its
/// arguments to `dir/args` and its stdin to `dir/stdin`, and records whether
/// any argument named an existing file in `dir/attachments`.
#[cfg(unix)]
pub fn fake_dayone(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let dir_str = dir.display();
    let report = if exit_code == 0 {
        "echo \"Created new entry with uuid: ABC123\"".to_string()
    } else {
        "echo \"journal not found\" >&2".to_string()
    };

    let script = format!(
        "#!/bin/sh\n\
         printf '%s\\n' \"$*\" >> '{dir_str}/args'\n\
         for arg in \"$@\"; do\n\
         \x20 if [ -f \"$arg\" ]; then echo \"$arg\" >> '{dir_str}/attachments'; fi\n\
         done\n\
         cat >> '{dir_str}/stdin'\n\
         {report}\n\
         exit {exit_code}\n"
    );

    let path = dir.join("dayone2");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

pub fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

/// A `dayone2` stand-in that writes 256 KiB to stdout before it reads stdin,
/// which it copies to `dir/stdin`.
#[cfg(unix)]
pub fn chatty_dayone(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let dir_str = dir.display();
    let script = format!(
        "#!/bin/sh\n\
         head -c 262144 /dev/zero | tr '\\000' 'x'\n\
         cat > '{dir_str}/stdin'\n\
         exit 0\n"
    );

    let path = dir.join("dayone2");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
