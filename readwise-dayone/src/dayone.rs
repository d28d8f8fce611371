//! Creating journal entries.
//!
//! The sync only talks to [`EntryPublisher`]; [`DayOneCli`] is the
//! implementation that shells out to the `dayone2` command line tool.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::PublishError;
use crate::images::TempImage;

/// What the journaling backend reported after creating an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Receipt {
    pub output: String,
}

impl Receipt {
    /// The entry id, when the backend printed one (`... uuid: <id>`).
    pub fn entry_id(&self) -> Option<&str> {
        self.output
            .lines()
            .find_map(|line| line.split_once("uuid:"))
            .map(|(_, id)| id.trim())
            .filter(|id| !id.is_empty())
    }
}

#[async_trait]
pub trait EntryPublisher {
    /// Creates one entry from `markdown`, attaching `image` when given.
    ///
    /// The image is consumed: its file is gone once this returns, whether the
    /// entry was created or not.
    async fn publish(
        &self,
        markdown: &str,
        image: Option<TempImage>,
    ) -> Result<Receipt, PublishError>;
}

pub struct DayOneCli {
    program: String,
    journal: Option<String>,
}

impl DayOneCli {
    pub fn new(program: impl Into<String>, journal: Option<String>) -> Self {
        Self {
            program: program.into(),
            journal,
        }
    }

    /// `[-j <journal>] [-a <image> --] new`
    pub fn args(&self, image: Option<&Path>) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();

        if let Some(journal) = &self.journal {
            args.push("-j".into());
            args.push(journal.into());
        }

        // `-a` takes several values, `--` ends the list so `new` is read as
        // the command.
        if let Some(image) = image {
            args.push("-a".into());
            args.push(image.into());
            args.push("--".into());
        }

        args.push("new".into());
        args
    }
}

#[async_trait]
impl EntryPublisher for DayOneCli {
    async fn publish(
        &self,
        markdown: &str,
        image: Option<TempImage>,
    ) -> Result<Receipt, PublishError> {
        let args = self.args(image.as_ref().map(TempImage::path));
        debug!("Running {} {:?}", self.program, args);

        let mut child = match Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PublishError::ToolNotFound {
                    program: self.program.clone(),
                    source: e,
                })
            }
            Err(e) => return Err(e.into()),
        };

        // Feed stdin while stdout/stderr are drained, so a tool that writes
        // before reading cannot block on a full pipe.
        let stdin = child.stdin.take();
        let write_stdin = async move {
            match stdin {
                Some(mut stdin) => stdin.write_all(markdown.as_bytes()).await,
                None => Ok(()),
            }
        };
        let (written, output) = tokio::join!(write_stdin, child.wait_with_output());
        let output = output?;

        // A tool that exits without reading is judged by its exit status.
        if let Err(e) = written {
            if e.kind() != ErrorKind::BrokenPipe {
                return Err(e.into());
            }
        }

        if !output.status.success() {
            return Err(PublishError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        Ok(Receipt {
            output: String::from_utf8_lossy(&output.stdout).trim_end().to_string(),
        })
    }
}
