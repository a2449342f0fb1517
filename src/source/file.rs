use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tracing::debug;

use super::constants::DEFAULT_THERMAL_ZONE;
use super::FileSource;
use crate::error::Result;

/// Pseudo-file source that keeps its handle open between reads
///
/// The kernel regenerates the file contents on every read from offset zero,
/// so the handle is rewound instead of reopened.
#[derive(Debug)]
pub struct FileMetricSource {
    path: PathBuf,
    handle: Option<File>,
}

impl FileMetricSource {
    /// Create a source for `path`. Nothing is opened until the first read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), handle: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a handle is currently held
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    async fn handle(&mut self) -> Result<&mut File> {
        // A handle that fails to rewind is dropped and reopened on the next read.
        let file = match self.handle.take() {
            Some(mut file) => {
                file.seek(SeekFrom::Start(0)).await?;
                file
            }
            None => {
                debug!(path = %self.path.display(), "opening metric file");
                File::open(&self.path).await?
            }
        };
        Ok(self.handle.insert(file))
    }
}

impl Default for FileMetricSource {
    fn default() -> Self {
        Self::new(DEFAULT_THERMAL_ZONE)
    }
}

#[async_trait]
impl FileSource for FileMetricSource {
    async fn read_raw(&mut self) -> Result<String> {
        let file = self.handle().await?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).await?;
        Ok(contents.lines().next().unwrap_or_default().to_string())
    }

    fn close(&mut self) {
        if self.handle.take().is_some() {
            debug!(path = %self.path.display(), "closed metric file");
        }
    }
}

impl Drop for FileMetricSource {
    fn drop(&mut self) {
        self.close();
    }
}
