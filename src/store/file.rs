use std::fs::OpenOptions;
use std::io;
use std::io::ErrorKind;
use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::StoreError;
use super::SubscriptionStore;
use crate::domain::SubscriptionRecord;

/// Append-only text file, one record per line. Both the file and its
/// directory are created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(
        directory: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    pub fn path(&self) -> PathBuf { self.directory.join(&self.file_name) }

    /// `create_dir_all` already succeeds on an existing directory; a lost race
    /// against a concurrent creator can still surface as `AlreadyExists`,
    /// which is just as good.
    #[tracing::instrument(name = "Ensuring store directory exists", skip(self), fields(directory = %self.directory.display()))]
    async fn ensure_directory(&self) -> Result<(), StoreError> {
        match fs::create_dir_all(&self.directory).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(source) => Err(StoreError::CreateDirectory {
                path: self.directory.clone(),
                source,
            }),
        }
    }
}

#[async_trait]
impl SubscriptionStore for FileStore {
    // no lock: the file is opened with O_APPEND, so the kernel positions every
    // write at the current end of file. the whole line goes out in one
    // blocking `write_all`; `tokio::fs::File` would chunk anything over its
    // buffer size into separate writes, which concurrent appends can split
    #[tracing::instrument(name = "Appending record to store", skip(self, record), fields(path = %self.path().display()))]
    async fn append(
        &self,
        record: &SubscriptionRecord,
    ) -> Result<(), StoreError> {
        self.ensure_directory().await?;

        let path = self.path();
        let line = record.to_line();
        let len = line.len();

        let target = path.clone();
        tokio::task::spawn_blocking(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&target)?
                .write_all(line.as_bytes())
        })
        .await
        .map_err(io::Error::other)
        .and_then(|written| written)
        .map_err(|source| StoreError::Append { path, source })?;

        tracing::debug!("appended {len} bytes");
        Ok(())
    }
}
