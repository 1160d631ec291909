use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use super::StoreError;
use super::SubscriptionStore;
use crate::domain::SubscriptionRecord;

/// In-process stand-in for `FileStore`; holds the rendered lines so tests can
/// assert on exactly what would have been written.
#[derive(Default)]
pub struct InMemoryStore {
    lines: Mutex<Vec<String>>,
    unavailable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self { Self::default() }

    /// A store whose every `append` fails, as if the disk were gone
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl SubscriptionStore for InMemoryStore {
    async fn append(
        &self,
        record: &SubscriptionRecord,
    ) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Append {
                path: PathBuf::from("<memory>"),
                source: std::io::Error::new(std::io::ErrorKind::Other, "store unavailable"),
            });
        }
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record.to_line());
        Ok(())
    }
}
