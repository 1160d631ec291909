mod file;
mod memory;

use std::fmt::Debug;
use std::path::PathBuf;

use async_trait::async_trait;
pub use file::FileStore;
pub use memory::InMemoryStore;

use crate::domain::SubscriptionRecord;
use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum StoreError {
    #[error("Failed to create store directory {}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to append record to {}", .path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Debug for StoreError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Append-only sink for subscription records. Nothing in this crate reads
/// back, rewrites or deletes what was appended.
///
/// Implementations are shared by every request (`Arc<dyn SubscriptionStore>`)
/// and receive no locking from the caller, so `append` must be safe to call
/// concurrently: each record lands whole, in some order.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    async fn append(
        &self,
        record: &SubscriptionRecord,
    ) -> Result<(), StoreError>;
}
