use crate::consumer::{CapturedMessage, PartitionOffset};
use async_trait::async_trait;

/// A consumer session scoped to one fetch.
///
/// `assign` positions every listed partition at its offset before any record
/// is read; partitions that are not listed are never read.
#[async_trait]
pub trait RecordSource: Send + Sync {
    fn assign(&self, topic: &str, positions: &[PartitionOffset]) -> Result<(), anyhow::Error>;

    async fn next_record(&self) -> Result<CapturedMessage, anyhow::Error>;

    fn stop(&self) -> Result<(), anyhow::Error>;
}
