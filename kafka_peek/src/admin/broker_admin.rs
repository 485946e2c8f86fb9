/// Timestamp handed to the offset-by-time lookup to resolve the earliest
/// retained offset of each partition.
pub const EARLIEST_TIMESTAMP: i64 = 0;

/// Blocking broker queries used to plan reads and estimate backlog.
///
/// Every call reflects the broker state at the time it is made; callers run
/// these on the blocking pool.
pub trait BrokerAdmin: Send + Sync {
    /// Partition ids of the topic. A topic the broker doesn't know has none.
    fn partition_ids(&self, topic: &str) -> Result<Vec<i32>, anyhow::Error>;

    /// `(low, high)` watermarks of one partition.
    fn watermarks(&self, topic: &str, partition: i32) -> Result<(i64, i64), anyhow::Error>;

    /// Earliest offset whose timestamp is at or after `timestamp`, per
    /// partition. `None` when the broker resolves no such offset.
    fn offsets_for_timestamp(
        &self,
        topic: &str,
        partitions: &[i32],
        timestamp: i64,
    ) -> Result<Vec<(i32, Option<i64>)>, anyhow::Error>;
}
