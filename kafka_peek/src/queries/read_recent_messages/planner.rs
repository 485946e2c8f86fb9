use crate::consumer::PartitionOffset;
use crate::queries::get_topic_partitions_with_offsets::TopicOffsetSnapshot;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PartitionReadPlan {
    pub partition_id: i32,
    pub start_offset: i64,
    pub has_messages: bool,
}

impl PartitionReadPlan {
    pub fn start_position(&self) -> PartitionOffset {
        PartitionOffset::new(self.partition_id, self.start_offset)
    }
}

/// Number of trailing messages read from each partition so that the whole
/// topic yields at least `requested_count` when every partition is full
/// enough.
pub fn per_partition_share(requested_count: usize, partitions_count: usize) -> i64 {
    requested_count.div_ceil(partitions_count.max(1)) as i64
}

/// Splits a "last N messages" request evenly across partitions.
///
/// The split is approximate: a partition that recently had a burst is
/// under-read and an idle one over-read, and the total may exceed
/// `requested_count` before ranking. Start offsets never go below the low
/// watermark.
pub fn plan(snapshot: &[TopicOffsetSnapshot], requested_count: usize) -> Vec<PartitionReadPlan> {
    let share = per_partition_share(requested_count, snapshot.len());

    snapshot
        .iter()
        .map(|partition| PartitionReadPlan {
            partition_id: partition.partition_id,
            start_offset: partition
                .low_watermark
                .max(partition.high_watermark - share),
            has_messages: partition.has_messages(),
        })
        .collect()
}
