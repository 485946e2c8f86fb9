#[derive(Debug)]
pub struct GetTopicMessageCountQueryResponseInternal {
    pub message_count: i64,
    pub partitions: Vec<PartitionBacklog>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PartitionBacklog {
    pub partition_id: i32,
    pub high_watermark: i64,
    /// `None` when no earliest offset could be resolved; such a partition
    /// counts as empty.
    pub earliest_offset: Option<i64>,
}

impl PartitionBacklog {
    pub fn messages_count(&self) -> i64 {
        self.earliest_offset
            .map(|earliest| (self.high_watermark - earliest).max(0))
            .unwrap_or(0)
    }
}
