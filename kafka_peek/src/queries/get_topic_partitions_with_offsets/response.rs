#[derive(Debug)]
pub struct GetTopicPartitionsWithOffsetsQueryResponseInternal {
    pub partitions: Vec<TopicOffsetSnapshot>,
}

/// Watermarks of one partition, read at the start of an operation and never
/// reused by a later one.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TopicOffsetSnapshot {
    pub partition_id: i32,
    pub low_watermark: i64,
    pub high_watermark: i64,
}

impl TopicOffsetSnapshot {
    pub fn has_messages(&self) -> bool {
        self.high_watermark > self.low_watermark
    }

    pub fn messages_count(&self) -> i64 {
        self.high_watermark.max(0) - self.low_watermark.max(0)
    }
}
