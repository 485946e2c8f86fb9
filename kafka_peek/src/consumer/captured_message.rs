use crate::consumer::PartitionOffset;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use rdkafka::Message;

/// A record read during a single fetch. Key and payload are kept as the
/// broker delivered them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CapturedMessage {
    pub partition_offset: PartitionOffset,
    pub timestamp_millis: Option<i64>,
    pub key: Option<Bytes>,
    pub payload: Option<Bytes>,
}

impl CapturedMessage {
    pub fn from_message<M: Message>(message: &M) -> Self {
        Self {
            partition_offset: PartitionOffset::new(message.partition(), message.offset()),
            timestamp_millis: message.timestamp().to_millis(),
            key: message.key().map(Bytes::copy_from_slice),
            payload: message.payload().map(Bytes::copy_from_slice),
        }
    }

    pub fn partition(&self) -> i32 {
        *self.partition_offset.partition()
    }

    pub fn offset(&self) -> i64 {
        *self.partition_offset.offset()
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp_millis
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}
