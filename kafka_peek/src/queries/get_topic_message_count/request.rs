use crate::connection_settings::ConnectionSettings;

#[derive(Debug)]
pub struct GetTopicMessageCountQueryInternal {
    pub connection_settings: ConnectionSettings,
    pub topic: String,
    pub earliest_offset_policy: EarliestOffsetPolicy,
}

/// Where a partition's backlog starts.
///
/// Retention and compaction can move the first readable record past the
/// nominal low watermark, so counting uses the timestamp-resolved offset
/// unless asked otherwise. Read planning always clamps to the low watermark.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum EarliestOffsetPolicy {
    LowWatermark,
    #[default]
    TimestampResolved,
}
