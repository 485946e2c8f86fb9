use crate::peek_api::converters::shared::proto_connection_setting_to_internal;
use crate::peek_api::proto::{
    EarliestOffsetPolicy as ProtoEarliestOffsetPolicy, GetTopicMessageCountQuery,
    GetTopicMessageCountQueryResponse, PartitionBacklogDto,
};
use anyhow::{bail, Context};
use kafka_peek::queries::get_topic_message_count::{
    EarliestOffsetPolicy, GetTopicMessageCountQueryInternal,
    GetTopicMessageCountQueryResponseInternal,
};

pub fn proto_get_message_count_to_internal(
    model: GetTopicMessageCountQuery,
) -> Result<GetTopicMessageCountQueryInternal, anyhow::Error> {
    if model.topic.is_empty() {
        bail!("Topic can't be empty")
    }

    let earliest_offset_policy = match model.earliest_offset_policy() {
        ProtoEarliestOffsetPolicy::TimestampResolved => EarliestOffsetPolicy::TimestampResolved,
        ProtoEarliestOffsetPolicy::LowWatermark => EarliestOffsetPolicy::LowWatermark,
    };

    let connection_settings = proto_connection_setting_to_internal(model.connection_settings)
        .context("While converting connection_settings")?;

    Ok(GetTopicMessageCountQueryInternal {
        connection_settings,
        topic: model.topic,
        earliest_offset_policy,
    })
}

pub fn message_count_to_proto_response(
    model: GetTopicMessageCountQueryResponseInternal,
) -> GetTopicMessageCountQueryResponse {
    let partitions = model
        .partitions
        .iter()
        .map(|p| PartitionBacklogDto {
            id: p.partition_id,
            high_watermark: p.high_watermark,
            earliest_offset: p.earliest_offset,
            messages_count: p.messages_count(),
        })
        .collect();

    GetTopicMessageCountQueryResponse {
        message_count: model.message_count,
        partitions,
    }
}
