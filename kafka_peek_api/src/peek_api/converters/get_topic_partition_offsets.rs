use crate::peek_api::converters::shared::proto_connection_setting_to_internal;
use crate::peek_api::proto::{
    GetTopicPartitionsWithOffsetsQuery, GetTopicPartitionsWithOffsetsQueryResponse,
    PartitionDataWatermarksDto,
};
use anyhow::{bail, Context};
use kafka_peek::queries::get_topic_partitions_with_offsets::{
    GetTopicPartitionsWithOffsetsQueryInternal, GetTopicPartitionsWithOffsetsQueryResponseInternal,
};

pub fn proto_get_partitions_with_offsets_to_internal(
    model: GetTopicPartitionsWithOffsetsQuery,
) -> Result<GetTopicPartitionsWithOffsetsQueryInternal, anyhow::Error> {
    if model.topic.is_empty() {
        bail!("Topic can't be empty")
    }

    let connection_settings = proto_connection_setting_to_internal(model.connection_settings)
        .context("While converting connection_settings")?;

    Ok(GetTopicPartitionsWithOffsetsQueryInternal {
        connection_settings,
        topic: model.topic,
    })
}

pub fn partitions_with_offsets_to_proto_response(
    model: GetTopicPartitionsWithOffsetsQueryResponseInternal,
) -> GetTopicPartitionsWithOffsetsQueryResponse {
    GetTopicPartitionsWithOffsetsQueryResponse {
        partitions: model
            .partitions
            .into_iter()
            .map(|p| PartitionDataWatermarksDto {
                id: p.partition_id,
                min_offset: p.low_watermark,
                max_offset: p.high_watermark,
                messages_count: p.messages_count(),
            })
            .collect(),
    }
}
