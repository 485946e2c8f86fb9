use crate::peek_api::converters::shared::{
    proto_connection_setting_to_internal, proto_format_to_format,
};
use crate::peek_api::proto::{
    KafkaMessageDto, ReadRecentMessagesQuery, ReadRecentMessagesQueryResponse,
};
use crate::time_util::ProtoTimestampConvert;
use anyhow::{bail, Context};
use kafka_peek::consumer::CapturedMessage;
use kafka_peek::queries::read_recent_messages::{
    Format, ReadRecentMessagesQueryInternal, ReadRecentMessagesQueryResponseInternal,
};
use std::time::Duration;

/// How key and body bytes are shown to the caller. `None` returns raw bytes.
#[derive(Debug, Copy, Clone, Default)]
pub struct RenderFormats {
    pub key_format: Option<Format>,
    pub body_format: Option<Format>,
}

pub fn proto_read_recent_messages_to_internal(
    model: ReadRecentMessagesQuery,
    timeout: Duration,
) -> Result<(ReadRecentMessagesQueryInternal, RenderFormats), anyhow::Error> {
    if model.topic.is_empty() {
        bail!("Topic can't be empty")
    }
    if model.max_messages == 0 {
        bail!("Max messages must be greater than zero")
    }

    let connection_settings = proto_connection_setting_to_internal(model.connection_settings)
        .context("While converting connection_settings")?;

    let formats = RenderFormats {
        key_format: proto_format_to_format(model.key_format),
        body_format: proto_format_to_format(model.body_format),
    };

    let query = ReadRecentMessagesQueryInternal {
        connection_settings,
        topic: model.topic,
        max_messages: model.max_messages as usize,
        timeout,
    };

    Ok((query, formats))
}

pub fn recent_messages_to_proto_response(
    model: ReadRecentMessagesQueryResponseInternal,
    formats: RenderFormats,
) -> ReadRecentMessagesQueryResponse {
    let messages = model
        .messages
        .into_iter()
        .map(|message| captured_message_to_proto(message, formats))
        .collect();

    ReadRecentMessagesQueryResponse {
        messages,
        partitions_count: model.partitions_count as u32,
        timed_out: model.timed_out,
    }
}

fn captured_message_to_proto(message: CapturedMessage, formats: RenderFormats) -> KafkaMessageDto {
    let (key, raw_key) = render_part(message.key.as_deref(), formats.key_format);
    let (body, raw_body) = render_part(message.payload.as_deref(), formats.body_format);

    KafkaMessageDto {
        partition: message.partition(),
        offset: message.offset(),
        timestamp: message.timestamp().map(|t| t.to_proto_timestamp()),
        key,
        body,
        raw_key,
        raw_body,
    }
}

fn render_part(bytes: Option<&[u8]>, format: Option<Format>) -> (Option<String>, Option<Vec<u8>>) {
    let Some(bytes) = bytes else {
        return (None, None);
    };

    match format {
        Some(format) => (Some(format.render(bytes)), None),
        None => (None, Some(bytes.to_vec())),
    }
}
