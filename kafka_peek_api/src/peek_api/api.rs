use crate::error::ApplicationError;
use crate::peek_api::proto::{
    GetTopicMessageCountQuery, GetTopicMessageCountQueryResponse,
    GetTopicPartitionsWithOffsetsQuery, GetTopicPartitionsWithOffsetsQueryResponse,
    ReadRecentMessagesQuery, ReadRecentMessagesQueryResponse,
};
use crate::peek_api::{
    message_count_to_proto_response, partitions_with_offsets_to_proto_response, proto,
    proto_get_message_count_to_internal, proto_get_partitions_with_offsets_to_internal,
    proto_read_recent_messages_to_internal, recent_messages_to_proto_response,
};
use kafka_peek::queries::get_topic_message_count::get_topic_message_count;
use kafka_peek::queries::get_topic_partitions_with_offsets::get_topic_partition_offsets;
use kafka_peek::queries::read_recent_messages::read_recent_messages;
use std::time::Duration;
use tonic::{Request, Response, Status};
use tracing::debug;

#[derive(Debug)]
pub struct PeekService {
    recent_messages_timeout: Duration,
}

impl PeekService {
    pub fn new(recent_messages_timeout: Duration) -> Self {
        Self {
            recent_messages_timeout,
        }
    }
}

#[tonic::async_trait]
impl proto::PeekService for PeekService {
    #[tracing::instrument(skip_all)]
    async fn read_recent_messages(
        &self,
        request: Request<ReadRecentMessagesQuery>,
    ) -> Result<Response<ReadRecentMessagesQueryResponse>, Status> {
        let proto_request = request.into_inner();
        debug!("New request: {:?}", proto_request);

        let (query, formats) =
            proto_read_recent_messages_to_internal(proto_request, self.recent_messages_timeout)
                .map_err(ApplicationError::InvalidArgument)?;

        debug!("Mapped request: {:?}", query);

        let response = read_recent_messages(query)
            .await
            .map_err(ApplicationError::from)?;

        debug!(
            "Read {} messages, timed out: {}",
            response.messages.len(),
            response.timed_out
        );

        Ok(Response::new(recent_messages_to_proto_response(
            response, formats,
        )))
    }

    #[tracing::instrument(skip_all)]
    async fn get_topic_message_count(
        &self,
        request: Request<GetTopicMessageCountQuery>,
    ) -> Result<Response<GetTopicMessageCountQueryResponse>, Status> {
        let proto_request = request.into_inner();

        let query = proto_get_message_count_to_internal(proto_request)
            .map_err(ApplicationError::InvalidArgument)?;

        debug!("Mapped request: {:?}", query);

        let response = get_topic_message_count(query)
            .await
            .map_err(ApplicationError::from)?;

        Ok(Response::new(message_count_to_proto_response(response)))
    }

    #[tracing::instrument(skip_all)]
    async fn get_topic_partitions_with_offsets(
        &self,
        request: Request<GetTopicPartitionsWithOffsetsQuery>,
    ) -> Result<Response<GetTopicPartitionsWithOffsetsQueryResponse>, Status> {
        let proto_request = request.into_inner();

        let query = proto_get_partitions_with_offsets_to_internal(proto_request)
            .map_err(ApplicationError::InvalidArgument)?;

        let response = get_topic_partition_offsets(query)
            .await
            .map_err(ApplicationError::from)?;

        Ok(Response::new(partitions_with_offsets_to_proto_response(
            response,
        )))
    }
}
