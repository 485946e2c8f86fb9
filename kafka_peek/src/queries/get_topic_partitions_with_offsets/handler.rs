use crate::admin::{AdminWrapper, BrokerAdmin};
use crate::error::PeekError;
use crate::queries::get_topic_partitions_with_offsets::{
    GetTopicPartitionsWithOffsetsQueryInternal, GetTopicPartitionsWithOffsetsQueryResponseInternal,
    TopicOffsetSnapshot,
};
use anyhow::Context;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::trace;

#[tracing::instrument(skip_all)]
pub async fn get_topic_partition_offsets(
    query: GetTopicPartitionsWithOffsetsQueryInternal,
) -> Result<GetTopicPartitionsWithOffsetsQueryResponseInternal, PeekError> {
    let admin = AdminWrapper::create(&query.connection_settings)
        .context("While creating admin client")
        .map_err(PeekError::InvalidArgument)?;

    let partitions = snapshot_topic_offsets(Arc::new(admin), &query.topic).await?;

    Ok(GetTopicPartitionsWithOffsetsQueryResponseInternal { partitions })
}

/// Reads the current watermarks of every partition of `topic`, ordered by
/// partition id. Partitions are queried in parallel.
pub async fn snapshot_topic_offsets<A: BrokerAdmin + 'static>(
    admin: Arc<A>,
    topic: &str,
) -> Result<Vec<TopicOffsetSnapshot>, PeekError> {
    let topic = topic.to_owned();
    let handle = tokio::task::spawn_blocking(move || build_snapshot(admin.as_ref(), &topic));

    handle
        .await
        .context("While joining handle")
        .map_err(PeekError::BrokerUnavailable)?
        .map_err(PeekError::BrokerUnavailable)
}

fn build_snapshot<A: BrokerAdmin>(
    admin: &A,
    topic: &str,
) -> Result<Vec<TopicOffsetSnapshot>, anyhow::Error> {
    let partitions = admin
        .partition_ids(topic)
        .context("While fetching partitions")?;

    trace!("Topic {} has {} partitions", topic, partitions.len());

    let mut snapshot = partitions
        .into_par_iter()
        .map(|partition| fetch_partition_snapshot(admin, topic, partition))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("While fetching watermarks for topic {}", topic))?;

    snapshot.sort_by_key(|s| s.partition_id);

    Ok(snapshot)
}

fn fetch_partition_snapshot<A: BrokerAdmin>(
    admin: &A,
    topic: &str,
    partition: i32,
) -> Result<TopicOffsetSnapshot, anyhow::Error> {
    let (low, high) = admin.watermarks(topic, partition)?;

    Ok(TopicOffsetSnapshot {
        partition_id: partition,
        low_watermark: low,
        high_watermark: high,
    })
}
