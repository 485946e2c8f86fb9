use crate::admin::{AdminWrapper, BrokerAdmin};
use crate::consumer::{ConsumerWrapper, RecordSource};
use crate::error::PeekError;
use crate::queries::get_topic_partitions_with_offsets::snapshot_topic_offsets;
use crate::queries::read_recent_messages::{
    collect_planned, plan, rank, ReadRecentMessagesQueryInternal,
    ReadRecentMessagesQueryResponseInternal,
};
use anyhow::{anyhow, Context};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// Reads the most recent `max_messages` messages of a topic across all of its
/// partitions, newest first.
#[tracing::instrument(skip_all, fields(topic = %query.topic))]
pub async fn read_recent_messages(
    query: ReadRecentMessagesQueryInternal,
) -> Result<ReadRecentMessagesQueryResponseInternal, PeekError> {
    let admin = AdminWrapper::create(&query.connection_settings)
        .context("While creating admin client")
        .map_err(PeekError::InvalidArgument)?;

    let connection_settings = query.connection_settings;
    read_recent_messages_with(
        Arc::new(admin),
        |group| ConsumerWrapper::create_for_recent_read(&connection_settings, group),
        &query.topic,
        query.max_messages,
        query.timeout,
    )
    .await
}

/// Snapshot, plan, collect and rank against the given broker handles.
/// `open_source` is only called when at least one partition holds messages,
/// with a group id that is never reused.
pub async fn read_recent_messages_with<A, S, F>(
    admin: Arc<A>,
    open_source: F,
    topic: &str,
    max_messages: usize,
    timeout: Duration,
) -> Result<ReadRecentMessagesQueryResponseInternal, PeekError>
where
    A: BrokerAdmin + 'static,
    S: RecordSource,
    F: FnOnce(&str) -> Result<S, anyhow::Error>,
{
    if topic.is_empty() {
        return Err(PeekError::InvalidArgument(anyhow!("Topic can't be empty")));
    }
    if max_messages == 0 {
        return Err(PeekError::InvalidArgument(anyhow!(
            "Messages count must be greater than zero"
        )));
    }

    let snapshot = snapshot_topic_offsets(admin, topic).await?;
    let plans = plan(&snapshot, max_messages);

    if !plans.iter().any(|p| p.has_messages) {
        debug!(
            "Topic {} has no messages in {} partitions",
            topic,
            plans.len()
        );
        return Ok(ReadRecentMessagesQueryResponseInternal {
            messages: vec![],
            partitions_count: snapshot.len(),
            timed_out: false,
        });
    }

    let group = format!("kafka-peek-{}", Uuid::now_v7());
    info!(
        "Reading last {} messages from {} partitions with group {}",
        max_messages,
        plans.len(),
        group
    );

    let source = open_source(&group)
        .context("While creating consumer")
        .map_err(PeekError::BrokerUnavailable)?;

    let collected = collect_planned(&source, topic, &plans, max_messages, timeout)
        .await
        .map_err(PeekError::BrokerUnavailable)?;
    drop(source);

    let messages = rank(collected.messages, max_messages);

    Ok(ReadRecentMessagesQueryResponseInternal {
        messages,
        partitions_count: snapshot.len(),
        timed_out: collected.timed_out,
    })
}
