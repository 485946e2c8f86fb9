use crate::admin::{AdminWrapper, BrokerAdmin, EARLIEST_TIMESTAMP};
use crate::error::PeekError;
use crate::queries::get_topic_message_count::{
    EarliestOffsetPolicy, GetTopicMessageCountQueryInternal,
    GetTopicMessageCountQueryResponseInternal, PartitionBacklog,
};
use crate::queries::get_topic_partitions_with_offsets::snapshot_topic_offsets;
use anyhow::{anyhow, Context};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[tracing::instrument(skip_all, fields(topic = %query.topic))]
pub async fn get_topic_message_count(
    query: GetTopicMessageCountQueryInternal,
) -> Result<GetTopicMessageCountQueryResponseInternal, PeekError> {
    let admin = AdminWrapper::create(&query.connection_settings)
        .context("While creating admin client")
        .map_err(PeekError::InvalidArgument)?;

    estimate_backlog(Arc::new(admin), &query.topic, query.earliest_offset_policy).await
}

/// Counts the messages a topic currently retains without reading any of them.
pub async fn estimate_backlog<A: BrokerAdmin + 'static>(
    admin: Arc<A>,
    topic: &str,
    policy: EarliestOffsetPolicy,
) -> Result<GetTopicMessageCountQueryResponseInternal, PeekError> {
    if topic.is_empty() {
        return Err(PeekError::InvalidArgument(anyhow!("Topic can't be empty")));
    }

    let snapshot = snapshot_topic_offsets(admin.clone(), topic).await?;
    if snapshot.is_empty() {
        return Ok(GetTopicMessageCountQueryResponseInternal {
            message_count: 0,
            partitions: vec![],
        });
    }

    let earliest = match policy {
        EarliestOffsetPolicy::LowWatermark => snapshot
            .iter()
            .map(|s| (s.partition_id, Some(s.low_watermark)))
            .collect::<HashMap<_, _>>(),
        EarliestOffsetPolicy::TimestampResolved => {
            let partitions = snapshot.iter().map(|s| s.partition_id).collect();
            resolve_earliest_offsets(admin, topic, partitions).await?
        }
    };

    let partitions = snapshot
        .iter()
        .map(|s| PartitionBacklog {
            partition_id: s.partition_id,
            high_watermark: s.high_watermark,
            earliest_offset: earliest.get(&s.partition_id).copied().flatten(),
        })
        .collect::<Vec<_>>();

    let message_count: i64 = partitions.iter().map(PartitionBacklog::messages_count).sum();
    debug!(
        "Topic {} holds {} messages in {} partitions",
        topic,
        message_count,
        partitions.len()
    );

    Ok(GetTopicMessageCountQueryResponseInternal {
        message_count,
        partitions,
    })
}

async fn resolve_earliest_offsets<A: BrokerAdmin + 'static>(
    admin: Arc<A>,
    topic: &str,
    partitions: Vec<i32>,
) -> Result<HashMap<i32, Option<i64>>, PeekError> {
    let topic = topic.to_owned();
    let handle = tokio::task::spawn_blocking(move || {
        admin.offsets_for_timestamp(&topic, &partitions, EARLIEST_TIMESTAMP)
    });

    let resolved = handle
        .await
        .context("While joining handle")
        .map_err(PeekError::BrokerUnavailable)?
        .map_err(PeekError::BrokerUnavailable)?;

    Ok(resolved.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::testing::FakeAdmin;

    #[tokio::test]
    async fn sums_high_minus_resolved_earliest() {
        let admin = FakeAdmin::default()
            .with_partition(0, 0, 100)
            .with_partition(1, 0, 50)
            .with_earliest(0, Some(40))
            .with_earliest(1, Some(50));

        let response = estimate_backlog(
            Arc::new(admin),
            "orders",
            EarliestOffsetPolicy::TimestampResolved,
        )
        .await
        .unwrap();

        assert_eq!(response.message_count, 60);
        assert_eq!(response.partitions[0].messages_count(), 60);
        assert_eq!(response.partitions[1].messages_count(), 0);
    }

    #[tokio::test]
    async fn unresolved_partitions_count_as_empty() {
        let admin = FakeAdmin::default()
            .with_partition(0, 0, 100)
            .with_partition(1, 10, 30)
            .with_earliest(1, None);

        let response = estimate_backlog(
            Arc::new(admin),
            "orders",
            EarliestOffsetPolicy::TimestampResolved,
        )
        .await
        .unwrap();

        assert_eq!(response.message_count, 100);
        assert_eq!(response.partitions[1].earliest_offset, None);
    }

    #[tokio::test]
    async fn policies_diverge_after_retention() {
        let admin = Arc::new(
            FakeAdmin::default()
                .with_partition(0, 0, 100)
                .with_earliest(0, Some(70)),
        );

        let resolved =
            estimate_backlog(admin.clone(), "orders", EarliestOffsetPolicy::TimestampResolved)
                .await
                .unwrap();
        let low_watermark = estimate_backlog(admin, "orders", EarliestOffsetPolicy::LowWatermark)
            .await
            .unwrap();

        assert_eq!(resolved.message_count, 30);
        assert_eq!(low_watermark.message_count, 100);
    }

    #[tokio::test]
    async fn missing_topic_counts_zero() {
        let response = estimate_backlog(
            Arc::new(FakeAdmin::default()),
            "missing",
            EarliestOffsetPolicy::default(),
        )
        .await
        .unwrap();

        assert_eq!(response.message_count, 0);
        assert!(response.partitions.is_empty());
    }

    #[tokio::test]
    async fn broker_failure_is_unavailable() {
        let result = estimate_backlog(
            Arc::new(FakeAdmin::default().unreachable()),
            "orders",
            EarliestOffsetPolicy::default(),
        )
        .await;

        assert!(matches!(result, Err(PeekError::BrokerUnavailable(_))));
    }
}
