use crate::admin::BrokerAdmin;
use crate::connection_settings::ConnectionSettings;
use anyhow::{bail, Context};
use rdkafka::consumer::{BaseConsumer, Consumer};
use rdkafka::types::RDKafkaErrorCode;
use rdkafka::util::Timeout;
use rdkafka::{ClientConfig, Offset, TopicPartitionList};
use std::time::Duration;
use tracing::{debug, trace};

const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Group-less client used only for metadata and offset queries.
pub struct AdminWrapper {
    client: BaseConsumer,
}

impl AdminWrapper {
    pub fn create(connection_settings: &ConnectionSettings) -> Result<Self, anyhow::Error> {
        let client: BaseConsumer = ClientConfig::try_from(connection_settings)?
            .create()
            .context("While creating kafka admin client")?;

        Ok(Self { client })
    }
}

impl BrokerAdmin for AdminWrapper {
    fn partition_ids(&self, topic: &str) -> Result<Vec<i32>, anyhow::Error> {
        let metadata = self
            .client
            .fetch_metadata(Some(topic), Timeout::After(QUERY_TIMEOUT))
            .with_context(|| format!("While fetching topic '{}' metadata", topic))?;

        let Some(topic_metadata) = metadata.topics().iter().find(|t| t.name() == topic) else {
            debug!("Topic {} is absent from metadata", topic);
            return Ok(vec![]);
        };

        match topic_metadata.error() {
            None => {}
            Some(code) if RDKafkaErrorCode::from(code) == RDKafkaErrorCode::UnknownTopicOrPartition => {
                debug!("Topic {} wasn't found", topic);
                return Ok(vec![]);
            }
            Some(code) => bail!(
                "Broker returned error for topic '{}' metadata: {:?}",
                topic,
                RDKafkaErrorCode::from(code)
            ),
        }

        trace!(
            "Got data for topic. Name: {}, partitions: {}",
            topic_metadata.name(),
            topic_metadata.partitions().len()
        );

        Ok(topic_metadata.partitions().iter().map(|p| p.id()).collect())
    }

    fn watermarks(&self, topic: &str, partition: i32) -> Result<(i64, i64), anyhow::Error> {
        self.client
            .fetch_watermarks(topic, partition, Timeout::After(QUERY_TIMEOUT))
            .with_context(|| {
                format!(
                    "While fetching watermarks for topic {} and partition {}",
                    topic, partition
                )
            })
    }

    fn offsets_for_timestamp(
        &self,
        topic: &str,
        partitions: &[i32],
        timestamp: i64,
    ) -> Result<Vec<(i32, Option<i64>)>, anyhow::Error> {
        let mut tpl = TopicPartitionList::with_capacity(partitions.len());
        for partition in partitions {
            tpl.add_partition_offset(topic, *partition, Offset::Offset(timestamp))
                .with_context(|| format!("While adding partition {} to lookup", partition))?;
        }

        let resolved = self
            .client
            .offsets_for_times(tpl, Timeout::After(QUERY_TIMEOUT))
            .with_context(|| format!("While resolving offsets by timestamp for topic {}", topic))?;

        let offsets = resolved
            .elements_for_topic(topic)
            .iter()
            .map(|element| (element.partition(), resolved_offset(element.offset())))
            .collect();

        Ok(offsets)
    }
}

/// Offsets-for-times answers with a logical offset when nothing at or after
/// the timestamp is retained.
fn resolved_offset(offset: Offset) -> Option<i64> {
    match offset {
        Offset::Offset(offset) if offset >= 0 => Some(offset),
        _ => None,
    }
}
