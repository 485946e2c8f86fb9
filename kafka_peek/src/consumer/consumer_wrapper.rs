use crate::connection_settings::ConnectionSettings;
use crate::consumer::{CapturedMessage, PartitionOffset, RecordSource};
use anyhow::Context;
use async_trait::async_trait;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::{ClientConfig, Message, Offset, TopicPartitionList};
use tracing::trace;

pub struct ConsumerWrapper {
    consumer: StreamConsumer,
}

impl ConsumerWrapper {
    /// Consumer for a one-off read. Nothing is ever committed, so the group
    /// leaves no trace on the broker beyond its session.
    pub fn create_for_recent_read(
        connection_settings: &ConnectionSettings,
        group: &str,
    ) -> Result<Self, anyhow::Error> {
        // https://raw.githubusercontent.com/confluentinc/librdkafka/master/CONFIGURATION.md
        let mut config = ClientConfig::try_from(connection_settings)?;
        let consumer: StreamConsumer = config
            .set("group.id", group)
            .set("auto.offset.reset", "earliest")
            .set("enable.partition.eof", "false")
            .set("session.timeout.ms", "10000")
            .set("enable.auto.commit", "false")
            .set("enable.auto.offset.store", "false")
            .set("receive.message.max.bytes", "2147483647")
            .create()
            .context("While creating kafka StreamConsumer")?;

        Ok(Self { consumer })
    }
}

#[async_trait]
impl RecordSource for ConsumerWrapper {
    fn assign(&self, topic: &str, positions: &[PartitionOffset]) -> Result<(), anyhow::Error> {
        let mut tpl = TopicPartitionList::with_capacity(positions.len());
        for position in positions {
            tpl.add_partition_offset(
                topic,
                *position.partition(),
                Offset::Offset(*position.offset()),
            )
            .with_context(|| format!("While adding {:?} to assignment", position))?;
        }

        self.consumer
            .assign(&tpl)
            .with_context(|| format!("While assigning partitions of topic {}", topic))
    }

    async fn next_record(&self) -> Result<CapturedMessage, anyhow::Error> {
        let message = self
            .consumer
            .recv()
            .await
            .context("While receiving message")?;

        trace!(
            "New message. Partition: {}, offset: {}",
            message.partition(),
            message.offset(),
        );

        Ok(CapturedMessage::from_message(&message))
    }

    fn stop(&self) -> Result<(), anyhow::Error> {
        self.consumer
            .unassign()
            .context("While unassigning partitions")
    }
}
