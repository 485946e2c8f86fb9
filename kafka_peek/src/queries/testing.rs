use crate::admin::BrokerAdmin;
use crate::consumer::{CapturedMessage, PartitionOffset, RecordSource};
use anyhow::{anyhow, bail};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn message(partition: i32, offset: i64, timestamp_millis: Option<i64>) -> CapturedMessage {
    CapturedMessage {
        partition_offset: PartitionOffset::new(partition, offset),
        timestamp_millis,
        key: Some(Bytes::from(format!("key-{}", offset))),
        payload: Some(Bytes::from(format!("p{}-o{}", partition, offset))),
    }
}

#[derive(Default)]
pub struct FakeAdmin {
    partitions: Vec<(i32, i64, i64)>,
    earliest: HashMap<i32, Option<i64>>,
    fail_metadata: bool,
    fail_watermarks: bool,
}

impl FakeAdmin {
    pub fn with_partition(mut self, partition: i32, low: i64, high: i64) -> Self {
        self.partitions.push((partition, low, high));
        self
    }

    pub fn with_earliest(mut self, partition: i32, earliest: Option<i64>) -> Self {
        self.earliest.insert(partition, earliest);
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.fail_metadata = true;
        self
    }

    pub fn failing_watermarks(mut self) -> Self {
        self.fail_watermarks = true;
        self
    }
}

impl BrokerAdmin for FakeAdmin {
    fn partition_ids(&self, _topic: &str) -> Result<Vec<i32>, anyhow::Error> {
        if self.fail_metadata {
            bail!("Broker transport failure")
        }
        Ok(self.partitions.iter().map(|(id, _, _)| *id).collect())
    }

    fn watermarks(&self, _topic: &str, partition: i32) -> Result<(i64, i64), anyhow::Error> {
        if self.fail_watermarks {
            bail!("Watermarks request timed out")
        }
        self.partitions
            .iter()
            .find(|(id, _, _)| *id == partition)
            .map(|(_, low, high)| (*low, *high))
            .ok_or_else(|| anyhow!("Unknown partition {}", partition))
    }

    fn offsets_for_timestamp(
        &self,
        _topic: &str,
        partitions: &[i32],
        _timestamp: i64,
    ) -> Result<Vec<(i32, Option<i64>)>, anyhow::Error> {
        let resolved = partitions
            .iter()
            .map(|partition| {
                let configured = self.earliest.get(partition).copied();
                let fallback = self
                    .partitions
                    .iter()
                    .find(|(id, _, _)| id == partition)
                    .and_then(|(_, low, high)| (high > low).then_some(*low));
                (*partition, configured.unwrap_or(fallback))
            })
            .collect();
        Ok(resolved)
    }
}

/// Serves records from in-memory partition logs, starting at the assigned
/// offsets and interleaving partitions round robin. Once drained it either
/// blocks forever like an idle consumer or fails.
#[derive(Default)]
pub struct FakeRecordSource {
    logs: BTreeMap<i32, Vec<CapturedMessage>>,
    queue: Mutex<VecDeque<CapturedMessage>>,
    assigned: Mutex<Vec<PartitionOffset>>,
    reads: AtomicUsize,
    stops: AtomicUsize,
    fail_assign: bool,
    fail_when_drained: bool,
    fail_stop: bool,
}

impl FakeRecordSource {
    pub fn with_log(mut self, partition: i32, records: Vec<CapturedMessage>) -> Self {
        self.logs.insert(partition, records);
        self
    }

    /// A partition holding offsets `low..high` with timestamps equal to
    /// `base_timestamp + offset`.
    pub fn with_range(self, partition: i32, low: i64, high: i64, base_timestamp: i64) -> Self {
        let records = (low..high)
            .map(|offset| message(partition, offset, Some(base_timestamp + offset)))
            .collect();
        self.with_log(partition, records)
    }

    pub fn failing_assign(mut self) -> Self {
        self.fail_assign = true;
        self
    }

    pub fn failing_when_drained(mut self) -> Self {
        self.fail_when_drained = true;
        self
    }

    pub fn failing_stop(mut self) -> Self {
        self.fail_stop = true;
        self
    }

    pub fn assigned(&self) -> Vec<PartitionOffset> {
        self.assigned.lock().unwrap().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordSource for FakeRecordSource {
    fn assign(&self, _topic: &str, positions: &[PartitionOffset]) -> Result<(), anyhow::Error> {
        if self.fail_assign {
            bail!("Broker transport failure")
        }

        let mut per_partition = positions
            .iter()
            .map(|position| {
                self.logs
                    .get(position.partition())
                    .map(|log| {
                        log.iter()
                            .filter(|m| m.offset() >= *position.offset())
                            .cloned()
                            .collect::<VecDeque<_>>()
                    })
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>();

        let mut queue = self.queue.lock().unwrap();
        while per_partition.iter().any(|records| !records.is_empty()) {
            for records in per_partition.iter_mut() {
                if let Some(record) = records.pop_front() {
                    queue.push_back(record);
                }
            }
        }

        self.assigned.lock().unwrap().extend_from_slice(positions);
        Ok(())
    }

    async fn next_record(&self) -> Result<CapturedMessage, anyhow::Error> {
        let next = self.queue.lock().unwrap().pop_front();
        match next {
            Some(record) => {
                self.reads.fetch_add(1, Ordering::SeqCst);
                Ok(record)
            }
            None if self.fail_when_drained => Err(anyhow!("Broker transport failure")),
            None => std::future::pending().await,
        }
    }

    fn stop(&self) -> Result<(), anyhow::Error> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        if self.fail_stop {
            bail!("Unassign failed")
        }
        Ok(())
    }
}

/// Lets a test keep a handle on the source after handing it to a query.
pub struct SharedSource(pub Arc<FakeRecordSource>);

#[async_trait]
impl RecordSource for SharedSource {
    fn assign(&self, topic: &str, positions: &[PartitionOffset]) -> Result<(), anyhow::Error> {
        self.0.assign(topic, positions)
    }

    async fn next_record(&self) -> Result<CapturedMessage, anyhow::Error> {
        self.0.next_record().await
    }

    fn stop(&self) -> Result<(), anyhow::Error> {
        self.0.stop()
    }
}
