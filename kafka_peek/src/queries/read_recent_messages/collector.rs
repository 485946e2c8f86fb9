use crate::consumer::{CapturedMessage, RecordSource};
use crate::queries::read_recent_messages::PartitionReadPlan;
use anyhow::Context;
use std::time::Duration;
use tokio::select;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Default wall-clock budget of one collection.
pub const DEFAULT_COLLECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct CollectedMessages {
    pub messages: Vec<CapturedMessage>,
    pub timed_out: bool,
}

/// Positions `source` at the planned start offsets and collects records until
/// `requested_count` of them arrived or `timeout` elapsed.
///
/// Partitions without messages are never assigned. The source is stopped
/// exactly once, whichever way the collection ends; a failing stop is only
/// logged.
pub async fn collect_planned<S: RecordSource + ?Sized>(
    source: &S,
    topic: &str,
    plans: &[PartitionReadPlan],
    requested_count: usize,
    timeout: Duration,
) -> Result<CollectedMessages, anyhow::Error> {
    let positions = plans
        .iter()
        .filter(|plan| plan.has_messages)
        .map(PartitionReadPlan::start_position)
        .collect::<Vec<_>>();

    if positions.is_empty() || requested_count == 0 {
        debug!("Nothing to read from topic {}", topic);
        return Ok(CollectedMessages {
            messages: vec![],
            timed_out: false,
        });
    }

    let _stop_guard = StopGuard { source, topic };

    source
        .assign(topic, &positions)
        .context("While assigning planned offsets")?;

    debug!("Assigned {} partitions of topic {}", positions.len(), topic);

    let stop = CancellationToken::new();
    let timer = tokio::task::spawn({
        let stop = stop.clone();
        async move {
            select! {
                biased;
                _ = stop.cancelled() => false,
                _ = sleep(timeout) => {
                    stop.cancel();
                    true
                }
            }
        }
    });
    let _timer_guard = stop.clone().drop_guard();

    // Grows with what actually arrives; the requested count is caller input.
    let mut messages = Vec::new();
    loop {
        let record = select! {
            biased;
            _ = stop.cancelled() => break,
            record = source.next_record() => record,
        };

        messages.push(record.context("While collecting messages")?);

        if messages.len() >= requested_count {
            stop.cancel();
        }
    }

    let timed_out = timer.await.unwrap_or(false);
    if timed_out {
        info!(
            "Collection from topic {} timed out after {:?} with {} of {} messages",
            topic,
            timeout,
            messages.len(),
            requested_count
        );
    } else {
        debug!("Collected {} messages from topic {}", messages.len(), topic);
    }

    Ok(CollectedMessages {
        messages,
        timed_out,
    })
}

struct StopGuard<'a, S: RecordSource + ?Sized> {
    source: &'a S,
    topic: &'a str,
}

impl<S: RecordSource + ?Sized> Drop for StopGuard<'_, S> {
    fn drop(&mut self) {
        if let Err(e) = self.source.stop() {
            warn!(
                "Error while stopping consumer of topic {}: {:?}",
                self.topic, e
            );
        }
    }
}
