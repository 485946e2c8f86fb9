use crate::consumer::CapturedMessage;
use std::cmp::Ordering;

/// Orders messages most recent first and keeps at most `limit` of them.
///
/// Timestamps decide when both sides carry one, and on equal timestamps the
/// higher offset wins. A message with a timestamp always ranks before one
/// without, rather than falling back to offsets whenever either side lacks a
/// timestamp; that fallback is not transitive and cannot back a sort. Offsets
/// are partition local, so this is a presentation order rather than a true
/// cross-partition timeline.
pub fn rank(mut messages: Vec<CapturedMessage>, limit: usize) -> Vec<CapturedMessage> {
    messages.sort_by(recency_order);
    messages.truncate(limit);
    messages
}

// Messages without a timestamp sort after timestamped ones so the order stays
// total; partition id breaks the last ties.
fn recency_order(a: &CapturedMessage, b: &CapturedMessage) -> Ordering {
    let by_timestamp = match (a.timestamp_millis, b.timestamp_millis) {
        (Some(a_ts), Some(b_ts)) => b_ts.cmp(&a_ts),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_timestamp
        .then_with(|| b.offset().cmp(&a.offset()))
        .then_with(|| a.partition().cmp(&b.partition()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::testing::message;

    fn positions(messages: &[CapturedMessage]) -> Vec<(i32, i64)> {
        messages.iter().map(|m| (m.partition(), m.offset())).collect()
    }

    fn mixed() -> Vec<CapturedMessage> {
        vec![
            message(0, 10, Some(1_000)),
            message(1, 3, Some(3_000)),
            message(2, 7, None),
            message(0, 11, Some(3_000)),
            message(1, 4, Some(2_000)),
            message(2, 8, None),
        ]
    }

    #[test]
    fn newest_timestamp_first_then_offset() {
        let ranked = rank(mixed(), 10);

        assert_eq!(
            positions(&ranked),
            vec![(0, 11), (1, 3), (1, 4), (0, 10), (2, 8), (2, 7)]
        );
    }

    #[test]
    fn truncates_to_limit() {
        assert_eq!(rank(mixed(), 4).len(), 4);
        assert_eq!(rank(mixed(), 100).len(), 6);
        assert!(rank(mixed(), 0).is_empty());
        assert!(rank(vec![], 5).is_empty());
    }

    #[test]
    fn ranking_is_idempotent() {
        for limit in 0..8 {
            let once = rank(mixed(), limit);
            let twice = rank(once.clone(), limit);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn order_does_not_depend_on_input_order() {
        let mut reversed = mixed();
        reversed.reverse();

        assert_eq!(rank(reversed, 6), rank(mixed(), 6));
    }

    #[test]
    fn kept_messages_are_unmodified() {
        let original = message(2, 105, Some(1_700_000_000_000));
        let ranked = rank(vec![message(0, 1, Some(1)), original.clone()], 1);

        assert_eq!(ranked, vec![original]);
        assert_eq!(ranked[0].payload.as_deref(), Some(&b"p2-o105"[..]));
        assert_eq!(ranked[0].key.as_deref(), Some(&b"key-105"[..]));
    }
}
