use crate::consumer::CapturedMessage;

#[derive(Debug)]
pub struct ReadRecentMessagesQueryResponseInternal {
    /// Most recent first, at most `max_messages` long.
    pub messages: Vec<CapturedMessage>,
    pub partitions_count: usize,
    pub timed_out: bool,
}
