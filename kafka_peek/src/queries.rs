pub mod get_topic_message_count;
pub mod get_topic_partitions_with_offsets;
pub mod read_recent_messages;

#[cfg(test)]
mod testing;
