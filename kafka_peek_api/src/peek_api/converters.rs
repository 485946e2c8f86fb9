mod get_topic_message_count;
mod get_topic_partition_offsets;
mod read_recent_messages;
mod shared;

pub use get_topic_message_count::*;
pub use get_topic_partition_offsets::*;
pub use read_recent_messages::*;
pub use shared::*;
