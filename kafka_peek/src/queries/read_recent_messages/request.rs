use crate::connection_settings::ConnectionSettings;
use std::time::Duration;

#[derive(Debug)]
pub struct ReadRecentMessagesQueryInternal {
    pub connection_settings: ConnectionSettings,
    pub topic: String,
    pub max_messages: usize,
    pub timeout: Duration,
}
