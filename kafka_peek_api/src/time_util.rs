use chrono::{DateTime, Timelike, Utc};
use prost_types::Timestamp;

pub trait ProtoTimestampConvert {
    fn to_proto_timestamp(&self) -> Timestamp;
}

impl ProtoTimestampConvert for DateTime<Utc> {
    fn to_proto_timestamp(&self) -> Timestamp {
        Timestamp {
            nanos: self.nanosecond() as i32,
            seconds: self.timestamp(),
        }
    }
}
