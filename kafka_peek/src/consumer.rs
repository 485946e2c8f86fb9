mod captured_message;
mod consumer_wrapper;
mod partition_offset;
mod record_source;
mod settings;

pub use captured_message::*;
pub use consumer_wrapper::*;
pub use partition_offset::*;
pub use record_source::*;
pub use settings::*;
