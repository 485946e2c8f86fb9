mod security_protocol;

pub use security_protocol::*;
