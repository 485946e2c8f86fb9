mod api;
mod converters;

pub use api::*;
pub use converters::*;

pub mod proto {
    pub use peek_service_server::*;
    tonic::include_proto!("kafka_peek_api");

    pub(crate) const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("peek_service_descriptor");
}
