use crate::app_config::AppConfig;
use crate::peek_api::proto;
use crate::peek_api::PeekService;
use anyhow::Context;
use std::net::SocketAddr;
use tonic::transport::Server;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn run_until_stopped(config: AppConfig) -> Result<(), anyhow::Error> {
    let address: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("While parsing socket address")?;
    info!("Listening {address}");

    let reflection = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(proto::FILE_DESCRIPTOR_SET)
        .build_v1alpha()
        .context("While building reflection service")?;

    let peek_service = PeekService::new(config.recent_messages_timeout());

    Server::builder()
        .layer(TraceLayer::new_for_grpc())
        .add_service(reflection)
        .add_service(proto::PeekServiceServer::new(peek_service))
        .serve(address)
        .await
        .context("While serving port")?;

    Ok(())
}
