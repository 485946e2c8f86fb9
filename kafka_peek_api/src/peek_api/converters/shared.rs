use crate::peek_api::proto::security_protocol_dto::{PlaintextProtocolDto, Protocol};
use crate::peek_api::proto::{
    message_format_dto, ConnectionSettingsDto, MessageFormatDto, SaslMechanism as ProtoSaslMechanism,
    SaslSettingsDto, SecurityProtocolDto, SslSettingsDto,
};
use anyhow::{bail, Context};
use kafka_peek::connection_settings::ConnectionSettings;
use kafka_peek::consumer::{SaslMechanism, SaslSettings, SecurityProtocol, SslSettings};
use kafka_peek::queries::read_recent_messages::Format;

pub fn proto_connection_setting_to_internal(
    model: Option<ConnectionSettingsDto>,
) -> Result<ConnectionSettings, anyhow::Error> {
    let Some(model) = model else {
        bail!("Connection settings can't be null")
    };
    if model.brokers.is_empty() {
        bail!("No brokers specified")
    }
    let security_protocol = proto_security_protocol_to_protocol(model.security_protocol)
        .context("While converting security protocol")?;

    Ok(ConnectionSettings {
        brokers: model.brokers,
        security_protocol,
    })
}

pub fn proto_security_protocol_to_protocol(
    model: Option<SecurityProtocolDto>,
) -> Result<SecurityProtocol, anyhow::Error> {
    let proto_protocol = model
        .and_then(|x| x.protocol)
        .unwrap_or(Protocol::Plaintext(PlaintextProtocolDto {}));

    let protocol = match proto_protocol {
        Protocol::Plaintext(_) => SecurityProtocol::Plaintext,
        Protocol::Ssl(ssl) => SecurityProtocol::Ssl(proto_ssl_to_ssl(ssl.ssl)),
        Protocol::SaslPlaintext(sasl) => SecurityProtocol::SaslPlaintext(proto_sasl_to_sasl(sasl.sasl)?),
        Protocol::SaslSsl(sasl_ssl) => SecurityProtocol::SaslSsl(
            proto_sasl_to_sasl(sasl_ssl.sasl)?,
            proto_ssl_to_ssl(sasl_ssl.ssl),
        ),
    };

    Ok(protocol)
}

fn proto_ssl_to_ssl(model: Option<SslSettingsDto>) -> SslSettings {
    let Some(model) = model else {
        return SslSettings::default();
    };

    SslSettings {
        ca_location: model.ca_location,
        certificate_location: model.certificate_location,
        key_location: model.key_location,
        key_password: model.key_password,
    }
}

fn proto_sasl_to_sasl(model: Option<SaslSettingsDto>) -> Result<SaslSettings, anyhow::Error> {
    let Some(model) = model else {
        bail!("Sasl settings can't be null")
    };
    if model.username.is_empty() {
        bail!("Sasl username can't be empty")
    }

    let mechanism = match model.mechanism() {
        ProtoSaslMechanism::Plain => SaslMechanism::Plain,
        ProtoSaslMechanism::ScramSha256 => SaslMechanism::ScramSha256,
        ProtoSaslMechanism::ScramSha512 => SaslMechanism::ScramSha512,
        ProtoSaslMechanism::Gssapi => SaslMechanism::Gssapi,
        ProtoSaslMechanism::Oauthbearer => SaslMechanism::OAuthBearer,
    };

    Ok(SaslSettings {
        mechanism,
        username: model.username,
        password: model.password,
    })
}

pub fn proto_format_to_format(model: Option<MessageFormatDto>) -> Option<Format> {
    let format = match model?.format? {
        message_format_dto::Format::StringFormat(_) => Format::String,
        message_format_dto::Format::HexFormat(_) => Format::Hex,
        message_format_dto::Format::Base64Format(_) => Format::Base64,
    };

    Some(format)
}
