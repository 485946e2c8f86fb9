use crate::consumer::{SaslSettings, SecurityProtocol, SslSettings};
use anyhow::bail;
use rdkafka::ClientConfig;

#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub brokers: Vec<String>,
    pub security_protocol: SecurityProtocol,
}

impl TryFrom<&ConnectionSettings> for ClientConfig {
    type Error = anyhow::Error;

    fn try_from(value: &ConnectionSettings) -> Result<Self, Self::Error> {
        if value.brokers.iter().all(|b| b.trim().is_empty()) {
            bail!("No brokers specified")
        }

        let mut config = ClientConfig::new();

        let brokers_string = value.brokers.join(",");
        config
            .set("bootstrap.servers", brokers_string)
            .set("security.protocol", value.security_protocol.to_string());

        match &value.security_protocol {
            SecurityProtocol::Plaintext => {}
            SecurityProtocol::Ssl(ssl) => apply_ssl(&mut config, ssl),
            SecurityProtocol::SaslPlaintext(sasl) => apply_sasl(&mut config, sasl),
            SecurityProtocol::SaslSsl(sasl, ssl) => {
                apply_sasl(&mut config, sasl);
                apply_ssl(&mut config, ssl);
            }
        }

        if let Ok(value) = std::env::var("RD_KAFKA_DEBUG") {
            config.set("debug", value);
        }

        Ok(config)
    }
}

fn apply_ssl(config: &mut ClientConfig, ssl: &SslSettings) {
    // https://raw.githubusercontent.com/confluentinc/librdkafka/master/CONFIGURATION.md
    let optional = [
        ("ssl.ca.location", &ssl.ca_location),
        ("ssl.certificate.location", &ssl.certificate_location),
        ("ssl.key.location", &ssl.key_location),
        ("ssl.key.password", &ssl.key_password),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            config.set(key, value);
        }
    }
}

fn apply_sasl(config: &mut ClientConfig, sasl: &SaslSettings) {
    config
        .set("sasl.mechanism", sasl.mechanism.to_string())
        .set("sasl.username", &sasl.username);

    if let Some(password) = &sasl.password {
        config.set("sasl.password", password);
    }
}
