use anyhow::Context;
use config::Config;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Wall-clock budget of one recent messages read.
    #[serde(default = "default_recent_messages_timeout_ms")]
    pub recent_messages_timeout_ms: u64,
}

fn default_recent_messages_timeout_ms() -> u64 {
    5000
}

impl AppConfig {
    pub fn build() -> Result<Self, anyhow::Error> {
        let config = Config::builder()
            .add_source(config::File::with_name("appsettings"))
            .add_source(config::Environment::with_prefix("App").separator("__"))
            .build()
            .context("While building config")?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, anyhow::Error> {
        let deserialized_config: AppConfig = config
            .try_deserialize()
            .context("While deserializing config")?;

        info!("App config: {deserialized_config:?}");

        Ok(deserialized_config)
    }

    pub fn recent_messages_timeout(&self) -> Duration {
        Duration::from_millis(self.recent_messages_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    #[test]
    fn timeout_defaults_to_five_seconds() {
        let config = Config::builder()
            .add_source(File::from_str(
                "host = \"0.0.0.0\"\nport = 50002",
                FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let app_config = AppConfig::from_config(config).unwrap();

        assert_eq!(app_config.host, "0.0.0.0");
        assert_eq!(app_config.recent_messages_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn timeout_can_be_configured() {
        let config = Config::builder()
            .add_source(File::from_str(
                "host = \"127.0.0.1\"\nport = 1\nrecent_messages_timeout_ms = 750",
                FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let app_config = AppConfig::from_config(config).unwrap();

        assert_eq!(
            app_config.recent_messages_timeout(),
            Duration::from_millis(750)
        );
    }
}
