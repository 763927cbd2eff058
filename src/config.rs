use std::env;
use std::path::Path;

use anyhow::{bail, Result};
use serde::Deserialize;

/// Top-level application configuration loaded from file + environment.
///
/// The four messaging values are mandatory and normally come from the
/// environment variables `GATEWAY`, `BROKER`, `TENANT` and `NAMESPACE`; an
/// optional TOML file (path in `PROVISIONER_CONFIG`, default `config.toml`)
/// may supply them as well as the `server` and `logging` sections. The
/// environment always wins over the file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// host:port of the gRPC gateway reported back to clients.
    pub gateway: String,
    /// Service URL of the messaging cluster. Validated for presence only.
    pub broker: String,
    /// Tenant embedded in constructed topic names.
    pub tenant: String,
    /// Namespace within the tenant, embedded in constructed topic names.
    pub namespace: String,
    pub server: ServerConfig,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("PROVISIONER_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        if config_path.exists() {
            builder = builder.add_source(config::File::from(config_path.to_path_buf()));
        }

        builder = builder.add_source(config::Environment::default());

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;

        Ok(config)
    }

    /// Check the mandatory messaging values.
    ///
    /// Any absent or blank value is a fatal startup error; the diagnostics
    /// name the environment variable an operator has to set.
    pub fn validate(&self) -> Result<()> {
        if self.gateway.trim().is_empty() {
            bail!("GATEWAY must contain the host and port of the gRPC gateway endpoint");
        }
        if self.broker.trim().is_empty() {
            bail!("BROKER must contain the service URL of the messaging cluster");
        }
        if self.tenant.trim().is_empty() {
            bail!("TENANT must contain a tenant of the messaging cluster");
        }
        if self.namespace.trim().is_empty() {
            bail!("NAMESPACE must contain a namespace within the tenant");
        }
        // Topic names are '/'-delimited, so a separator inside either value
        // would silently change the topic's shape.
        if self.tenant.contains('/') {
            bail!("TENANT must not contain '/'");
        }
        if self.namespace.contains('/') {
            bail!("NAMESPACE must not contain '/'");
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> AppConfig {
        AppConfig {
            gateway: "localhost:6565".to_string(),
            broker: "pulsar://localhost:6650".to_string(),
            tenant: "public".to_string(),
            namespace: "default".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn load_reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
gateway = "localhost:6565"
broker = "pulsar://localhost:6650"
tenant = "public"
namespace = "default"

[server]
port = 9090

[logging]
level = "debug"
format = "text"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).expect("file configuration should load");
        assert_eq!(config.tenant, "public");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.level, "debug");
        assert!(matches!(config.logging.format, LogFormat::Text));
    }

    #[test]
    fn load_defaults_logging_level_to_info() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
gateway = "localhost:6565"
broker = "pulsar://localhost:6650"
tenant = "public"
namespace = "default"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn validate_accepts_complete_configuration() {
        complete().validate().expect("complete configuration is valid");
    }

    #[test]
    fn validate_rejects_separator_in_tenant() {
        let config = AppConfig {
            tenant: "public/extra".to_string(),
            ..complete()
        };
        assert!(config.validate().is_err());
    }
}
