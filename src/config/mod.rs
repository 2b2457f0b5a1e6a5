use std::path::Path;

use serde::Deserialize;

pub const ENV_PREFIX: &str = "CROSSBOOK";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogConfig,
    pub session: SessionConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub echo: EchoMode,
    pub banner: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            echo: EchoMode::Appended,
            banner: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EchoMode {
    /// Print only the line produced by the current order.
    Appended,
    /// Reprint the whole trade report after every accepted order.
    Full,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Settings {
    /// Defaults, then the file at `path` if given, then `CROSSBOOK__*`
    /// environment variables (e.g. `CROSSBOOK__SESSION__ECHO=full`).
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );
        Ok(builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_sources() {
        let settings: Settings = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.log.format, LogFormat::Compact);
        assert_eq!(settings.log.filter, "info");
        assert_eq!(settings.session.echo, EchoMode::Appended);
        assert!(settings.session.banner);
        assert!(!settings.metrics.enabled);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(
                "session:\n  echo: full\nlog:\n  format: json\n",
                config::FileFormat::Yaml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.session.echo, EchoMode::Full);
        assert!(settings.session.banner);
        assert_eq!(settings.log.format, LogFormat::Json);
        assert_eq!(settings.log.filter, "info");
    }
}
