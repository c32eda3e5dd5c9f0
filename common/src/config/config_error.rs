use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("Failed to read config file {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[display("Failed to write config file {path}: {source}")]
    Write { path: String, source: std::io::Error },
    #[display("Failed to deserialize config: {source}")]
    Parse { source: serde_yaml_ng::Error },
    #[display("Failed to serialize config: {source}")]
    Serialize { source: serde_yaml_ng::Error },
    #[display("Config validation error: {reason}")]
    Invalid { reason: String },
}
