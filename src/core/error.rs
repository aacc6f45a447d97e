use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexfrontError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Rule violation: {0}")]
    Rule(#[from] crate::rules::RuleError),

    #[error("Integrity violation: {0}")]
    Integrity(#[from] crate::game::IntegrityError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HexfrontError>;
