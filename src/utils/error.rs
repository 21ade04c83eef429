use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Amount {amount} is not a multiple of the smallest denomination {unit}")]
    InvalidAmountError { amount: u32, unit: u32 },

    #[error("No handler left for remainder {remainder} (tail denomination {tail})")]
    UnhandledRemainderError { remainder: u32, tail: u32 },

    #[error("Unknown demo '{name}'. Available demos: {available}")]
    UnknownDemoError { name: String, available: String },

    #[error("Unsupported type: {kind}")]
    UnsupportedTypeError { kind: String },

    #[error("Access denied to {host}")]
    AccessDeniedError { host: String },
}

pub type Result<T> = std::result::Result<T, PatternError>;
