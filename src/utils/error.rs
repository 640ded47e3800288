use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Unknown source: {key}")]
    UnknownSource { key: String },

    #[error("Unknown destination: {key}")]
    UnknownDestination { key: String },

    #[error("Malformed advertisement payload: {message}")]
    MalformedPayload { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AdError>;
