use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode value for key `{key}`: {message}")]
    Encode { key: String, message: String },

    #[error("failed to decode value for key `{key}`: {message}")]
    Decode { key: String, message: String },

    #[error("store document is corrupt: {0}")]
    Corrupt(String),

    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn decode(key: &str, message: impl Into<String>) -> Self {
        Self::Decode {
            key: key.to_string(),
            message: message.into(),
        }
    }

    pub fn encode(key: &str, message: impl Into<String>) -> Self {
        Self::Encode {
            key: key.to_string(),
            message: message.into(),
        }
    }
}
