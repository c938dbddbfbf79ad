use thiserror::Error;

/// Common result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Status reported for failures where no HTTP response was received.
pub const NO_RESPONSE_STATUS: u16 = 0;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (DNS, refused connection, timeout).
    #[error("{message}")]
    Transport { message: String },
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { message: String, status: u16 },
    /// A success response could not be decoded into the expected shape.
    #[error("decode error: {message}")]
    Decode { message: String },
    /// The request body could not be serialized; nothing was sent.
    #[error("failed to encode request body: {message}")]
    Encode { message: String },
}

impl ClientError {
    pub(crate) fn transport(source: impl std::fmt::Display) -> Self {
        Self::Transport {
            message: format!("Network error: {}", source),
        }
    }

    pub(crate) fn decode(source: impl std::fmt::Display) -> Self {
        Self::Decode {
            message: source.to_string(),
        }
    }

    pub(crate) fn encode(source: impl std::fmt::Display) -> Self {
        Self::Encode {
            message: source.to_string(),
        }
    }

    /// HTTP status of the failed response, or 0 when none was received.
    pub fn status(&self) -> u16 {
        match self {
            Self::Api { status, .. } => *status,
            Self::Transport { .. } | Self::Decode { .. } | Self::Encode { .. } => {
                NO_RESPONSE_STATUS
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message }
            | Self::Api { message, .. }
            | Self::Decode { message }
            | Self::Encode { message } => message,
        }
    }

    /// True when the server was never reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
