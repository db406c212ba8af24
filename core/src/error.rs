use thiserror::Error;

/// Main error type for apiconn
#[derive(Debug, Clone, Error)]
pub enum ConnectorError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`ConnectorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The HTTP exchange itself failed or was rejected by the server
    Transport,
    /// The exchange succeeded but the payload could not be used
    Other,
    /// Connector settings were rejected before any request was made
    Config,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Transport => "transport",
            ErrorKind::Other => "other",
            ErrorKind::Config => "config",
        }
    }
}

impl ConnectorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConnectorError::Network(_) | ConnectorError::Status { .. } => ErrorKind::Transport,
            ConnectorError::Parse(_) => ErrorKind::Other,
            ConnectorError::Config(_) => ErrorKind::Config,
        }
    }

    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ConnectorError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using ConnectorError
pub type Result<T> = std::result::Result<T, ConnectorError>;
