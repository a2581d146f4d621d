use thiserror::Error;

/// Convenient result alias for the satlookup library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection, DNS, TLS or timeout failure while talking to Space-Track.
    #[error("space-track request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Space-Track answered with a non-success status code.
    #[error("space-track responded with status {status}")]
    RemoteStatus { status: u16 },

    /// The response body could not be decoded into the expected shape.
    #[error("malformed space-track response: {message}")]
    Decode { message: String },

    /// A required credential variable is unset or empty.
    #[error("missing credential: environment variable {var} is not set")]
    MissingCredential { var: &'static str },

    /// Raised when a catalog identifier cannot be used in a detail query.
    #[error("invalid catalog identifier: '{value}'")]
    InvalidCatalogId { value: String },

    /// The select widget returned an index outside of the presented choices.
    #[error("selection {index} is out of range for {choices} choices")]
    InvalidSelection { index: usize, choices: usize },

    /// The operator cancelled an interactive prompt.
    #[error("prompt interrupted")]
    PromptInterrupted,

    /// Wrapper for IO errors (terminal and stdin access).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is one of the remote fetch failures
    /// (transport, non-success status or malformed body).
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::RemoteStatus { .. } | Error::Decode { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode {
            message: err.to_string(),
        }
    }
}
