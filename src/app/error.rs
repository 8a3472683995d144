use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl LibrisError {
    /// Collapse the error into the kind stored in section/search/detail state.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LibrisError::NotFound(_) => ErrorKind::NotFound,
            LibrisError::Validation(_) => ErrorKind::Validation,
            _ => ErrorKind::Transport,
        }
    }
}

pub type Result<T> = std::result::Result<T, LibrisError>;

/// Failure taxonomy kept in view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network failure, timeout, non-2xx status or unreadable payload
    Transport,
    /// The catalog reported the requested record as absent
    NotFound,
    /// Rejected before any request was made
    Validation,
}

impl ErrorKind {
    pub fn trending_message(self) -> &'static str {
        "Failed to fetch trending books"
    }

    pub fn search_message(self) -> &'static str {
        match self {
            ErrorKind::Validation => "Please enter a search term",
            _ => "Failed to search books. Please try again.",
        }
    }

    pub fn section_message(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "Nothing found for this section",
            _ => "Could not load this section",
        }
    }

    pub fn detail_message(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "Extended details are not available for this book",
            _ => "Failed to load extended details",
        }
    }
}
