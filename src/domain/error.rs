use thiserror::Error;

/// Input rejected before anything is sent over the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a query or job description")]
    EmptyQuery,

    #[error("Please provide a more detailed description (at least {min} characters)")]
    TooShort { min: usize, actual: usize },

    #[error("The number of results must be a positive integer")]
    InvalidTopK,

    #[error("Please provide at least one query")]
    EmptyBatch,

    #[error("Query {position} in the batch is blank")]
    BlankBatchQuery { position: usize },

    #[error("Too many queries in one batch ({actual}, maximum {max})")]
    BatchTooLarge { max: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP error! status: {status}{}", detail_suffix(.detail))]
    Http { status: u16, detail: Option<String> },

    #[error("{0}")]
    Transport(String),

    #[error("A request is already in progress")]
    Busy,
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}

impl DomainError {
    pub fn http(status: u16, detail: Option<String>) -> Self {
        Self::Http { status, detail }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }

    /// Status code of a non-success response, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
