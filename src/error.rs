use thiserror::Error;

/// Failure of a clearing-price selection.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("Invalid num_of_servers parameter")]
    InvalidArgument { capacity: i64 },
}

/// Rejection of a command-line token when strict parsing is requested.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid integer {token:?}: {reason}")]
pub struct ParseError {
    pub token: String,
    pub reason: String,
}
