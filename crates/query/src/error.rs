use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Unparseable command; carries the reason for debug logs only
    #[error("INVALID COMMAND, type help to see all available commands")]
    InvalidCommand(String),
}

impl QueryError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidCommand(reason.into())
    }
}
