use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssignError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssignError {
    #[error("Unknown assignment strategy: {0} (expected auto, brute-force or spatial)")]
    UnknownStrategy(String),
}
