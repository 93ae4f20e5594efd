use thiserror::Error;

/// Rejected submissions. Neither variant changes session state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Cannot send an empty message")]
    EmptyInput,
    #[error("A response is already pending")]
    ResponsePending,
}

/// Failures of the response collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponderError {
    #[error("Response timed out after {0} ms")]
    Timeout(u64),
    #[error("Responder failed: {0}")]
    Failed(String),
}
