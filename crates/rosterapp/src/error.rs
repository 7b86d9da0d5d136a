use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("ID already exists: {0}")]
    DuplicateId(String),

    #[error("ID not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
