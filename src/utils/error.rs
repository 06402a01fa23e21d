use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Name must not be null or empty")]
    InvalidName,

    #[error("{message}")]
    NotFound { message: String },
}

pub type Result<T> = std::result::Result<T, LookupError>;
