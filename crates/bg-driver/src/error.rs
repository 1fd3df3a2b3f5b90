use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("invalid route: {0}")]
    InvalidRoute(String),

    #[error("route parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DriverResult<T> = Result<T, DriverError>;
