use bg_core::CoreError;
use bg_driver::DriverError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("a schedule needs at least one driver")]
    NoDrivers,

    #[error("shift configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("driver error: {0}")]
    Driver(#[from] DriverError),
}

pub type SimResult<T> = Result<T, SimError>;
