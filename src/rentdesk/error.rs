use crate::model::{CarKey, CustomerKey};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Car not found: {0}")]
    UnknownCar(CarKey),

    #[error("Customer not found: {0}")]
    UnknownCustomer(CustomerKey),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DeskError>;
