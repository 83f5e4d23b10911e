use thiserror::Error;

use super::catalog::PriceSlot;
use crate::error::AppError;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("unsupported checkout type `{0}`")]
    UnsupportedType(String),
    #[error("no price identifier configured for `{slot}` ({})", .slot.env_var())]
    MissingPrice { slot: PriceSlot },
    #[error("payment provider error: {0:#}")]
    Provider(#[from] anyhow::Error),
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::UnsupportedType(_) => AppError::BadRequest(err.to_string()),
            CheckoutError::MissingPrice { .. } => AppError::Configuration(err.to_string()),
            CheckoutError::Provider(_) => AppError::BadGateway(err.to_string()),
        }
    }
}
