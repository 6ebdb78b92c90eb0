use thiserror::Error;

use crate::providers::ProviderError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
