use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // "mandaory" is part of the deployed wire contract; clients match on it.
    #[error("There are mandaory fields missing")]
    Validation,

    #[error("Email '{0}' already registered.")]
    Conflict(String),

    #[error("database error: {0:#?}")]
    Database(anyhow::Error),

    #[error("configuration error: {0:#?}")]
    Config(anyhow::Error),

    #[error("internal error: {0:#?}")]
    Internal(#[from] anyhow::Error),

    #[error("unauthorized")]
    UnAuthorized,
}

pub type Result<T> = std::result::Result<T, Error>;
