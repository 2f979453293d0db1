//! Application layer errors

use thiserror::Error;
use crate::domain::entities::ColleagueId;

/// Top-level errors surfaced by the binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Routing error: {0}")]
    Mediator(#[from] MediatorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Routing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediatorError {
    #[error("Unregistered colleague: {0}")]
    UnregisteredColleague(ColleagueId),

    #[error("Colleague registered in both slots: {0}")]
    DuplicateColleague(ColleagueId),

    #[error("Mediator is no longer available")]
    Detached,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
