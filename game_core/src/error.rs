use thiserror::Error;

/// Errors raised while building the game. The simulation itself never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

pub(crate) fn invalid(msg: impl Into<String>) -> GameError {
    GameError::InvalidConfiguration(msg.into())
}
