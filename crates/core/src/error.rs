use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("not enough players: {found} (need at least {min})")]
    NotEnoughPlayers { found: usize, min: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("draw and discard piles are both empty")]
    DeckExhausted,
    #[error("game is already over")]
    GameOver,
    #[error("card count mismatch: expected {expected}, found {found}")]
    CardCountMismatch { expected: usize, found: usize },
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown card token: {0:?}")]
pub struct ParseCardError(pub String);

/// Failure reported by an event sink. Not recoverable by the engine.
#[derive(Debug, Error)]
#[error("event sink error: {0}")]
pub struct SinkError(pub String);

impl From<std::io::Error> for SinkError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

/// The player input source went away (for example stdin closed).
#[derive(Debug, Error)]
#[error("input error: {0}")]
pub struct InputError(pub String);

impl From<std::io::Error> for InputError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}
