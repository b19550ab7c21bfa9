use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid must have at least one row and one column")]
    EmptyGrid,
    #[error("Symbol mask must have at least one sub-cell")]
    EmptyMask,
    #[error("Reveal threshold must lie in (0, 1]")]
    InvalidThreshold,
    #[error("At least one match must be required to win")]
    ZeroRequiredMatches,
    #[error("Required matches exceed the number of grid cells")]
    TooManyMatches,
    #[error("Card layout does not match the configured grid size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
