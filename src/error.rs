use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid direction ({x}, {y}): must be a unit axis-aligned vector")]
    InvalidDirection { x: i32, y: i32 },

    #[error("cannot shorten a snake with a single segment")]
    CannotShorten,

    #[error("invalid playground {width}x{height}: both dimensions must be positive")]
    InvalidPlayground { width: i32, height: i32 },
}
