use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    OutOfBounds,
    CellOccupied,
    CellAlreadyEmpty,
    Suicide,
    KoViolation,
    AtRoot,
    GameOver,
    InvalidSize(u8),
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfBounds => write!(f, "coordinate out of bounds"),
            GoError::CellOccupied => write!(f, "point already occupied by a stone"),
            GoError::CellAlreadyEmpty => write!(f, "point already empty"),
            GoError::Suicide => write!(f, "cannot play suicide"),
            GoError::KoViolation => write!(f, "cannot retake ko immediately"),
            GoError::AtRoot => write!(f, "already at the beginning of the game"),
            GoError::GameOver => write!(f, "the game is over"),
            GoError::InvalidSize(size) => write!(f, "unsupported board size: {size}"),
        }
    }
}

impl std::error::Error for GoError {}
