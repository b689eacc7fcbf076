use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;

/// What a player did on their turn.
///
/// Equality on `Move` is the identity used to merge repeated moves in the
/// game tree: same point (or none), same pass flag, same resignation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play(Point),
    Pass,
    Resign,
}

impl Move {
    pub fn played_at(&self) -> Option<Point> {
        match self {
            Move::Play(point) => Some(*point),
            _ => None,
        }
    }

    pub fn is_play(&self) -> bool {
        matches!(self, Move::Play(_))
    }

    pub fn is_pass(&self) -> bool {
        *self == Move::Pass
    }

    pub fn is_resign(&self) -> bool {
        *self == Move::Resign
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play((x, y)) => write!(f, "{x},{y}"),
            Move::Pass => write!(f, "pass"),
            Move::Resign => write!(f, "resign"),
        }
    }
}
