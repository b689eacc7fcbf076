use crate::Point;
use crate::error::GoError;
use crate::goban::Goban;
use crate::group::Group;
use crate::stone::{Cell, Stone};

/// Outcome of a committed placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Opponent groups removed by the move.
    pub captured: Vec<Group>,
    /// Point the opponent may not retake on the next move.
    pub ko: Option<Point>,
}

impl Placement {
    pub fn captured_count(&self) -> usize {
        self.captured.iter().map(Group::len).sum()
    }
}

/// Play `stone` at `point`, resolving captures in place.
///
/// Legality is decided in a fixed order: captures are detected first, then
/// suicide, then ko. Captured stones are only lifted once the move is known
/// to be legal; a rejected move leaves `goban` exactly as it was.
pub fn try_place(
    goban: &mut Goban,
    stone: Stone,
    point: Point,
    ko: Option<Point>,
) -> Result<Placement, GoError> {
    goban.place(stone, point)?;

    let groups = goban.groups_touching(point)?;
    let (placed, neighbors) = groups
        .split_first()
        .expect("placed stone always forms a group");

    let enemy = Cell::from(stone.opp());
    let captured: Vec<Group> = neighbors
        .iter()
        .filter(|g| g.color == enemy && g.liberties.is_empty())
        .cloned()
        .collect();
    let captured_count: usize = captured.iter().map(Group::len).sum();

    if captured_count == 0 && placed.liberties.is_empty() {
        revert(goban, point);
        return Err(GoError::Suicide);
    }

    let new_ko = if captured_count == 1 {
        if ko == Some(point) {
            revert(goban, point);
            return Err(GoError::KoViolation);
        }
        Some(captured[0].members[0])
    } else {
        None
    };

    for group in &captured {
        for &p in &group.members {
            goban
                .remove(p)
                .expect("captured stone must still be on the board");
        }
    }

    tracing::trace!(
        "{stone} at {point:?} captured {captured_count} stone(s), ko: {new_ko:?}"
    );

    Ok(Placement {
        captured,
        ko: new_ko,
    })
}

fn revert(goban: &mut Goban, point: Point) {
    goban
        .remove(point)
        .expect("stone placed by this move must be removable");
}
