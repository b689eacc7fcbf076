use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::GoError;
use crate::goban::Goban;
use crate::stone::Cell;

/// A connected component found by flood fill.
///
/// For stone groups `color` is the stones' color and `liberties` holds the
/// distinct empty points touching the group. For liberty regions `color` is
/// `Cell::Empty` and `liberties` stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Group {
    pub color: Cell,
    pub members: Vec<Point>,
    pub liberties: Vec<Point>,
}

impl Group {
    pub fn contains(&self, point: Point) -> bool {
        self.members.contains(&point)
    }

    pub fn has_liberty(&self, point: Point) -> bool {
        self.liberties.contains(&point)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_dead(&self) -> bool {
        !self.is_empty() && self.liberties.is_empty()
    }
}

impl Goban {
    /// Flood-fill the group of same-colored stones containing `point`.
    /// An empty or off-board point has no group.
    pub fn stone_group(&self, point: Point) -> Group {
        let mut claimed = vec![false; self.cells().len()];
        self.stone_group_from(point, &mut claimed)
    }

    /// Flood-fill the region of contiguous empty points containing `point`.
    /// An occupied or off-board point has no region.
    pub fn liberty_group(&self, point: Point) -> Group {
        let mut claimed = vec![false; self.cells().len()];
        self.liberty_group_from(point, &mut claimed)
    }

    /// Partition the empty points of the board into maximal regions.
    /// Regions come out in column-major order of their first point.
    pub fn liberty_groups(&self) -> Vec<Group> {
        let mut claimed = vec![false; self.cells().len()];
        let mut groups = Vec::new();

        for point in self.points() {
            if claimed[self.idx(point)] {
                continue;
            }
            let group = self.liberty_group_from(point, &mut claimed);
            if !group.is_empty() {
                groups.push(group);
            }
        }

        groups
    }

    /// Stone groups at and around `point`, each reported once.
    ///
    /// `point` itself is examined first, then its neighbors, so when `point`
    /// holds a stone its group is always at index 0. Empty seeds are skipped.
    pub fn groups_touching(&self, point: Point) -> Result<Vec<Group>, GoError> {
        if !self.on_board(point) {
            return Err(GoError::OutOfBounds);
        }

        let mut claimed = vec![false; self.cells().len()];
        let mut groups = Vec::with_capacity(5);

        let seeds = std::iter::once(point).chain(self.neighbors(point));
        for seed in seeds {
            if claimed[self.idx(seed)] {
                continue;
            }
            let group = self.stone_group_from(seed, &mut claimed);
            if !group.is_empty() {
                groups.push(group);
            }
        }

        Ok(groups)
    }

    /// Stone flood fill sharing a claimed-points bitset with the caller.
    fn stone_group_from(&self, point: Point, claimed: &mut [bool]) -> Group {
        let color = match self.cell_at(point) {
            Some(c) if !c.is_empty() => c,
            _ => return Group::default(),
        };

        let mut seen_liberty = vec![false; claimed.len()];
        let mut members = Vec::new();
        let mut liberties = Vec::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let pi = self.idx(p);
            if claimed[pi] {
                continue;
            }
            claimed[pi] = true;
            members.push(p);

            for n in self.neighbors(p) {
                let ni = self.idx(n);
                match self.cell_at(n) {
                    Some(c) if c == color => {
                        if !claimed[ni] {
                            stack.push(n);
                        }
                    }
                    Some(Cell::Empty) => {
                        if !seen_liberty[ni] {
                            seen_liberty[ni] = true;
                            liberties.push(n);
                        }
                    }
                    _ => {}
                }
            }
        }

        Group {
            color,
            members,
            liberties,
        }
    }

    /// Empty-region flood fill sharing a claimed-points bitset with the caller.
    fn liberty_group_from(&self, point: Point, claimed: &mut [bool]) -> Group {
        if self.cell_at(point) != Some(Cell::Empty) {
            return Group::default();
        }

        let mut members = Vec::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let pi = self.idx(p);
            if claimed[pi] {
                continue;
            }
            claimed[pi] = true;
            members.push(p);

            for n in self.neighbors(p) {
                if !claimed[self.idx(n)] && self.cell_at(n) == Some(Cell::Empty) {
                    stack.push(n);
                }
            }
        }

        Group {
            color: Cell::Empty,
            members,
            liberties: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goban::goban_from_layout;
    use crate::stone::Stone;

    fn quadrant_board() -> Goban {
        let mut goban = Goban::new(9);
        for x in 0..9 {
            for y in 0..9 {
                let stone = if (x < 5) == (y < 5) {
                    Stone::Black
                } else {
                    Stone::White
                };
                goban.place(stone, (x, y)).unwrap();
            }
        }
        goban
    }

    #[test]
    fn empty_point_has_no_group() {
        let goban = goban_from_layout(&["B+", "++"]);
        let group = goban.stone_group((1, 1));
        assert!(group.is_empty());
        assert!(group.liberties.is_empty());
    }

    #[test]
    fn off_board_point_has_no_group() {
        let goban = Goban::new(3);
        assert!(goban.stone_group((3, 0)).is_empty());
        assert!(goban.liberty_group((0, 3)).is_empty());
    }

    #[test]
    fn single_stone_liberties() {
        let goban = goban_from_layout(&["+++", "+B+", "+++"]);
        let group = goban.stone_group((1, 1));
        assert_eq!(group.color, Cell::Black);
        assert_eq!(group.members, vec![(1, 1)]);
        assert_eq!(group.liberties.len(), 4);
        assert!(!group.has_liberty((1, 1)));
    }

    #[test]
    fn shared_liberties_counted_once() {
        let goban = goban_from_layout(&["BB++", "B+++", "++++", "++++"]);
        let group = goban.stone_group((0, 0));
        assert_eq!(group.len(), 3);
        // (1,1) touches two members
        assert_eq!(group.liberties.len(), 3);
        assert!(group.has_liberty((1, 1)));
        assert!(group.has_liberty((2, 0)));
        assert!(group.has_liberty((0, 2)));
    }

    #[test]
    fn surrounded_group_has_no_liberties() {
        let goban = goban_from_layout(&["+WW+", "WBBW", "WBW+", "+W++"]);
        let group = goban.stone_group((1, 1));
        assert_eq!(group.len(), 3);
        assert!(group.is_dead());
    }

    #[test]
    fn group_in_corner_against_edge() {
        let goban = goban_from_layout(&["BBW+", "BBW+", "WW++", "++++"]);
        let group = goban.stone_group((1, 1));
        assert_eq!(group.len(), 4);
        assert!(group.liberties.is_empty());

        let white = goban.stone_group((2, 0));
        assert_eq!(white.len(), 2);
        assert_eq!(white.liberties.len(), 3);
        assert!(white.has_liberty((3, 0)));
        assert!(white.has_liberty((3, 1)));
        assert!(white.has_liberty((2, 2)));
    }

    #[test]
    fn groups_of_square_block() {
        let mut goban = Goban::new(9);
        for point in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            goban.place(Stone::Black, point).unwrap();
        }

        let groups = goban.groups_touching((0, 0)).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 4);
        assert_eq!(groups[0].liberties.len(), 4);
    }

    #[test]
    fn groups_of_quadrants() {
        let goban = quadrant_board();

        let groups = goban.groups_touching((4, 4)).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].color, Cell::Black);
        assert_eq!(groups[0].len(), 25);
        assert!(groups[0].contains((4, 4)));
    }

    #[test]
    fn groups_after_center_changes_color() {
        let mut goban = quadrant_board();
        goban.remove((4, 4)).unwrap();
        goban.place(Stone::White, (4, 4)).unwrap();

        let groups = goban.groups_touching((4, 4)).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].color, Cell::White);
        assert_eq!(groups[0].len(), 41);
        assert!(groups[0].contains((4, 4)));
        assert_eq!(groups[1].color, Cell::Black);
        assert_eq!(groups[1].len(), 24);
    }

    #[test]
    fn groups_of_surrounded_stone() {
        let mut goban = Goban::new(9);
        for point in [(4, 3), (4, 5), (3, 4), (5, 4)] {
            goban.place(Stone::Black, point).unwrap();
        }
        goban.place(Stone::White, (4, 4)).unwrap();

        let groups = goban.groups_touching((4, 4)).unwrap();
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0].color, Cell::White);
        assert_eq!(groups[0].members, vec![(4, 4)]);
        assert!(groups[0].is_dead());
        assert!(groups[1..].iter().all(|g| g.color == Cell::Black && g.len() == 1));
    }

    #[test]
    fn groups_touching_empty_point() {
        let goban = goban_from_layout(&["+B+", "W+B", "+++"]);
        let groups = goban.groups_touching((1, 1)).unwrap();
        // (1,0) and (2,1) are separate black stones
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| !g.contains((1, 1))));
    }

    #[test]
    fn groups_touching_off_board() {
        let goban = Goban::new(9);
        assert_eq!(goban.groups_touching((9, 9)), Err(GoError::OutOfBounds));
    }

    #[test]
    fn liberty_group_ignores_color() {
        let goban = goban_from_layout(&["++B", "+W+", "B++"]);
        let region = goban.liberty_group((0, 0));
        assert_eq!(region.color, Cell::Empty);
        assert_eq!(region.len(), 3);
        assert!(region.contains((1, 0)));
        assert!(region.contains((0, 1)));

        assert!(goban.liberty_group((1, 1)).is_empty());
    }

    #[test]
    fn liberty_groups_of_pockets() {
        let mut goban = Goban::new(9);
        for point in goban.points().collect::<Vec<_>>() {
            goban.place(Stone::Black, point).unwrap();
        }
        for (cx, cy) in [(1, 1), (1, 6), (6, 1), (6, 6)] {
            for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                goban.remove((cx + dx, cy + dy)).unwrap();
            }
        }

        let regions = goban.liberty_groups();
        assert_eq!(regions.len(), 4);
        assert!(regions.iter().all(|r| r.len() == 4));

        goban.remove((4, 4)).unwrap();
        let regions = goban.liberty_groups();
        assert_eq!(regions.len(), 5);

        let mut sizes: Vec<usize> = regions.iter().map(Group::len).collect();
        sizes.sort();
        assert_eq!(sizes, vec![1, 4, 4, 4, 4]);
    }

    #[test]
    fn liberty_groups_are_deterministic() {
        let goban = goban_from_layout(&["+B+", "BB+", "+B+"]);
        let first = goban.liberty_groups();
        let second = goban.liberty_groups();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].members, vec![(0, 0)]);
        assert_eq!(first[1].members, vec![(0, 2)]);
        assert_eq!(first[2].len(), 3);
    }

    #[test]
    fn liberty_groups_of_empty_board() {
        let goban = Goban::new(5);
        let regions = goban.liberty_groups();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 25);
    }
}
