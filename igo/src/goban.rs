use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::GoError;
use crate::stone::{Cell, Stone};

/// A square Go board stored as a flat row-major array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goban {
    size: u8,
    cells: Vec<Cell>,
}

impl Goban {
    /// Create an empty board of `size × size` points.
    pub fn new(size: u8) -> Self {
        Goban {
            size,
            cells: vec![Cell::Empty; size as usize * size as usize],
        }
    }

    /// Create a goban from an existing matrix of rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let size = rows.len();

        assert!(
            size <= u8::MAX as usize && rows.iter().all(|row| row.len() == size),
            "malformed board matrix"
        );

        Goban {
            size: size as u8,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `point`, or `None` if the point is off the board.
    pub fn cell_at(&self, point: Point) -> Option<Cell> {
        self.on_board(point).then(|| self.cells[self.idx(point)])
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.cell_at(point).and_then(Cell::stone)
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        x < self.size && y < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    // -- Mutation --

    /// Put a stone on an empty point. The board is untouched on error.
    pub fn place(&mut self, stone: Stone, point: Point) -> Result<(), GoError> {
        if !self.on_board(point) {
            return Err(GoError::OutOfBounds);
        }

        let i = self.idx(point);
        if !self.cells[i].is_empty() {
            return Err(GoError::CellOccupied);
        }

        self.cells[i] = stone.into();
        Ok(())
    }

    /// Lift the stone at `point`. The board is untouched on error.
    pub fn remove(&mut self, point: Point) -> Result<(), GoError> {
        if !self.on_board(point) {
            return Err(GoError::OutOfBounds);
        }

        let i = self.idx(point);
        if self.cells[i].is_empty() {
            return Err(GoError::CellAlreadyEmpty);
        }

        self.cells[i] = Cell::Empty;
        Ok(())
    }

    /// Independent deep copy, used for history snapshots.
    pub fn duplicate(&self) -> Goban {
        self.clone()
    }

    // -- Geometry --

    /// The 4-connected neighbors of `point` that are on the board.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if x > 0 {
            result.push((x - 1, y));
        }
        if x + 1 < self.size {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y + 1 < self.size {
            result.push((x, y + 1));
        }
        result
    }

    /// Every point on the board in column-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size).flat_map(move |x| (0..self.size).map(move |y| (x, y)))
    }

    #[inline]
    pub(crate) fn idx(&self, (x, y): Point) -> usize {
        y as usize * self.size as usize + x as usize
    }
}

/// Test helper: build a goban from an ASCII layout. 'B' = Black, 'W' = White, '+' = Empty.
#[cfg(test)]
pub(crate) fn goban_from_layout(layout: &[&str]) -> Goban {
    let rows = layout
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    'B' => Cell::Black,
                    'W' => Cell::White,
                    _ => Cell::Empty,
                })
                .collect()
        })
        .collect();
    Goban::from_rows(rows)
}
