use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::config::GameConfig;
use crate::error::GoError;
use crate::game_tree::{Branches, Captures, GameTree, MoveRecord, NodeId};
use crate::goban::Goban;
use crate::resolver;
use crate::stone::{Cell, Stone};
use crate::turn::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    InProgress,
    /// The given color resigned.
    Resigned(Stone),
    PassedTwice,
}

impl Stage {
    pub fn is_over(&self) -> bool {
        !matches!(self, Stage::InProgress)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::InProgress => write!(f, "in progress"),
            Stage::Resigned(stone) => write!(f, "{stone} resigned"),
            Stage::PassedTwice => write!(f, "both players passed"),
        }
    }
}

/// A single game: the live position plus the tree of every line explored.
///
/// The board, turn, pass flag, ko point and captures always match the record
/// at `current`. All mutation goes through `place`, `pass`, `resign` and
/// `undo`.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    goban: Goban,
    turn: Stone,
    passed: bool,
    ko: Option<Point>,
    captures: Captures,
    stage: Stage,
    tree: GameTree,
    current: NodeId,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, GoError> {
        config.validate()?;

        let goban = Goban::new(config.size);
        let tree = GameTree::new(goban.duplicate());
        Ok(Game {
            config,
            goban,
            turn: Stone::Black,
            passed: false,
            ko: None,
            captures: Captures::new(),
            stage: Stage::InProgress,
            tree,
            current: GameTree::ROOT,
        })
    }

    pub fn with_size(size: u8) -> Result<Self, GoError> {
        Self::new(GameConfig::new(size)?)
    }

    // -- Accessors --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> u8 {
        self.goban.size()
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn cell_at(&self, point: Point) -> Option<Cell> {
        self.goban.cell_at(point)
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.goban.stone_at(point)
    }

    /// Color to play next.
    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn captures(&self) -> Captures {
        self.captures
    }

    pub fn stone_captures(&self, stone: Stone) -> u32 {
        self.captures.get(stone)
    }

    pub fn ko(&self) -> Option<Point> {
        self.ko
    }

    /// Whether the last move was a pass.
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_over(&self) -> bool {
        self.stage.is_over()
    }

    pub fn is_resigned(&self) -> bool {
        matches!(self.stage, Stage::Resigned(_))
    }

    pub fn tree(&self) -> &GameTree {
        &self.tree
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn current_record(&self) -> &MoveRecord {
        self.tree.record(self.current)
    }

    /// Number of moves played on the current line.
    pub fn move_number(&self) -> u32 {
        self.current_record().number
    }

    /// Every explored line, depth-first from the starting position.
    pub fn branches(&self) -> Branches<'_> {
        self.tree.branches(self.tree.root())
    }

    // -- Game actions --

    /// Play the current turn's stone at `point`.
    /// A rejected move leaves the game untouched.
    pub fn place(&mut self, point: Point) -> Result<Stage, GoError> {
        self.ensure_in_progress()?;

        let stone = self.turn;
        let placement = match resolver::try_place(&mut self.goban, stone, point, self.ko) {
            Ok(placement) => placement,
            Err(e) => {
                tracing::debug!("rejected {stone} at {point:?}: {e}");
                return Err(e);
            }
        };

        self.captures.add(stone, placement.captured_count() as u32);
        self.ko = placement.ko;
        self.passed = false;
        self.turn = stone.opp();
        self.advance(Move::Play(point), stone);

        Ok(self.stage)
    }

    /// Pass the current turn. A second consecutive pass ends the game.
    pub fn pass(&mut self) -> Result<Stage, GoError> {
        self.ensure_in_progress()?;

        let stone = self.turn;
        if self.passed {
            self.stage = Stage::PassedTwice;
            tracing::debug!("{stone} passed after a pass, game over");
        } else {
            tracing::debug!("{stone} passed");
        }

        self.passed = true;
        self.ko = None;
        self.turn = stone.opp();
        self.advance(Move::Pass, stone);

        Ok(self.stage)
    }

    /// Resign on behalf of the player to move.
    pub fn resign(&mut self) -> Result<Stage, GoError> {
        self.ensure_in_progress()?;

        let stone = self.turn;
        self.stage = Stage::Resigned(stone);
        tracing::debug!("{stone} resigned");
        self.advance(Move::Resign, stone);

        Ok(self.stage)
    }

    /// Step back to the previous position, keeping the abandoned line in the
    /// tree. Also steps back out of a finished game.
    pub fn undo(&mut self) -> Result<Stage, GoError> {
        let parent = self.tree.undo(self.current)?;
        self.restore(parent);
        tracing::debug!("undo to move {}", self.move_number());

        Ok(self.stage)
    }

    // -- Internal helpers --

    fn ensure_in_progress(&self) -> Result<(), GoError> {
        if self.stage.is_over() {
            return Err(GoError::GameOver);
        }
        Ok(())
    }

    /// Record the position reached by `mv` and make it current.
    fn advance(&mut self, mv: Move, mover: Stone) {
        let record = MoveRecord::new(mv, mover, self.goban.duplicate(), self.ko, self.captures);
        self.current = self.tree.append_child(self.current, record);
    }

    fn restore(&mut self, id: NodeId) {
        let record = self.tree.record(id);
        self.goban = record.board.duplicate();
        self.turn = record.next_turn();
        self.passed = record.is_pass();
        self.ko = record.ko;
        self.captures = record.captures;
        self.stage = self.stage_at(id);
        self.current = id;
    }

    fn stage_at(&self, id: NodeId) -> Stage {
        let record = self.tree.record(id);
        if record.is_resignation() {
            Stage::Resigned(record.mover)
        } else if record.is_pass()
            && self
                .tree
                .parent(id)
                .is_some_and(|p| self.tree.record(p).is_pass())
        {
            Stage::PassedTwice
        } else {
            Stage::InProgress
        }
    }
}
