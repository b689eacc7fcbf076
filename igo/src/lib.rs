pub mod config;
pub mod error;
pub mod game;
pub mod game_tree;
pub mod goban;
pub mod group;
pub mod resolver;
pub mod stone;
pub mod turn;

/// A board coordinate as `(x, y)`: column, then row.
pub type Point = (u8, u8);

pub use config::GameConfig;
pub use error::GoError;
pub use game::{Game, Stage};
pub use game_tree::{Captures, GameTree, MoveRecord, NodeId, TreeNode};
pub use goban::Goban;
pub use group::Group;
pub use resolver::{Placement, try_place};
pub use stone::{Cell, Stone};
pub use turn::Move;
