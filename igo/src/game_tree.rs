use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::GoError;
use crate::goban::Goban;
use crate::stone::Stone;
use crate::turn::Move;

pub type NodeId = usize;

/// Captured stones, indexed by the color that made the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    pub fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// Everything needed to restore the game to the position after a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub number: u32,
    /// `None` only for the root, which stands for the empty starting board.
    pub mv: Option<Move>,
    /// Color that made this move. The root records White so that Black
    /// moves first.
    pub mover: Stone,
    pub board: Goban,
    pub ko: Option<Point>,
    pub captures: Captures,
}

impl MoveRecord {
    pub fn root(board: Goban) -> Self {
        MoveRecord {
            number: 0,
            mv: None,
            mover: Stone::White,
            board,
            ko: None,
            captures: Captures::new(),
        }
    }

    /// A record for `mv`. The sequence number is assigned when the record
    /// is appended to a tree.
    pub fn new(
        mv: Move,
        mover: Stone,
        board: Goban,
        ko: Option<Point>,
        captures: Captures,
    ) -> Self {
        MoveRecord {
            number: 0,
            mv: Some(mv),
            mover,
            board,
            ko,
            captures,
        }
    }

    pub fn is_root(&self) -> bool {
        self.mv.is_none()
    }

    pub fn played_at(&self) -> Option<Point> {
        self.mv.and_then(|m| m.played_at())
    }

    pub fn is_pass(&self) -> bool {
        self.mv.is_some_and(|m| m.is_pass())
    }

    pub fn is_resignation(&self) -> bool {
        self.mv.is_some_and(|m| m.is_resign())
    }

    pub fn mover_was_black(&self) -> bool {
        self.mover.is_black()
    }

    /// Color to play after this move.
    pub fn next_turn(&self) -> Stone {
        self.mover.opp()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    pub record: MoveRecord,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub depth: usize,
}

/// Arena of move records. Node 0 is the root; branches are siblings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTree {
    nodes: Vec<TreeNode>,
}

impl GameTree {
    pub const ROOT: NodeId = 0;

    pub fn new(board: Goban) -> Self {
        Self {
            nodes: vec![TreeNode {
                record: MoveRecord::root(board),
                parent: None,
                children: Vec::new(),
                depth: 0,
            }],
        }
    }

    /// Add `record` as a child of `parent`.
    /// If a child with the same move already exists, returns its id instead of duplicating.
    pub fn append_child(&mut self, parent: NodeId, mut record: MoveRecord) -> NodeId {
        if let Some(&existing) = self.nodes[parent]
            .children
            .iter()
            .find(|&&id| self.nodes[id].record.mv == record.mv)
        {
            return existing;
        }

        record.number = self.nodes[parent].record.number + 1;
        let depth = self.nodes[parent].depth + 1;

        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            record,
            parent: Some(parent),
            children: Vec::new(),
            depth,
        });
        self.nodes[parent].children.push(id);

        id
    }

    /// The node before `current`. Does not modify the tree.
    pub fn undo(&self, current: NodeId) -> Result<NodeId, GoError> {
        self.nodes[current].parent.ok_or(GoError::AtRoot)
    }

    /// Depth-first, pre-order walk of the subtree under `from`, yielding
    /// each node with its depth relative to `from`.
    pub fn branches(&self, from: NodeId) -> Branches<'_> {
        Branches {
            tree: self,
            stack: vec![(from, 0)],
        }
    }

    /// Walk parent links from node to root, return path (root-first order).
    pub fn path_to(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(node_id);
        while let Some(id) = current {
            path.push(id);
            current = self.nodes[id].parent;
        }
        path.reverse();
        path
    }

    /// The moves leading from the root to the given node.
    pub fn moves_to(&self, node_id: NodeId) -> Vec<Move> {
        self.path_to(node_id)
            .iter()
            .filter_map(|&id| self.nodes[id].record.mv)
            .collect()
    }

    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id]
    }

    pub fn record(&self, id: NodeId) -> &MoveRecord {
        &self.nodes[id].record
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes[id].depth
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true: the root always exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Iterator returned by [`GameTree::branches`].
pub struct Branches<'a> {
    tree: &'a GameTree,
    stack: Vec<(NodeId, usize)>,
}

impl Iterator for Branches<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let children = self.tree.children(id);
        self.stack
            .extend(children.iter().rev().map(|&child| (child, depth + 1)));
        Some((id, depth))
    }
}
