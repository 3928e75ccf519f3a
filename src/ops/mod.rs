// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

//! Mutation operations for boards.
//!
//! Operations are applied in batches with optimistic concurrency (revision
//! checks) and produce a minimal delta the UI can use to refresh derived
//! state. A failed batch leaves the board untouched; a batch that turns out
//! to be a no-op (stale ids, identical reorder) emits no delta and no
//! revision bump.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::model::{
    Board, CategoryId, CategoryNode, CategoryTemplate, Clue, ClueDraft, ClueId, EdgeId, Position,
    RelationEdge,
};
use crate::model::stroke_color_for;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Graph(GraphOp),
    Clue(ClueOp),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GraphOp {
    AddCategory {
        category_id: CategoryId,
        position: Position,
        template: CategoryTemplate,
    },
    RemoveCategory {
        category_id: CategoryId,
    },
    Connect {
        edge_id: EdgeId,
        source_id: CategoryId,
        target_id: CategoryId,
        source_handle: Option<String>,
        target_handle: Option<String>,
        /// True when the drag started on a target-type handle; endpoints
        /// arrive reversed and are normalized before anything else.
        started_from_target: bool,
    },
    RemoveEdge {
        edge_id: EdgeId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClueOp {
    Add {
        clue_id: ClueId,
        category_id: CategoryId,
        draft: ClueDraft,
    },
    Update {
        category_id: CategoryId,
        clue_id: ClueId,
        draft: ClueDraft,
    },
    Remove {
        clue_id: ClueId,
    },
    Reorder {
        category_id: CategoryId,
        ordered_ids: Vec<ClueId>,
    },
    Move {
        clue_id: ClueId,
        from_category_id: CategoryId,
        to_category_id: CategoryId,
    },
}

/// A stable reference to one board object, used in deltas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoardRef {
    Category(CategoryId),
    Clue(ClueId),
    Edge(EdgeId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

/// Minimal delta describing which objects changed as the result of applying
/// ops.
///
/// This is intentionally coarse: it reports only added/removed/updated
/// `BoardRef`s. Reorders report the containing category as updated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<BoardRef>,
    pub removed: Vec<BoardRef>,
    pub updated: Vec<BoardRef>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<BoardRef>,
    removed: HashSet<BoardRef>,
    updated: HashSet<BoardRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, board_ref: BoardRef) {
        self.removed.remove(&board_ref);
        self.updated.remove(&board_ref);
        self.added.insert(board_ref);
    }

    fn record_removed(&mut self, board_ref: BoardRef) {
        self.added.remove(&board_ref);
        self.updated.remove(&board_ref);
        self.removed.insert(board_ref);
    }

    fn record_updated(&mut self, board_ref: BoardRef) {
        if self.added.contains(&board_ref) || self.removed.contains(&board_ref) {
            return;
        }
        self.updated.insert(board_ref);
    }

    fn finish(self) -> Delta {
        let mut added = self.added.into_iter().collect::<Vec<_>>();
        let mut removed = self.removed.into_iter().collect::<Vec<_>>();
        let mut updated = self.updated.into_iter().collect::<Vec<_>>();

        added.sort();
        removed.sort();
        updated.sort();

        Delta {
            added,
            removed,
            updated,
        }
    }
}

/// Applies a batch of ops against the board.
///
/// `base_rev` must match the board's current revision. On any error the
/// board is left exactly as it was; mutation is committed only when the whole
/// batch succeeds. The revision is bumped only when the resulting delta is
/// non-empty, so idempotent no-ops never trigger update notifications.
pub fn apply_ops(
    board: &mut Board,
    base_rev: u64,
    ops: &[Op],
    now: DateTime<Utc>,
) -> Result<ApplyResult, ApplyError> {
    let current_rev = board.rev();
    if base_rev != current_rev {
        return Err(ApplyError::Conflict {
            base_rev,
            current_rev,
        });
    }

    if ops.is_empty() {
        return Ok(ApplyResult {
            new_rev: current_rev,
            applied: 0,
            delta: Delta::default(),
        });
    }

    let mut scratch = board.clone();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        match op {
            Op::Graph(graph_op) => apply_graph_op(&mut scratch, graph_op, &mut delta)?,
            Op::Clue(clue_op) => apply_clue_op(&mut scratch, clue_op, now, &mut delta)?,
        }
    }

    let delta = delta.finish();
    if delta.is_empty() {
        return Ok(ApplyResult {
            new_rev: current_rev,
            applied: ops.len(),
            delta,
        });
    }

    scratch.bump_rev();
    let new_rev = scratch.rev();
    *board = scratch;

    Ok(ApplyResult {
        new_rev,
        applied: ops.len(),
        delta,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplyError {
    Conflict {
        base_rev: u64,
        current_rev: u64,
    },
    AlreadyExists {
        object: BoardRef,
    },
    /// The two categories already share an edge in either direction. This is
    /// the one condition surfaced to the user (duplicate-connection dialog).
    DuplicateEdge {
        source_id: CategoryId,
        target_id: CategoryId,
        existing_edge_id: EdgeId,
    },
    EmptyClueTitle {
        category_id: CategoryId,
    },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict {
                base_rev,
                current_rev,
            } => write!(
                f,
                "stale base_rev (base_rev={base_rev}, current_rev={current_rev})"
            ),
            Self::AlreadyExists { object } => {
                write!(f, "object already exists ({object:?})")
            }
            Self::DuplicateEdge {
                source_id,
                target_id,
                existing_edge_id,
            } => write!(
                f,
                "categories {source_id} and {target_id} are already connected (edge {existing_edge_id})"
            ),
            Self::EmptyClueTitle { category_id } => {
                write!(f, "clue title must not be empty (category {category_id})")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

// Extracted op-application implementation for graph/clue mutations.
include!("ops_impl.rs");
