// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

use super::category::CategoryNode;
use super::clue::Clue;
use super::edge::RelationEdge;
use super::ids::{CategoryId, ClueId, EdgeId};

/// The top-level container the canvas renders from: all category nodes and
/// the relationship edges between them.
///
/// Nodes and edges keep insertion order; that order is what snapshots
/// persist. The revision counter changes only through [`crate::ops::apply_ops`]
/// and only when a batch actually mutates something.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    nodes: Vec<CategoryNode>,
    edges: Vec<RelationEdge>,
    rev: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(nodes: Vec<CategoryNode>, edges: Vec<RelationEdge>) -> Self {
        Self {
            nodes,
            edges,
            rev: 0,
        }
    }

    pub fn nodes(&self) -> &[CategoryNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut Vec<CategoryNode> {
        &mut self.nodes
    }

    pub fn edges(&self) -> &[RelationEdge] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut Vec<RelationEdge> {
        &mut self.edges
    }

    pub fn node(&self, category_id: &CategoryId) -> Option<&CategoryNode> {
        self.nodes
            .iter()
            .find(|node| node.category_id() == category_id)
    }

    pub fn node_mut(&mut self, category_id: &CategoryId) -> Option<&mut CategoryNode> {
        self.nodes
            .iter_mut()
            .find(|node| node.category_id() == category_id)
    }

    pub fn node_index(&self, category_id: &CategoryId) -> Option<usize> {
        self.nodes
            .iter()
            .position(|node| node.category_id() == category_id)
    }

    /// The category whose `clues` sequence currently contains `clue_id`.
    pub fn owner_of_clue(&self, clue_id: &ClueId) -> Option<&CategoryNode> {
        self.nodes.iter().find(|node| node.contains_clue(clue_id))
    }

    pub fn clue(&self, clue_id: &ClueId) -> Option<&Clue> {
        self.nodes.iter().find_map(|node| node.clue(clue_id))
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&RelationEdge> {
        self.edges.iter().find(|edge| edge.edge_id() == edge_id)
    }

    /// Any edge connecting `a` and `b`, regardless of direction.
    pub fn edge_between(&self, a: &CategoryId, b: &CategoryId) -> Option<&RelationEdge> {
        self.edges.iter().find(|edge| edge.links(a, b))
    }

    /// Total clue count across all categories.
    pub fn clue_count(&self) -> usize {
        self.nodes.iter().map(|node| node.clues().len()).sum()
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn set_rev(&mut self, rev: u64) {
        self.rev = rev;
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::Board;
    use crate::model::fixtures::seed_board;
    use crate::model::{CategoryId, ClueId, EdgeId};

    #[test]
    fn lookups_resolve_seeded_objects() {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let board = seed_board(now);

        let evidencias: CategoryId = "group-1".parse().expect("id");
        let depoimentos: CategoryId = "group-2".parse().expect("id");
        let suspeitos: CategoryId = "group-3".parse().expect("id");
        let fingerprint: ClueId = "clue-1".parse().expect("id");
        let edge_id: EdgeId = "e-group-1-group-2".parse().expect("id");

        assert_eq!(board.node(&evidencias).map(|n| n.label()), Some("Evidências Físicas"));
        assert_eq!(
            board.owner_of_clue(&fingerprint).map(|n| n.category_id()),
            Some(&evidencias)
        );
        assert_eq!(
            board.clue(&fingerprint).map(|c| c.title()),
            Some("Impressão Digital")
        );
        assert!(board.edge(&edge_id).is_some());
        assert!(board.edge_between(&depoimentos, &evidencias).is_some());
        assert!(board.edge_between(&evidencias, &suspeitos).is_none());
        assert_eq!(board.clue_count(), 4);
    }

    #[test]
    fn rev_saturates_instead_of_wrapping() {
        let mut board = Board::new();
        board.set_rev(u64::MAX);
        board.bump_rev();
        assert_eq!(board.rev(), u64::MAX);
    }
}
