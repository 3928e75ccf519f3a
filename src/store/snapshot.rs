// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

//! Wire form of a persisted board.
//!
//! The snapshot schema is what actually lands in storage: camelCase keys,
//! clue lists nested under each node's `data`, edges carried verbatim, and
//! ISO-8601 millisecond timestamps. Derived state (icons, clue back-links) is
//! not trusted from the wire; it is recomputed on load so a hand-edited or
//! older snapshot cannot smuggle in an inconsistent board.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    Board, CategoryId, CategoryNode, Clue, ClueDraft, ClueId, IdError, MediaType, Position,
    RelationEdge,
};

use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedBoard {
    pub nodes: Vec<PersistedNode>,
    pub edges: Vec<RelationEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedNode {
    pub id: String,
    #[serde(rename = "type", default = "default_node_kind")]
    pub kind: String,
    pub position: Position,
    pub data: PersistedNodeData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedNodeData {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
    #[serde(default)]
    pub clues: Vec<PersistedClue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedClue {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    pub group_id: String,
    pub order: usize,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_node_kind() -> String {
    "investigation".to_owned()
}

#[derive(Debug)]
pub enum SnapshotError {
    Id(IdError),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Id(err) => write!(f, "invalid id in snapshot: {err}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Id(err) => Some(err),
        }
    }
}

impl From<IdError> for SnapshotError {
    fn from(err: IdError) -> Self {
        SnapshotError::Id(err)
    }
}

fn iso_millis(when: DateTime<Utc>) -> String {
    when.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders a board into its wire form.
pub fn serialize_board(board: &Board, saved_at: DateTime<Utc>) -> PersistedBoard {
    let nodes = board
        .nodes()
        .iter()
        .map(|node| PersistedNode {
            id: node.category_id().as_str().to_owned(),
            kind: default_node_kind(),
            position: node.position(),
            data: PersistedNodeData {
                label: node.label().to_owned(),
                description: node.description().map(str::to_owned),
                color: node.color().to_owned(),
                clues: node.clues().iter().map(persist_clue).collect(),
            },
        })
        .collect();
    PersistedBoard {
        nodes,
        edges: board.edges().to_vec(),
        saved_at: Some(iso_millis(saved_at)),
    }
}

fn persist_clue(clue: &Clue) -> PersistedClue {
    PersistedClue {
        id: clue.clue_id().as_str().to_owned(),
        title: clue.title().to_owned(),
        content: clue.content().to_owned(),
        media_type: clue.media_type(),
        media_url: clue.media_url().map(str::to_owned),
        group_id: clue.group_id().as_str().to_owned(),
        order: clue.order(),
        created_at: Some(iso_millis(clue.created_at())),
        updated_at: Some(iso_millis(clue.updated_at())),
    }
}

/// Rebuilds a board from its wire form.
///
/// Node and clue order is taken verbatim from the snapshot. Clue back-links
/// come from containment, not from the stored `groupId`; icons are re-derived
/// from labels. Timestamps that are missing or unparseable fall back to
/// `now`.
pub fn deserialize_board(
    snapshot: &PersistedBoard,
    now: DateTime<Utc>,
) -> Result<Board, SnapshotError> {
    let mut nodes = Vec::with_capacity(snapshot.nodes.len());
    for persisted in &snapshot.nodes {
        let category_id = CategoryId::new(persisted.id.as_str())?;
        let mut clues = Vec::with_capacity(persisted.data.clues.len());
        for raw in &persisted.data.clues {
            clues.push(revive_clue(raw, &category_id, now)?);
        }
        nodes.push(CategoryNode::from_parts(
            category_id,
            persisted.data.label.clone(),
            persisted.data.description.clone(),
            persisted.data.color.clone(),
            persisted.position,
            clues,
        ));
    }
    Ok(Board::from_parts(nodes, snapshot.edges.clone()))
}

fn revive_clue(
    raw: &PersistedClue,
    owner: &CategoryId,
    now: DateTime<Utc>,
) -> Result<Clue, SnapshotError> {
    let clue_id = ClueId::new(raw.id.as_str())?;
    let draft = ClueDraft {
        title: raw.title.clone(),
        content: raw.content.clone(),
        media_type: raw.media_type,
        media_url: raw.media_url.clone(),
    };
    let created_at = parse_timestamp(raw.created_at.as_deref(), now);
    let updated_at = parse_timestamp(raw.updated_at.as_deref(), now);
    Ok(Clue::from_parts(
        clue_id,
        owner.clone(),
        draft,
        raw.order,
        created_at,
        updated_at,
    ))
}

fn parse_timestamp(raw: Option<&str>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    raw.and_then(|value| DateTime::parse_from_rfc3339(value).ok())
        .map(|value| value.with_timezone(&Utc))
        .unwrap_or(fallback)
}
