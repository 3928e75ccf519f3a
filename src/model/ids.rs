// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::board::Board;

/// A stable identifier used across the model and snapshot surfaces.
///
/// Ids are opaque strings; the only rule is that they are non-empty after
/// trimming. [`IdGen`] mints the `group-N` / `clue-N` / `e-<src>-<tgt>-N`
/// shapes the snapshot format uses, but any non-empty string loaded from a
/// snapshot is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
        }
    }
}

impl std::error::Error for IdError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryIdTag {}
pub type CategoryId = Id<CategoryIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClueIdTag {}
pub type ClueId = Id<ClueIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeIdTag {}
pub type EdgeId = Id<EdgeIdTag>;

/// Mints ids that are unique for the lifetime of one editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Starts the counter above every numeric suffix already present on the
    /// board, so ids minted after a snapshot load cannot collide with loaded
    /// ones.
    pub fn seeded_from(board: &Board) -> Self {
        let mut max = 0u64;
        let mut observe = |id: &str| {
            if let Some(n) = trailing_number(id) {
                max = max.max(n);
            }
        };

        for node in board.nodes() {
            observe(node.category_id().as_str());
            for clue in node.clues() {
                observe(clue.clue_id().as_str());
            }
        }
        for edge in board.edges() {
            observe(edge.edge_id().as_str());
        }

        Self {
            next: max.saturating_add(1),
        }
    }

    pub fn category_id(&mut self) -> CategoryId {
        let n = self.bump();
        CategoryId::new(format!("group-{n}")).expect("generated id is non-empty")
    }

    pub fn clue_id(&mut self) -> ClueId {
        let n = self.bump();
        ClueId::new(format!("clue-{n}")).expect("generated id is non-empty")
    }

    pub fn edge_id(&mut self, source: &CategoryId, target: &CategoryId) -> EdgeId {
        let n = self.bump();
        EdgeId::new(format!("e-{source}-{target}-{n}")).expect("generated id is non-empty")
    }

    fn bump(&mut self) -> u64 {
        let n = self.next;
        self.next = self.next.saturating_add(1);
        n
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}

fn trailing_number(id: &str) -> Option<u64> {
    id.rsplit('-').next()?.parse().ok()
}
