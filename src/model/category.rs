// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::clue::Clue;
use super::ids::{CategoryId, ClueId};
use super::style::{derive_icon, IconKind};

/// A canvas-space coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A toolbox entry: the template a new category is stamped from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTemplate {
    pub label: String,
    pub color: String,
}

impl CategoryTemplate {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// An investigative grouping positioned on the canvas, owning an ordered
/// clue list.
///
/// The icon is presentation state derived from the label; it is dropped on
/// serialization and re-derived on load, always through [`derive_icon`].
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNode {
    category_id: CategoryId,
    label: String,
    description: Option<String>,
    color: String,
    icon: IconKind,
    position: Position,
    clues: Vec<Clue>,
}

impl CategoryNode {
    /// Stamps a fresh category from a toolbox template.
    pub fn new(category_id: CategoryId, position: Position, template: &CategoryTemplate) -> Self {
        let description = format!("Nova categoria de {}", template.label.to_lowercase());
        Self {
            category_id,
            label: template.label.clone(),
            description: Some(description),
            color: template.color.clone(),
            icon: derive_icon(&template.label),
            position,
            clues: Vec::new(),
        }
    }

    /// Rebuilds a category from persisted parts; the icon is re-derived from
    /// the label.
    pub fn from_parts(
        category_id: CategoryId,
        label: impl Into<String>,
        description: Option<String>,
        color: impl Into<String>,
        position: Position,
        clues: Vec<Clue>,
    ) -> Self {
        let label = label.into();
        Self {
            icon: derive_icon(&label),
            category_id,
            label,
            description,
            color: color.into(),
            position,
            clues,
        }
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn icon(&self) -> IconKind {
        self.icon
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn clues_mut(&mut self) -> &mut Vec<Clue> {
        &mut self.clues
    }

    pub fn clue(&self, clue_id: &ClueId) -> Option<&Clue> {
        self.clues.iter().find(|clue| clue.clue_id() == clue_id)
    }

    pub fn contains_clue(&self, clue_id: &ClueId) -> bool {
        self.clue(clue_id).is_some()
    }

    pub fn clue_ids(&self) -> Vec<ClueId> {
        self.clues.iter().map(|clue| clue.clue_id().clone()).collect()
    }

    /// Rewrites `order` and `group_id` for every clue from actual containment.
    /// Called after any clue-list mutation; keeps ordering dense 0..n-1.
    pub(crate) fn renumber(&mut self) {
        let category_id = self.category_id.clone();
        for (index, clue) in self.clues.iter_mut().enumerate() {
            clue.set_order(index);
            clue.set_group_id(category_id.clone());
        }
    }
}
