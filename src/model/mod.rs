// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

//! Core data model: boards, categories, clues, and relationship edges.
//!
//! A board owns its categories, each category owns its ordered clue list, and
//! edges reference categories by id. Presentation icons are derived from
//! labels and never persisted.

pub mod board;
pub mod category;
pub mod clue;
pub mod edge;
pub mod fixtures;
pub mod ids;
pub mod style;

pub use board::Board;
pub use category::{CategoryNode, CategoryTemplate, Position};
pub use clue::{Clue, ClueDraft, MediaType};
pub use edge::{EdgeMarker, EdgeStyle, RelationEdge};
pub use ids::{CategoryId, ClueId, EdgeId, Id, IdError, IdGen};
pub use style::{derive_icon, stroke_color_for, IconKind};
