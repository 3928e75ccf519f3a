// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

//! Caseboard — the editing engine behind a visual investigation board.
//!
//! A board holds category nodes positioned on a canvas, an ordered clue list
//! inside each category, and labeled relationship edges between categories.
//! This crate owns the canonical state and its mutation model (`ops`), the
//! drag-session state machine (`drag`), and the snapshot persistence bridge
//! (`store`). Rendering, gesture sensing, and dialogs belong to the embedding
//! surface and are reached only through the narrow traits defined here.

pub mod drag;
pub mod model;
pub mod ops;
pub mod store;
