// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

/// Graph mutation implementation helpers used by `apply_ops`.
/// Keeps `ops::mod` focused on public op types and orchestration.
fn apply_graph_op(
    board: &mut Board,
    op: &GraphOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        GraphOp::AddCategory {
            category_id,
            position,
            template,
        } => {
            if board.node(category_id).is_some() {
                return Err(ApplyError::AlreadyExists {
                    object: BoardRef::Category(category_id.clone()),
                });
            }
            board
                .nodes_mut()
                .push(CategoryNode::new(category_id.clone(), *position, template));
            delta.record_added(BoardRef::Category(category_id.clone()));
            Ok(())
        }
        GraphOp::RemoveCategory { category_id } => {
            // Stale deletes from the UI are expected; an absent id is a no-op.
            let Some(index) = board.node_index(category_id) else {
                return Ok(());
            };
            board.nodes_mut().remove(index);

            // Cascade: every edge touching the category dies with it.
            let dropped: Vec<EdgeId> = board
                .edges()
                .iter()
                .filter(|edge| edge.touches(category_id))
                .map(|edge| edge.edge_id().clone())
                .collect();
            board.edges_mut().retain(|edge| !edge.touches(category_id));

            for edge_id in dropped {
                delta.record_removed(BoardRef::Edge(edge_id));
            }
            delta.record_removed(BoardRef::Category(category_id.clone()));
            Ok(())
        }
        GraphOp::Connect {
            edge_id,
            source_id,
            target_id,
            source_handle,
            target_handle,
            started_from_target,
        } => {
            // A gesture that started on a target-type handle arrives with the
            // endpoints reversed; normalize so the persisted edge always
            // points source -> target.
            let (source_id, target_id, source_handle, target_handle) = if *started_from_target {
                (target_id, source_id, target_handle, source_handle)
            } else {
                (source_id, target_id, source_handle, target_handle)
            };

            if let Some(existing) = board.edge_between(source_id, target_id) {
                return Err(ApplyError::DuplicateEdge {
                    source_id: source_id.clone(),
                    target_id: target_id.clone(),
                    existing_edge_id: existing.edge_id().clone(),
                });
            }

            // An endpoint deleted mid-gesture makes this a discarded gesture.
            if board.node(source_id).is_none() {
                return Ok(());
            }
            let Some(target) = board.node(target_id) else {
                return Ok(());
            };

            let label = target.label().to_owned();
            let stroke = stroke_color_for(target.color());
            let edge = RelationEdge::new(
                edge_id.clone(),
                source_id.clone(),
                target_id.clone(),
                source_handle.clone(),
                target_handle.clone(),
                Some(label),
                stroke,
            );
            board.edges_mut().push(edge);
            delta.record_added(BoardRef::Edge(edge_id.clone()));
            Ok(())
        }
        GraphOp::RemoveEdge { edge_id } => {
            let before = board.edges().len();
            board.edges_mut().retain(|edge| edge.edge_id() != edge_id);
            if board.edges().len() != before {
                delta.record_removed(BoardRef::Edge(edge_id.clone()));
            }
            Ok(())
        }
    }
}

fn apply_clue_op(
    board: &mut Board,
    op: &ClueOp,
    now: DateTime<Utc>,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        ClueOp::Add {
            clue_id,
            category_id,
            draft,
        } => {
            if draft.title.trim().is_empty() {
                return Err(ApplyError::EmptyClueTitle {
                    category_id: category_id.clone(),
                });
            }
            if board.clue(clue_id).is_some() {
                return Err(ApplyError::AlreadyExists {
                    object: BoardRef::Clue(clue_id.clone()),
                });
            }
            // Category deleted while the add dialog was open: discard.
            let Some(node) = board.node_mut(category_id) else {
                return Ok(());
            };

            // New clues append at the end so sibling orders stay dense.
            let order = node.clues().len();
            node.clues_mut().push(Clue::new(
                clue_id.clone(),
                category_id.clone(),
                draft.clone(),
                order,
                now,
            ));
            node.renumber();
            delta.record_added(BoardRef::Clue(clue_id.clone()));
            Ok(())
        }
        ClueOp::Update {
            category_id,
            clue_id,
            draft,
        } => {
            if draft.title.trim().is_empty() {
                return Err(ApplyError::EmptyClueTitle {
                    category_id: category_id.clone(),
                });
            }
            let Some(node) = board.node_mut(category_id) else {
                return Ok(());
            };
            let Some(clue) = node
                .clues_mut()
                .iter_mut()
                .find(|clue| clue.clue_id() == clue_id)
            else {
                return Ok(());
            };

            clue.apply_draft(draft.clone(), now);
            delta.record_updated(BoardRef::Clue(clue_id.clone()));
            Ok(())
        }
        ClueOp::Remove { clue_id } => {
            // The clue id is globally unique; search every category rather
            // than requiring the caller to know the owner.
            for node in board.nodes_mut() {
                let before = node.clues().len();
                node.clues_mut().retain(|clue| clue.clue_id() != clue_id);
                if node.clues().len() != before {
                    node.renumber();
                    delta.record_removed(BoardRef::Clue(clue_id.clone()));
                    return Ok(());
                }
            }
            Ok(())
        }
        ClueOp::Reorder {
            category_id,
            ordered_ids,
        } => {
            let Some(node) = board.node_mut(category_id) else {
                return Ok(());
            };

            let current = node.clue_ids();
            // Ids foreign to this category are ignored; clues omitted from
            // the request keep their relative order at the tail.
            let mut next: Vec<ClueId> = Vec::with_capacity(current.len());
            for id in ordered_ids {
                if current.contains(id) && !next.contains(id) {
                    next.push(id.clone());
                }
            }
            for id in &current {
                if !next.contains(id) {
                    next.push(id.clone());
                }
            }

            // Identical order: skip entirely, no update notification.
            if next == current {
                return Ok(());
            }

            let mut remaining = std::mem::take(node.clues_mut());
            let mut reordered = Vec::with_capacity(remaining.len());
            for id in &next {
                let index = remaining
                    .iter()
                    .position(|clue| clue.clue_id() == id)
                    .expect("reorder target drawn from current clue set");
                reordered.push(remaining.remove(index));
            }
            *node.clues_mut() = reordered;
            node.renumber();
            delta.record_updated(BoardRef::Category(category_id.clone()));
            Ok(())
        }
        ClueOp::Move {
            clue_id,
            from_category_id,
            to_category_id,
        } => {
            // Moving to the same category is a reorder, not a move; the guard
            // keeps the clue from being duplicated or dropped.
            if from_category_id == to_category_id {
                return Ok(());
            }
            // Destination deleted mid-drag: the clue stays in the source.
            let Some(to_index) = board.node_index(to_category_id) else {
                return Ok(());
            };
            let Some(from_index) = board.node_index(from_category_id) else {
                return Ok(());
            };

            let from_node = &mut board.nodes_mut()[from_index];
            let Some(clue_index) = from_node
                .clues()
                .iter()
                .position(|clue| clue.clue_id() == clue_id)
            else {
                return Ok(());
            };

            let clue = from_node.clues_mut().remove(clue_index);
            from_node.renumber();

            let to_node = &mut board.nodes_mut()[to_index];
            to_node.clues_mut().push(clue);
            to_node.renumber();

            delta.record_updated(BoardRef::Clue(clue_id.clone()));
            delta.record_updated(BoardRef::Category(from_category_id.clone()));
            delta.record_updated(BoardRef::Category(to_category_id.clone()));
            Ok(())
        }
    }
}
