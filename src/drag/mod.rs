// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

//! Drag session coordination.
//!
//! A board has two kinds of drag gestures: dragging a category template out
//! of the toolbox onto the canvas, and dragging a clue card between (or
//! within) category lists. [`DragCoordinator`] owns the lifecycle of at most
//! one such gesture at a time. It never mutates the board itself; a completed
//! drop is translated into an [`Op`] for the caller to apply.
//!
//! The host environment is abstracted behind two small traits:
//! [`CanvasViewport`] answers hit tests and coordinate conversion, and
//! [`PointerTracker`] hands out RAII guards for global pointer capture so the
//! listener is released on drop, cancel, and coordinator teardown alike.

use crate::model::{Board, CategoryId, CategoryTemplate, ClueId, IdGen, Position};
use crate::ops::{ClueOp, GraphOp, Op};

/// Prefix of the synthetic dropzone id shown inside a category with no clues.
pub const EMPTY_DROPZONE_PREFIX: &str = "empty-";

/// A point in screen coordinates, as reported by pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The canvas area as seen by drag gestures.
pub trait CanvasViewport {
    /// Whether a screen point falls inside the canvas.
    fn contains(&self, point: ScreenPoint) -> bool;

    /// Converts a screen point into canvas coordinates.
    fn to_canvas(&self, point: ScreenPoint) -> Position;
}

/// Source of global pointer capture.
///
/// `acquire` registers whatever platform listener is needed to keep
/// receiving move events for the duration of a gesture and returns a guard
/// that unregisters it when dropped.
pub trait PointerTracker {
    fn acquire(&mut self) -> ListenerGuard;
}

/// RAII handle for a registered pointer listener.
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with no listener behind it, for trackers that need none.
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// Pointer cursor the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Grabbing,
}

#[derive(Debug)]
struct ToolboxSession {
    template: CategoryTemplate,
    pointer: Option<ScreenPoint>,
    over_canvas: bool,
    drop_position: Option<Position>,
    _guard: ListenerGuard,
}

#[derive(Debug)]
struct ClueSession {
    clue_id: ClueId,
    _guard: ListenerGuard,
}

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Toolbox(ToolboxSession),
    Clue(ClueSession),
}

/// Where a clue drop landed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DropTarget {
    /// Over another clue card.
    Clue(CategoryId, ClueId),
    /// Over the placeholder dropzone of a category with no clues.
    EmptyZone(CategoryId),
}

/// Coordinates at most one live drag gesture and turns drops into ops.
#[derive(Debug, Default)]
pub struct DragCoordinator {
    state: DragState,
    cursor: Cursor,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// The template currently being dragged from the toolbox, if any.
    pub fn toolbox_template(&self) -> Option<&CategoryTemplate> {
        match &self.state {
            DragState::Toolbox(session) => Some(&session.template),
            _ => None,
        }
    }

    /// Screen position of the toolbox ghost, if a toolbox drag is live.
    pub fn ghost_position(&self) -> Option<ScreenPoint> {
        match &self.state {
            DragState::Toolbox(session) => session.pointer,
            _ => None,
        }
    }

    /// The clue currently being dragged, if any.
    pub fn active_clue(&self) -> Option<&ClueId> {
        match &self.state {
            DragState::Clue(session) => Some(&session.clue_id),
            _ => None,
        }
    }

    /// Begins dragging a category template out of the toolbox.
    ///
    /// Any gesture already in progress is cancelled first; there is never
    /// more than one live session.
    pub fn start_toolbox_drag(
        &mut self,
        template: CategoryTemplate,
        pointer: ScreenPoint,
        tracker: &mut dyn PointerTracker,
    ) {
        self.cancel();
        log::debug!("toolbox drag started: {}", template.label);
        self.state = DragState::Toolbox(ToolboxSession {
            template,
            pointer: Some(pointer),
            over_canvas: false,
            drop_position: None,
            _guard: tracker.acquire(),
        });
        self.cursor = Cursor::Grabbing;
    }

    /// Feeds a pointer move into the live toolbox session.
    ///
    /// Recomputes whether the pointer is over the canvas and, if so, the
    /// canvas position a drop would land at. Ignored outside a toolbox drag.
    pub fn pointer_moved(&mut self, point: ScreenPoint, viewport: &dyn CanvasViewport) {
        if let DragState::Toolbox(session) = &mut self.state {
            session.pointer = Some(point);
            session.over_canvas = viewport.contains(point);
            session.drop_position = session
                .over_canvas
                .then(|| viewport.to_canvas(point));
        }
    }

    /// Completes a toolbox drag.
    ///
    /// Returns an add-category op when the pointer was released over the
    /// canvas; a release anywhere else discards the gesture. Either way the
    /// session ends and the cursor is restored.
    pub fn drop_toolbox(
        &mut self,
        viewport: &dyn CanvasViewport,
        ids: &mut IdGen,
    ) -> Option<Op> {
        let state = std::mem::take(&mut self.state);
        self.cursor = Cursor::Default;
        let DragState::Toolbox(session) = state else {
            return None;
        };
        let pointer = session.pointer?;
        if !viewport.contains(pointer) {
            log::debug!("toolbox drop outside canvas, discarded");
            return None;
        }
        let position = session
            .drop_position
            .unwrap_or_else(|| viewport.to_canvas(pointer));
        Some(Op::Graph(GraphOp::AddCategory {
            category_id: ids.category_id(),
            position,
            template: session.template,
        }))
    }

    /// Begins dragging a clue card.
    pub fn start_clue_drag(&mut self, clue_id: ClueId, tracker: &mut dyn PointerTracker) {
        self.cancel();
        log::debug!("clue drag started: {clue_id}");
        self.state = DragState::Clue(ClueSession {
            clue_id,
            _guard: tracker.acquire(),
        });
        self.cursor = Cursor::Grabbing;
    }

    /// Completes a clue drag over the element identified by `over_id`.
    ///
    /// `over_id` is the id of the clue card under the pointer, or the
    /// `empty-` prefixed dropzone id of a category with no clues, or `None`
    /// when the pointer is over neither. Dropping a clue on itself, on
    /// nothing, or out of a board that no longer holds it yields no op.
    pub fn drop_clue(&mut self, board: &Board, over_id: Option<&str>) -> Option<Op> {
        let state = std::mem::take(&mut self.state);
        self.cursor = Cursor::Default;
        let DragState::Clue(session) = state else {
            return None;
        };
        let clue_id = session.clue_id;
        let source = board.owner_of_clue(&clue_id)?.category_id().clone();
        let target = resolve_drop_target(board, over_id?)?;

        match target {
            DropTarget::Clue(category_id, over_clue) => {
                if over_clue == clue_id {
                    return None;
                }
                if category_id != source {
                    return Some(Op::Clue(ClueOp::Move {
                        clue_id,
                        from_category_id: source,
                        to_category_id: category_id,
                    }));
                }
                let node = board.node(&category_id)?;
                let mut ordered: Vec<ClueId> = node
                    .clues()
                    .iter()
                    .map(|clue| clue.clue_id().clone())
                    .collect();
                // Both indices are taken from the list as it stands, so the
                // dragged clue ends up at the over item's position: above it
                // when dragging up, below it when dragging down.
                let from = ordered.iter().position(|id| id == &clue_id)?;
                let to = ordered.iter().position(|id| id == &over_clue)?;
                let moved = ordered.remove(from);
                ordered.insert(to, moved);
                Some(Op::Clue(ClueOp::Reorder {
                    category_id,
                    ordered_ids: ordered,
                }))
            }
            DropTarget::EmptyZone(category_id) => {
                if category_id == source {
                    return None;
                }
                Some(Op::Clue(ClueOp::Move {
                    clue_id,
                    from_category_id: source,
                    to_category_id: category_id,
                }))
            }
        }
    }

    /// Abandons any live gesture, releasing its pointer listener and
    /// restoring the cursor.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            log::debug!("drag cancelled");
        }
        self.state = DragState::Idle;
        self.cursor = Cursor::Default;
    }
}

fn resolve_drop_target(board: &Board, over_id: &str) -> Option<DropTarget> {
    if let Some(raw) = over_id.strip_prefix(EMPTY_DROPZONE_PREFIX) {
        let category_id = CategoryId::new(raw).ok()?;
        board.node(&category_id)?;
        return Some(DropTarget::EmptyZone(category_id));
    }
    let clue_id = ClueId::new(over_id).ok()?;
    let owner = board.owner_of_clue(&clue_id)?;
    Some(DropTarget::Clue(owner.category_id().clone(), clue_id))
}
