// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

//! Board persistence.
//!
//! The board lives under a single well-known key in a [`BlobStore`]. Loading
//! is total: a missing snapshot yields the seed board, and a corrupt one is
//! logged and replaced by the seed rather than surfaced as an error. Saving
//! is fire-and-forget; a failed save must never take the live board down.

mod blob;
mod snapshot;

pub use blob::{BlobStore, FileStore, MemoryStore, StoreError};
pub use snapshot::{
    deserialize_board, serialize_board, PersistedBoard, PersistedClue, PersistedNode,
    PersistedNodeData, SnapshotError,
};

use chrono::{DateTime, Utc};

use crate::model::fixtures::seed_board;
use crate::model::Board;

/// Storage key the board snapshot is kept under.
pub const STORAGE_KEY: &str = "investigation-workflow-data";

/// Loads the board, falling back to the seed board when no usable snapshot
/// exists.
pub fn load_board(store: &dyn BlobStore, now: DateTime<Utc>) -> Board {
    let raw = match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return seed_board(now),
        Err(err) => {
            log::warn!("board load failed, using seed: {err}");
            return seed_board(now);
        }
    };
    let snapshot: PersistedBoard = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            let err = StoreError::Json {
                key: STORAGE_KEY.to_owned(),
                source: err,
            };
            log::warn!("board snapshot unreadable, using seed: {err}");
            return seed_board(now);
        }
    };
    match deserialize_board(&snapshot, now) {
        Ok(board) => board,
        Err(err) => {
            log::warn!("board snapshot invalid, using seed: {err}");
            seed_board(now)
        }
    }
}

/// Persists the board under [`STORAGE_KEY`].
///
/// Failures are logged and swallowed.
pub fn save_board(store: &mut dyn BlobStore, board: &Board, saved_at: DateTime<Utc>) {
    let snapshot = serialize_board(board, saved_at);
    let raw = match serde_json::to_string(&snapshot) {
        Ok(raw) => raw,
        Err(err) => {
            let err = StoreError::Json {
                key: STORAGE_KEY.to_owned(),
                source: err,
            };
            log::warn!("board snapshot encode failed, not saved: {err}");
            return;
        }
    };
    if let Err(err) = store.set(STORAGE_KEY, &raw) {
        log::warn!("board save failed: {err}");
    }
}

/// Replaces the stored snapshot with an empty board and returns it.
pub fn clear_board(store: &mut dyn BlobStore, cleared_at: DateTime<Utc>) -> Board {
    let board = Board::new();
    save_board(store, &board, cleared_at);
    board
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use crate::model::{ClueId, EdgeId};

    use super::*;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn first_load_yields_the_seed_scenario() {
        let store = MemoryStore::new();
        let board = load_board(&store, at());

        assert_eq!(board.nodes().len(), 3);
        assert_eq!(board.clue_count(), 4);
        assert_eq!(board.edges().len(), 2);
        assert!(board
            .edge(&EdgeId::new("e-group-1-group-2").unwrap())
            .is_some());
    }

    #[test]
    fn save_then_load_round_trips_the_board() {
        let mut store = MemoryStore::new();
        let mut board = load_board(&store, at());
        board
            .nodes_mut()
            .first_mut()
            .expect("seed node")
            .set_position(crate::model::Position::new(42.0, 7.0));
        save_board(&mut store, &board, at());

        let reloaded = load_board(&store, at() + Duration::hours(1));
        assert_eq!(reloaded.nodes(), board.nodes());
        assert_eq!(reloaded.edges(), board.edges());
    }

    #[test]
    fn an_empty_saved_board_stays_empty_on_reload() {
        let mut store = MemoryStore::new();
        save_board(&mut store, &Board::new(), at());

        let board = load_board(&store, at());
        assert!(board.nodes().is_empty());
        assert!(board.edges().is_empty());
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_the_seed() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "{not json").expect("set");

        let board = load_board(&store, at());
        assert_eq!(board.nodes().len(), 3);
        assert!(board.clue(&ClueId::new("clue-1").unwrap()).is_some());
    }

    #[test]
    fn snapshot_with_invalid_ids_falls_back_to_the_seed() {
        let mut store = MemoryStore::new();
        let raw = r#"{"nodes":[{"id":" ","position":{"x":0.0,"y":0.0},
            "data":{"label":"X","color":"bg-red-100","clues":[]}}],"edges":[]}"#;
        store.set(STORAGE_KEY, raw).expect("set");

        let board = load_board(&store, at());
        assert_eq!(board.nodes().len(), 3);
    }

    #[test]
    fn clear_replaces_the_snapshot_with_an_empty_board() {
        let mut store = MemoryStore::new();
        let board = load_board(&store, at());
        save_board(&mut store, &board, at());

        let cleared = clear_board(&mut store, at());
        assert!(cleared.nodes().is_empty());

        let reloaded = load_board(&store, at());
        assert!(reloaded.nodes().is_empty());
        assert!(reloaded.edges().is_empty());
    }
}
