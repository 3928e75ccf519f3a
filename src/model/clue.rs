// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, ClueId};

/// The kind of media attached to a clue, mirroring the snapshot's
/// `mediaType` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Text,
    Image,
    Video,
    Audio,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

/// One piece of evidence or testimony inside a category.
///
/// `group_id` and `order` are derived from containment: the owning category
/// rewrites both after every list mutation, so they are always consistent
/// with the category's `clues` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    clue_id: ClueId,
    title: String,
    content: String,
    media_type: MediaType,
    media_url: Option<String>,
    group_id: CategoryId,
    order: usize,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Clue {
    pub fn new(
        clue_id: ClueId,
        group_id: CategoryId,
        draft: ClueDraft,
        order: usize,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            clue_id,
            title: draft.title,
            content: draft.content,
            media_type: draft.media_type,
            media_url: draft.media_url,
            group_id,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a clue from persisted parts, trusting the stored timestamps.
    pub fn from_parts(
        clue_id: ClueId,
        group_id: CategoryId,
        draft: ClueDraft,
        order: usize,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            clue_id,
            title: draft.title,
            content: draft.content,
            media_type: draft.media_type,
            media_url: draft.media_url,
            group_id,
            order,
            created_at,
            updated_at,
        }
    }

    pub fn clue_id(&self) -> &ClueId {
        &self.clue_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn media_url(&self) -> Option<&str> {
        self.media_url.as_deref()
    }

    pub fn group_id(&self) -> &CategoryId {
        &self.group_id
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the four user-editable fields and refreshes `updated_at`.
    pub fn apply_draft(&mut self, draft: ClueDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.content = draft.content;
        self.media_type = draft.media_type;
        self.media_url = draft.media_url;
        self.updated_at = now;
    }

    pub(crate) fn set_order(&mut self, order: usize) {
        self.order = order;
    }

    pub(crate) fn set_group_id(&mut self, group_id: CategoryId) {
        self.group_id = group_id;
    }
}

/// The user-editable subset of a clue, as entered in the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueDraft {
    pub title: String,
    pub content: String,
    pub media_type: MediaType,
    pub media_url: Option<String>,
}

impl ClueDraft {
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            media_type: MediaType::Text,
            media_url: None,
        }
    }

    pub fn media(
        title: impl Into<String>,
        content: impl Into<String>,
        media_type: MediaType,
        media_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            media_type,
            media_url: Some(media_url.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{Clue, ClueDraft, MediaType};
    use crate::model::{CategoryId, ClueId};

    #[test]
    fn new_clue_stamps_both_timestamps_with_now() {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let clue = Clue::new(
            ClueId::new("clue-1").expect("clue id"),
            CategoryId::new("group-1").expect("category id"),
            ClueDraft::text("Impressão Digital", "na maçaneta"),
            0,
            now,
        );

        assert_eq!(clue.created_at(), now);
        assert_eq!(clue.updated_at(), now);
        assert_eq!(clue.order(), 0);
        assert_eq!(clue.media_type(), MediaType::Text);
        assert_eq!(clue.media_url(), None);
    }

    #[test]
    fn apply_draft_replaces_fields_and_touches_updated_at_only() {
        let created = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let mut clue = Clue::new(
            ClueId::new("clue-1").expect("clue id"),
            CategoryId::new("group-1").expect("category id"),
            ClueDraft::text("Old", "old content"),
            0,
            created,
        );

        let later = created + Duration::minutes(5);
        clue.apply_draft(
            ClueDraft::media("New", "new content", MediaType::Audio, "https://example.com/a.mp3"),
            later,
        );

        assert_eq!(clue.title(), "New");
        assert_eq!(clue.content(), "new content");
        assert_eq!(clue.media_type(), MediaType::Audio);
        assert_eq!(clue.media_url(), Some("https://example.com/a.mp3"));
        assert_eq!(clue.created_at(), created);
        assert_eq!(clue.updated_at(), later);
    }

    #[test]
    fn media_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MediaType::Image).expect("serialize"),
            "\"image\""
        );
        let back: MediaType = serde_json::from_str("\"audio\"").expect("deserialize");
        assert_eq!(back, MediaType::Audio);
    }
}
