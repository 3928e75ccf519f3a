// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, EdgeId};

/// Stroke styling carried verbatim in snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: u32,
}

/// Arrowhead description carried verbatim in snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeMarker {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    pub width: u32,
    pub height: u32,
}

fn default_edge_kind() -> String {
    "smoothstep".to_owned()
}

/// A directed relationship between two categories.
///
/// Edges carry only plain value data, so they serialize verbatim. The label
/// and stroke color are derived from the *target* category at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationEdge {
    #[serde(rename = "id")]
    edge_id: EdgeId,
    source: CategoryId,
    target: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_handle: Option<String>,
    #[serde(rename = "type", default = "default_edge_kind")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    style: EdgeStyle,
    marker_end: EdgeMarker,
}

impl RelationEdge {
    pub fn new(
        edge_id: EdgeId,
        source: CategoryId,
        target: CategoryId,
        source_handle: Option<String>,
        target_handle: Option<String>,
        label: Option<String>,
        stroke: &str,
    ) -> Self {
        Self {
            edge_id,
            source,
            target,
            source_handle,
            target_handle,
            kind: default_edge_kind(),
            label,
            style: EdgeStyle {
                stroke: stroke.to_owned(),
                stroke_width: 2,
            },
            marker_end: EdgeMarker {
                kind: "arrowclosed".to_owned(),
                color: stroke.to_owned(),
                width: 20,
                height: 20,
            },
        }
    }

    pub fn edge_id(&self) -> &EdgeId {
        &self.edge_id
    }

    pub fn source(&self) -> &CategoryId {
        &self.source
    }

    pub fn target(&self) -> &CategoryId {
        &self.target
    }

    pub fn source_handle(&self) -> Option<&str> {
        self.source_handle.as_deref()
    }

    pub fn target_handle(&self) -> Option<&str> {
        self.target_handle.as_deref()
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }

    pub fn marker_end(&self) -> &EdgeMarker {
        &self.marker_end
    }

    /// True when this edge connects `a` and `b` in either direction.
    pub fn links(&self, a: &CategoryId, b: &CategoryId) -> bool {
        (&self.source == a && &self.target == b) || (&self.source == b && &self.target == a)
    }

    /// True when `category_id` is either endpoint.
    pub fn touches(&self, category_id: &CategoryId) -> bool {
        &self.source == category_id || &self.target == category_id
    }
}
