// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

//! Pure presentation derivations: label → icon, color token → edge stroke.

/// Presentation icon classes for category headers.
///
/// Never serialized; always re-derivable from the label via [`derive_icon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Document,
    Audio,
    Photo,
    Video,
}

/// Derives the header icon from a category label by case-insensitive keyword
/// matching. The single source of truth for both category creation and
/// snapshot deserialization, so equal labels always yield equal icons.
pub fn derive_icon(label: &str) -> IconKind {
    let label = label.to_lowercase();
    if label.contains("evidência") || label.contains("evidencias") {
        IconKind::Document
    } else if label.contains("depoimento") {
        IconKind::Audio
    } else if label.contains("suspeito") {
        IconKind::Photo
    } else if label.contains("cronologia") || label.contains("timeline") {
        IconKind::Video
    } else {
        IconKind::Document
    }
}

/// Maps a category background token (e.g. `bg-red-100`) to the stroke color
/// used for edges pointing at that category. Unknown tokens fall back to
/// slate.
pub fn stroke_color_for(color: &str) -> &'static str {
    if color.contains("red") {
        "#ef4444"
    } else if color.contains("blue") {
        "#3b82f6"
    } else if color.contains("yellow") {
        "#eab308"
    } else if color.contains("green") {
        "#22c55e"
    } else if color.contains("purple") {
        "#a855f7"
    } else if color.contains("orange") {
        "#f97316"
    } else {
        "#64748b"
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_icon, stroke_color_for, IconKind};

    #[test]
    fn icon_derivation_matches_domain_keywords() {
        assert_eq!(derive_icon("Evidências Físicas"), IconKind::Document);
        assert_eq!(derive_icon("Depoimentos"), IconKind::Audio);
        assert_eq!(derive_icon("Suspeitos"), IconKind::Photo);
        assert_eq!(derive_icon("Cronologia"), IconKind::Video);
        assert_eq!(derive_icon("Linha timeline"), IconKind::Video);
    }

    #[test]
    fn icon_derivation_is_case_insensitive_and_deterministic() {
        assert_eq!(derive_icon("DEPOIMENTOS"), derive_icon("depoimentos"));
        assert_eq!(derive_icon("Anotações"), IconKind::Document);
        assert_eq!(derive_icon(""), IconKind::Document);
    }

    #[test]
    fn stroke_colors_map_by_token_substring() {
        assert_eq!(stroke_color_for("bg-red-100"), "#ef4444");
        assert_eq!(stroke_color_for("bg-blue-100"), "#3b82f6");
        assert_eq!(stroke_color_for("bg-yellow-100"), "#eab308");
        assert_eq!(stroke_color_for("bg-green-100"), "#22c55e");
        assert_eq!(stroke_color_for("bg-slate-200"), "#64748b");
        assert_eq!(stroke_color_for(""), "#64748b");
    }
}
