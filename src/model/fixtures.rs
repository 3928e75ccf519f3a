// SPDX-FileCopyrightText: 2026 Caseboard contributors
// SPDX-License-Identifier: MIT

//! Seed content shown on first launch and the toolbox catalog.

use chrono::{DateTime, Utc};

use super::board::Board;
use super::category::{CategoryNode, CategoryTemplate, Position};
use super::clue::{Clue, ClueDraft, MediaType};
use super::edge::RelationEdge;
use super::ids::{CategoryId, ClueId, EdgeId};
use super::style::stroke_color_for;

fn cid(value: &str) -> CategoryId {
    CategoryId::new(value).expect("fixture category id")
}

fn clid(value: &str) -> ClueId {
    ClueId::new(value).expect("fixture clue id")
}

/// The board shown when no snapshot has been stored yet: three categories of
/// an example criminal case, chained by two relationship edges.
pub fn seed_board(now: DateTime<Utc>) -> Board {
    let mut evidencias = CategoryNode::from_parts(
        cid("group-1"),
        "Evidências Físicas",
        Some("Evidências materiais encontradas na cena do crime".to_owned()),
        "bg-red-100",
        Position::new(100.0, 100.0),
        vec![
            Clue::new(
                clid("clue-1"),
                cid("group-1"),
                ClueDraft::media(
                    "Impressão Digital",
                    "Impressão digital encontrada na maçaneta da porta",
                    MediaType::Image,
                    "https://example.com/fingerprint.jpg",
                ),
                0,
                now,
            ),
            Clue::new(
                clid("clue-2"),
                cid("group-1"),
                ClueDraft::text("Fio de Cabelo", "Fio de cabelo castanho encontrado no local"),
                1,
                now,
            ),
        ],
    );
    evidencias.renumber();

    let mut depoimentos = CategoryNode::from_parts(
        cid("group-2"),
        "Depoimentos",
        Some("Relatos de testemunhas e envolvidos".to_owned()),
        "bg-blue-100",
        Position::new(600.0, 100.0),
        vec![Clue::new(
            clid("clue-3"),
            cid("group-2"),
            ClueDraft::media(
                "Testemunha João",
                "Viu um carro vermelho saindo do local às 23h",
                MediaType::Audio,
                "https://example.com/testimony.mp3",
            ),
            0,
            now,
        )],
    );
    depoimentos.renumber();

    let mut suspeitos = CategoryNode::from_parts(
        cid("group-3"),
        "Suspeitos",
        Some("Pessoas de interesse na investigação".to_owned()),
        "bg-yellow-100",
        Position::new(1100.0, 100.0),
        vec![Clue::new(
            clid("clue-4"),
            cid("group-3"),
            ClueDraft::text(
                "Carlos Silva",
                "Ex-funcionário da empresa, tem histórico de violência",
            ),
            0,
            now,
        )],
    );
    suspeitos.renumber();

    let nodes = vec![evidencias, depoimentos, suspeitos];
    let edges = vec![
        seed_edge(&nodes, "group-1", "group-2"),
        seed_edge(&nodes, "group-2", "group-3"),
    ];

    Board::from_parts(nodes, edges)
}

fn seed_edge(nodes: &[CategoryNode], source: &str, target: &str) -> RelationEdge {
    let target_node = nodes
        .iter()
        .find(|node| node.category_id().as_str() == target)
        .expect("fixture edge target exists");

    RelationEdge::new(
        EdgeId::new(format!("e-{source}-{target}")).expect("fixture edge id"),
        cid(source),
        cid(target),
        Some("right".to_owned()),
        Some("left-target".to_owned()),
        Some(target_node.label().to_owned()),
        stroke_color_for(target_node.color()),
    )
}

/// Toolbox catalog: the templates a user can drag onto the canvas.
pub fn toolbox_templates() -> Vec<CategoryTemplate> {
    vec![
        CategoryTemplate::new("Evidências", "bg-red-100"),
        CategoryTemplate::new("Depoimentos", "bg-blue-100"),
        CategoryTemplate::new("Suspeitos", "bg-yellow-100"),
        CategoryTemplate::new("Cronologia", "bg-green-100"),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{seed_board, toolbox_templates};
    use crate::model::{derive_icon, IdGen};

    #[test]
    fn seed_has_three_categories_and_two_edges() {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let board = seed_board(now);

        let labels: Vec<&str> = board.nodes().iter().map(|n| n.label()).collect();
        assert_eq!(labels, vec!["Evidências Físicas", "Depoimentos", "Suspeitos"]);

        let endpoints: Vec<(&str, &str)> = board
            .edges()
            .iter()
            .map(|e| (e.source().as_str(), e.target().as_str()))
            .collect();
        assert_eq!(
            endpoints,
            vec![("group-1", "group-2"), ("group-2", "group-3")]
        );

        // edge presentation derives from the target category
        assert_eq!(board.edges()[0].label(), Some("Depoimentos"));
        assert_eq!(board.edges()[0].style().stroke, "#3b82f6");
        assert_eq!(board.edges()[1].label(), Some("Suspeitos"));
        assert_eq!(board.edges()[1].style().stroke, "#eab308");
    }

    #[test]
    fn seed_clue_orders_are_dense_per_category() {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let board = seed_board(now);

        for node in board.nodes() {
            let orders: Vec<usize> = node.clues().iter().map(|c| c.order()).collect();
            let expected: Vec<usize> = (0..node.clues().len()).collect();
            assert_eq!(orders, expected, "category {}", node.category_id());
            assert!(node.clues().iter().all(|c| c.group_id() == node.category_id()));
        }
    }

    #[test]
    fn id_gen_seeded_from_seed_board_starts_above_loaded_ids() {
        let now = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let board = seed_board(now);

        let mut ids = IdGen::seeded_from(&board);
        // highest numeric suffix on the seed is clue-4
        assert_eq!(ids.category_id().as_str(), "group-5");
    }

    #[test]
    fn toolbox_templates_cover_the_four_categories() {
        let templates = toolbox_templates();
        let labels: Vec<&str> = templates.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Evidências", "Depoimentos", "Suspeitos", "Cronologia"]
        );
        // every template resolves to a distinct icon
        let icons: Vec<_> = templates.iter().map(|t| derive_icon(&t.label)).collect();
        assert_eq!(icons.len(), 4);
        for (i, a) in icons.iter().enumerate() {
            for b in &icons[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
