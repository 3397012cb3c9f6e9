//! Shared helpers for integration tests

use bareme_engine::{Branch, Condition, Node, NodeKind, Reduction, TreeDocument};
use rust_decimal::Decimal;

/// Parse a decimal literal
pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Catch-all branch with no reduction
pub fn catchall(id: &str) -> Branch {
    Branch::new(id, "any", "Anyone", Condition::CatchAll)
}

/// A community branch (−10%) opening a senior sub-chain (−5 fixed),
/// alongside a catch-all — the shape of a typical authored tree
pub fn community_with_senior_child() -> TreeDocument {
    use bareme_core::document::condition::{AgeTest, CommuneScope};

    TreeDocument::new().add_node(
        Node::new("commune", NodeKind::Commune)
            .with_order(1)
            .add_branch(
                Branch::new(
                    "b-community",
                    "in-community",
                    "Community resident",
                    Condition::commune(CommuneScope::Community, vec!["cc-vallee".to_string()]),
                )
                .with_reduction(Reduction::percentage(Decimal::from(10)))
                .add_child(
                    Node::new("age", NodeKind::Age)
                        .add_branch(
                            Branch::new(
                                "b-senior",
                                "senior",
                                "65 and over",
                                Condition::age(AgeTest::Gte { value: 65 }),
                            )
                            .with_reduction(Reduction::fixed(Decimal::from(5))),
                        )
                        .add_branch(catchall("b-age-any")),
                ),
            )
            .add_branch(catchall("b-elsewhere")),
    )
}
