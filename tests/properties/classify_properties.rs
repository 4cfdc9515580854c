//! Classifier invariants.

use citegraph::{CitationLabel, GraphStore};
use proptest::prelude::*;

use crate::strategies::arb_batch;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn classification_is_idempotent(batch in arb_batch()) {
        let store = GraphStore::new();
        store.merge(batch).unwrap();

        let first = store.classify_citations();
        let second = store.classify_citations();
        prop_assert_eq!(first.snapshot.to_view(), second.snapshot.to_view());
        prop_assert_eq!(first.report.summary, second.report.summary);
    }

    #[test]
    fn every_vertex_gets_a_final_label(batch in arb_batch()) {
        let store = GraphStore::new();
        store.merge(batch).unwrap();
        let outcome = store.classify_citations();

        let summary = &outcome.report.summary;
        prop_assert_eq!(summary.total, outcome.snapshot.vertex_count());
        prop_assert_eq!(summary.a + summary.b + summary.ab + summary.s, summary.total);

        for v in outcome.snapshot.vertices() {
            prop_assert_ne!(v.label, CitationLabel::Unset);
            // Authorless vertices stay S whatever cites them.
            if v.authors.is_empty() {
                prop_assert_eq!(v.label, CitationLabel::S);
            }
        }
    }

    #[test]
    fn every_self_citation_component_has_a_root(batch in arb_batch()) {
        let store = GraphStore::new();
        store.merge(batch).unwrap();
        let outcome = store.classify_citations();

        // A non-empty set of B-or-AB vertices always contains at least one AB.
        let cited = outcome
            .snapshot
            .vertices()
            .iter()
            .filter(|v| matches!(v.label, CitationLabel::B | CitationLabel::AB))
            .count();
        if cited > 0 {
            prop_assert!(outcome.report.summary.ab > 0);
        }
    }
}
