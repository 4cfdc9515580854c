//! Metric bounds.

use citegraph::{EngineConfig, GraphStore, MetricsEngine, MetricsFlags, MetricsRequest};
use proptest::prelude::*;

use crate::strategies::arb_batch;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn density_is_a_fraction(batch in arb_batch()) {
        let store = GraphStore::new();
        store.merge(batch).unwrap();
        let stats = store.statistics();
        prop_assert!((0.0..=1.0).contains(&stats.density));
        if stats.num_vertices < 2 {
            prop_assert_eq!(stats.density, 0.0);
        }
    }

    #[test]
    fn pagerank_sums_to_one(batch in arb_batch()) {
        let store = GraphStore::new();
        store.merge(batch).unwrap();
        let snapshot = store.snapshot();
        prop_assume!(!snapshot.is_empty());

        let engine = MetricsEngine::new(EngineConfig::default());
        let result = engine
            .compute(&snapshot, &MetricsRequest::new(MetricsFlags::all()))
            .unwrap();

        let pagerank = result.pagerank.unwrap();
        let sum: f64 = pagerank.ranking.scores.values().sum();
        prop_assert!((sum - 1.0).abs() < 1e-6, "sum = {}", sum);

        for score in result.betweenness.unwrap().scores.values() {
            prop_assert!(*score >= 0.0 && score.is_finite());
        }
        for score in result.closeness.unwrap().scores.values() {
            prop_assert!((0.0..=1.0 + 1e-9).contains(score));
        }
        prop_assert_eq!(result.degree_centrality.len(), snapshot.vertex_count());
    }
}
