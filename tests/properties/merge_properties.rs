//! Merge invariants.

use std::collections::BTreeSet;

use citegraph::{EdgePolicy, EdgeRecord, GraphStore, MergeBatch, VertexRecord};
use proptest::prelude::*;

use crate::strategies::{arb_batch, arb_edge};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn merge_is_idempotent(batch in arb_batch()) {
        let store = GraphStore::new();
        store.merge(batch.clone()).unwrap();
        let before = store.snapshot().to_view();

        let again = store.merge(batch).unwrap();
        prop_assert_eq!(again.vertices_new, 0);
        prop_assert_eq!(again.edges_new, 0);
        prop_assert_eq!(again.stubs_created, 0);
        prop_assert_eq!(store.snapshot().to_view(), before);
    }

    #[test]
    fn edges_alone_create_stubs(edges in proptest::collection::vec(arb_edge(), 1..16)) {
        let store = GraphStore::new();
        let stats = store.merge(MergeBatch::new(vec![], edges.clone())).unwrap();

        let endpoints: BTreeSet<&str> = edges
            .iter()
            .flat_map(|e| [e.from.as_str(), e.to.as_str()])
            .collect();
        let pairs: BTreeSet<(&str, &str)> = edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect();

        let snapshot = store.snapshot();
        prop_assert_eq!(snapshot.vertex_count(), endpoints.len());
        prop_assert_eq!(snapshot.edge_count(), pairs.len());
        prop_assert_eq!(stats.stubs_created, endpoints.len());
    }

    #[test]
    fn degrees_sum_to_edge_count(batch in arb_batch()) {
        let store = GraphStore::new();
        store.merge(batch).unwrap();
        let snapshot = store.snapshot();

        let mut total_in = 0;
        let mut total_out = 0;
        for v in snapshot.vertices() {
            total_in += snapshot.in_degree(&v.id).unwrap();
            total_out += snapshot.out_degree(&v.id).unwrap();
        }
        prop_assert_eq!(total_in, snapshot.edge_count());
        prop_assert_eq!(total_out, snapshot.edge_count());
    }

    #[test]
    fn rejected_strict_batch_leaves_store_unchanged(
        seed in arb_batch(),
        batch in arb_batch(),
    ) {
        let store = GraphStore::new();
        store.merge(seed).unwrap();
        let before = store.snapshot();

        // An endpoint outside the id pool is always unknown.
        let mut batch = batch;
        batch.edges.push(EdgeRecord::new("W0", "missing"));
        prop_assert!(store.merge_with_policy(batch, EdgePolicy::Reject).is_err());

        let after = store.snapshot();
        prop_assert_eq!(after.generation(), before.generation());
        prop_assert_eq!(after.to_view(), before.to_view());
    }
}

#[test]
fn empty_authors_never_erase() {
    let store = GraphStore::new();
    store
        .merge(MergeBatch::new(
            vec![VertexRecord::new("W1").authors(["A. Smith"])],
            vec![],
        ))
        .unwrap();
    store
        .merge(MergeBatch::new(
            vec![VertexRecord::new("W1").title("Later").authors(Vec::<String>::new())],
            vec![],
        ))
        .unwrap();

    let detail = store.get_vertex("W1").unwrap();
    assert_eq!(detail.vertex.authors, vec!["A. Smith".to_string()]);
    assert_eq!(detail.vertex.title.as_deref(), Some("Later"));
}
