//! Engine Integration Tests
//!
//! These tests drive the engine the way a search orchestrator does:
//! - successive searches merged into one shared store
//! - metrics computed over the accumulated graph
//! - classification committed back through the store
//! - concurrent readers while merges are in flight

use std::sync::Arc;
use std::thread;

use citegraph_core::{
    CitationLabel, CiteError, EdgeRecord, EngineConfig, MergeBatch, VertexKind, VertexRecord,
};
use citegraph_engine::{GraphStore, MetricsEngine, MetricsFlags, MetricsRequest};

fn search_one() -> MergeBatch {
    MergeBatch::new(
        vec![
            VertexRecord::new("W1")
                .title("Attention Is All You Need")
                .authors(["A. Vaswani", "N. Shazeer"])
                .year(2017)
                .layer(0)
                .kind(VertexKind::Root)
                .origin("openalex"),
            VertexRecord::new("W2")
                .title("Neural Machine Translation")
                .authors(["D. Bahdanau"])
                .layer(1)
                .kind(VertexKind::Reference),
            VertexRecord::new("W3")
                .title("Outrageously Large Neural Networks")
                .authors(["N. Shazeer"])
                .layer(1)
                .kind(VertexKind::Reference),
        ],
        vec![EdgeRecord::new("W1", "W2"), EdgeRecord::new("W1", "W3")],
    )
}

fn search_two() -> MergeBatch {
    MergeBatch::new(
        vec![
            // Same article seen again with less metadata
            VertexRecord::new("W1").citation_count(90_000),
            VertexRecord::new("W4")
                .title("BERT")
                .authors(["J. Devlin"])
                .layer(1)
                .kind(VertexKind::Citation),
        ],
        vec![
            EdgeRecord::new("W4", "W1"),
            EdgeRecord::new("W1", "W2"),
            EdgeRecord::new("W4", "W9"),
        ],
    )
}

/// Test: two searches accumulate without duplication or data loss
#[test]
fn test_successive_searches_accumulate() {
    let gs = GraphStore::new();

    let first = gs.merge(search_one()).unwrap();
    assert_eq!(first.vertices_new, 3);
    assert_eq!(first.edges_new, 2);

    let second = gs.merge(search_two()).unwrap();
    assert_eq!(second.vertices_new, 2); // W4 + stub W9
    assert_eq!(second.vertices_updated, 1);
    assert_eq!(second.edges_new, 2);
    assert_eq!(second.edges_existing, 1);
    assert_eq!(second.stubs_created, 1);

    let w1 = gs.get_vertex("W1").unwrap();
    assert_eq!(w1.vertex.authors, vec!["A. Vaswani", "N. Shazeer"]);
    assert_eq!(w1.vertex.citation_count, 90_000);
    assert_eq!(w1.vertex.kind, VertexKind::Root);
    assert_eq!(w1.vertex.origin.as_deref(), Some("openalex"));
    assert_eq!(w1.in_degree, 1);
    assert_eq!(w1.out_degree, 2);

    let stats = gs.statistics();
    assert_eq!(stats.num_vertices, 5);
    assert_eq!(stats.num_edges, 4);
    assert!((stats.density - 4.0 / 20.0).abs() < 1e-12);
}

/// Test: metrics over the accumulated graph
#[test]
fn test_metrics_over_merged_graph() {
    let gs = GraphStore::new();
    gs.merge(search_one()).unwrap();
    gs.merge(search_two()).unwrap();

    let engine = MetricsEngine::new(EngineConfig::default());
    let result = engine
        .compute(&gs.snapshot(), &MetricsRequest::new(MetricsFlags::all()))
        .unwrap();

    assert_eq!(result.num_vertices, 5);
    assert_eq!(result.top_degree[0].id, "W1");
    assert_eq!(result.top_degree[0].title, "Attention Is All You Need");

    let pr = result.pagerank.unwrap();
    let total: f64 = pr.ranking.scores.values().sum();
    assert!((total - 1.0).abs() < 1e-6);
    assert!(pr.iterations >= 1);

    // W1 is the only vertex on a path between others
    let bc = result.betweenness.unwrap();
    assert_eq!(bc.top[0].id, "W1");
    assert!(bc.scores["W1"] > 0.0);

    let cc = result.closeness.unwrap();
    assert_eq!(cc.scores["W2"], 0.0);
    assert!(cc.scores["W4"] > cc.scores["W1"]);
}

/// Test: classification committed through the store
#[test]
fn test_classification_round() {
    let gs = GraphStore::new();
    gs.merge(search_one()).unwrap();
    gs.merge(search_two()).unwrap();

    let out = gs.classify_citations();
    let label = |id: &str| out.snapshot.vertex(id).unwrap().label;

    // W1 and W3 share N. Shazeer
    assert_eq!(label("W1"), CitationLabel::AB);
    assert_eq!(label("W3"), CitationLabel::B);
    assert_eq!(label("W2"), CitationLabel::A);
    assert_eq!(label("W4"), CitationLabel::A);
    assert_eq!(label("W9"), CitationLabel::S);

    assert_eq!(out.report.summary.total, 5);
    assert_eq!(out.report.pass_two.samples.len(), 1);
    assert_eq!(
        out.report.pass_two.samples[0].citer_title,
        "Attention Is All You Need"
    );

    let detail = gs.get_vertex("W1").unwrap();
    assert_eq!(detail.color, Some("green"));

    // A later merge keeps labels until the next run
    gs.merge(MergeBatch::new(vec![VertexRecord::new("W3").year(2017)], vec![]))
        .unwrap();
    assert_eq!(gs.get_vertex("W3").unwrap().vertex.label, CitationLabel::B);
}

/// Test: strict merge leaves the store untouched
#[test]
fn test_strict_merge_rejects_unknown_endpoint() {
    let gs = GraphStore::with_config(
        &EngineConfig::from_toml_str(r#"edge_policy = "reject""#).unwrap(),
    );
    gs.merge(search_one()).unwrap();
    let before = gs.snapshot();

    let err = gs.merge(search_two()).unwrap_err();
    assert!(matches!(err, CiteError::InvalidEdge { ref to, .. } if to == "W9"));
    assert_eq!(gs.snapshot().to_view(), before.to_view());
    assert_eq!(gs.generation(), before.generation());
}

/// Test: concurrent readers always see whole batches
#[test]
fn test_readers_never_see_partial_merge() {
    let gs = Arc::new(GraphStore::new());

    let writer = {
        let gs = Arc::clone(&gs);
        thread::spawn(move || {
            for i in 0..200 {
                let from = format!("v{}", i);
                let to = format!("v{}", i + 1);
                gs.merge(MergeBatch::new(
                    vec![VertexRecord::new(from.clone()), VertexRecord::new(to.clone())],
                    vec![EdgeRecord::new(from, to)],
                ))
                .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let gs = Arc::clone(&gs);
            thread::spawn(move || {
                for _ in 0..200 {
                    let snap = gs.snapshot();
                    // Each batch adds exactly one edge and one new vertex after the first
                    if !snap.is_empty() {
                        assert_eq!(snap.vertex_count(), snap.edge_count() + 1);
                    }
                    for e in snap.edges() {
                        assert!(snap.vertex(&e.from).is_some());
                        assert!(snap.vertex(&e.to).is_some());
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(gs.snapshot().edge_count(), 200);
}

/// Test: metrics and classification may run in parallel with merges
#[test]
fn test_metrics_alongside_classification() {
    let gs = Arc::new(GraphStore::new());
    gs.merge(search_one()).unwrap();

    let snap = gs.snapshot();
    let metrics = thread::spawn(move || {
        MetricsEngine::default()
            .compute(&snap, &MetricsRequest::new(MetricsFlags::all()))
            .unwrap()
    });
    let classify = {
        let gs = Arc::clone(&gs);
        thread::spawn(move || gs.classify_citations())
    };

    let result = metrics.join().unwrap();
    let outcome = classify.join().unwrap();
    assert_eq!(result.num_vertices, 3);
    assert_eq!(outcome.report.summary.total, 3);
}
