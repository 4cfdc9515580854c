//! Shared generators.

use citegraph::{EdgeRecord, MergeBatch, VertexRecord};
use proptest::prelude::*;

/// Ids are drawn from a small pool so batches overlap and collide.
pub const ID_POOL: usize = 8;

const AUTHORS: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];

pub fn arb_id() -> impl Strategy<Value = String> {
    (0..ID_POOL).prop_map(|i| format!("W{}", i))
}

pub fn arb_authors() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(AUTHORS.to_vec(), 0..=2)
        .prop_map(|names| names.into_iter().map(String::from).collect())
}

pub fn arb_vertex() -> impl Strategy<Value = VertexRecord> {
    (
        arb_id(),
        proptest::option::of("[a-z]{1,8}"),
        arb_authors(),
        proptest::option::of(1990i32..2030),
    )
        .prop_map(|(id, title, authors, year)| {
            let mut record = VertexRecord::new(id).authors(authors);
            if let Some(title) = title {
                record = record.title(title);
            }
            if let Some(year) = year {
                record = record.year(year);
            }
            record
        })
}

pub fn arb_edge() -> impl Strategy<Value = EdgeRecord> {
    (arb_id(), arb_id()).prop_map(|(from, to)| EdgeRecord::new(from, to))
}

pub fn arb_batch() -> impl Strategy<Value = MergeBatch> {
    (
        proptest::collection::vec(arb_vertex(), 0..8),
        proptest::collection::vec(arb_edge(), 0..16),
    )
        .prop_map(|(vertices, edges)| MergeBatch::new(vertices, edges))
}
