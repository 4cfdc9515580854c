//! Property Test Suite
//!
//! Randomized checks of the graph, metrics and classifier invariants over
//! small generated citation graphs.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test properties
//! ```

mod strategies;

mod classify_properties;
mod merge_properties;
mod metrics_properties;
