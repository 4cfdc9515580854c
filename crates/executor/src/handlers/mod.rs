//! Command handlers, one module per command family.

pub mod analysis;
pub mod config;
pub mod graph;
