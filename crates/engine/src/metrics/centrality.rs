//! Centrality measures: degree, betweenness (Brandes) and closeness.
//!
//! All scores are indexed like the snapshot's vertices. Edges are treated as
//! unweighted and directed.

use std::collections::VecDeque;

use rayon::prelude::*;

use crate::graph::adjacency::AdjacencyIndex;
use crate::graph::types::{GraphAlgorithm, GraphSnapshot};

/// `(in + out) / (n - 1)` per vertex; all zeros when `n <= 1`.
pub fn degree_centrality(snapshot: &GraphSnapshot) -> Vec<f64> {
    let n = snapshot.vertex_count();
    if n <= 1 {
        return vec![0.0; n];
    }
    let adjacency = snapshot.adjacency();
    let denom = (n - 1) as f64;
    (0..n)
        .map(|i| (adjacency.degree_in(i) + adjacency.degree_out(i)) as f64 / denom)
        .collect()
}

/// Betweenness centrality via Brandes' algorithm, normalized by
/// `(n - 1)(n - 2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Betweenness;

impl GraphAlgorithm for Betweenness {
    type Output = Vec<f64>;

    fn execute(&self, snapshot: &GraphSnapshot) -> Vec<f64> {
        let n = snapshot.vertex_count();
        if n < 3 {
            return vec![0.0; n];
        }
        let adjacency = snapshot.adjacency();
        let mut bc = vec![0.0_f64; n];

        let mut stack: Vec<usize> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0_f64; n];
        let mut dist = vec![-1i64; n];
        let mut delta = vec![0.0_f64; n];
        let mut queue = VecDeque::new();

        for s in 0..n {
            stack.clear();
            predecessors.iter_mut().for_each(Vec::clear);
            sigma.iter_mut().for_each(|x| *x = 0.0);
            dist.iter_mut().for_each(|x| *x = -1);
            delta.iter_mut().for_each(|x| *x = 0.0);

            sigma[s] = 1.0;
            dist[s] = 0;
            queue.push_back(s);

            while let Some(v) = queue.pop_front() {
                stack.push(v);
                for &w in adjacency.outgoing(v) {
                    if dist[w] < 0 {
                        queue.push_back(w);
                        dist[w] = dist[v] + 1;
                    }
                    if dist[w] == dist[v] + 1 {
                        sigma[w] += sigma[v];
                        predecessors[w].push(v);
                    }
                }
            }

            // Back-propagation
            while let Some(w) = stack.pop() {
                for &v in &predecessors[w] {
                    delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
                }
                if w != s {
                    bc[w] += delta[w];
                }
            }
        }

        let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
        bc.iter_mut().for_each(|b| *b *= scale);
        bc
    }
}

/// Closeness centrality with the Wasserman–Faust correction for graphs that
/// are not strongly connected: `(r / D) * (r / (n - 1))`, where `r` vertices
/// are reachable at total distance `D`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Closeness;

impl GraphAlgorithm for Closeness {
    type Output = Vec<f64>;

    fn execute(&self, snapshot: &GraphSnapshot) -> Vec<f64> {
        let n = snapshot.vertex_count();
        if n <= 1 {
            return vec![0.0; n];
        }
        let adjacency = snapshot.adjacency();
        (0..n)
            .into_par_iter()
            .map(|s| closeness_from(adjacency, s, n))
            .collect()
    }
}

fn closeness_from(adjacency: &AdjacencyIndex, s: usize, n: usize) -> f64 {
    let mut dist = vec![-1i64; n];
    dist[s] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(s);
    let mut total_dist = 0i64;
    let mut reachable = 0usize;

    while let Some(v) = queue.pop_front() {
        for &w in adjacency.outgoing(v) {
            if dist[w] < 0 {
                dist[w] = dist[v] + 1;
                total_dist += dist[w];
                reachable += 1;
                queue.push_back(w);
            }
        }
    }

    if reachable == 0 {
        return 0.0;
    }
    let r = reachable as f64;
    (r / total_dist as f64) * (r / (n - 1) as f64)
}
