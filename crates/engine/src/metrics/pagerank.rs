//! PageRank via power iteration.

use crate::graph::types::{GraphAlgorithm, GraphSnapshot};

/// PageRank parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRank {
    /// Damping factor `d`.
    pub damping: f64,
    /// Iteration cap.
    pub max_iterations: usize,
    /// L1 convergence threshold.
    pub epsilon: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            epsilon: 1e-6,
        }
    }
}

/// Ranks indexed like the snapshot's vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankScores {
    /// One rank per vertex; sums to 1 for a non-empty graph.
    pub scores: Vec<f64>,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether the L1 change fell below epsilon before the cap.
    pub converged: bool,
}

impl GraphAlgorithm for PageRank {
    type Output = PageRankScores;

    /// Rank of dangling vertices is spread uniformly over all vertices each
    /// iteration, which keeps the total mass at 1.
    fn execute(&self, snapshot: &GraphSnapshot) -> PageRankScores {
        let n = snapshot.vertex_count();
        if n == 0 {
            return PageRankScores {
                scores: Vec::new(),
                iterations: 0,
                converged: true,
            };
        }

        let adjacency = snapshot.adjacency();
        let d = self.damping;
        let nf = n as f64;

        let mut scores = vec![1.0 / nf; n];
        let mut next = vec![0.0_f64; n];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            let dangling: f64 = (0..n)
                .filter(|&u| adjacency.degree_out(u) == 0)
                .map(|u| scores[u])
                .sum();
            let base = (1.0 - d) / nf + d * dangling / nf;
            next.iter_mut().for_each(|s| *s = base);

            for (u, &rank) in scores.iter().enumerate() {
                let targets = adjacency.outgoing(u);
                if targets.is_empty() {
                    continue;
                }
                let share = d * rank / targets.len() as f64;
                for &v in targets {
                    next[v] += share;
                }
            }

            let diff: f64 = scores
                .iter()
                .zip(next.iter())
                .map(|(a, b)| (a - b).abs())
                .sum();
            std::mem::swap(&mut scores, &mut next);

            if diff < self.epsilon {
                converged = true;
                break;
            }
        }

        PageRankScores {
            scores,
            iterations,
            converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphStore;
    use citegraph_core::{EdgeRecord, MergeBatch};

    fn snapshot(edges: &[(&str, &str)]) -> std::sync::Arc<GraphSnapshot> {
        let gs = GraphStore::new();
        let edges = edges.iter().map(|(f, t)| EdgeRecord::new(*f, *t)).collect();
        gs.merge(MergeBatch::new(vec![], edges)).unwrap();
        gs.snapshot()
    }

    fn total(scores: &[f64]) -> f64 {
        scores.iter().sum()
    }

    #[test]
    fn empty_graph_has_no_scores() {
        let out = PageRank::default().execute(&GraphSnapshot::default());
        assert!(out.scores.is_empty());
        assert!(out.converged);
        assert_eq!(out.iterations, 0);
    }

    #[test]
    fn cycle_is_uniform() {
        let snap = snapshot(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let out = PageRank::default().execute(&snap);
        assert!(out.converged);
        for s in &out.scores {
            assert!((s - 1.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn dangling_mass_is_preserved() {
        let snap = snapshot(&[("a", "b"), ("c", "b")]);
        let out = PageRank::default().execute(&snap);
        assert!((total(&out.scores) - 1.0).abs() < 1e-6);
        let b = snap.index_of("b").unwrap();
        let a = snap.index_of("a").unwrap();
        assert!(out.scores[b] > out.scores[a]);
    }

    #[test]
    fn self_loop_is_handled() {
        let snap = snapshot(&[("a", "a"), ("a", "b")]);
        let out = PageRank::default().execute(&snap);
        assert!((total(&out.scores) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn iteration_cap_reports_unconverged() {
        let snap = snapshot(&[("a", "b"), ("b", "c")]);
        let pr = PageRank {
            max_iterations: 1,
            epsilon: 1e-12,
            ..PageRank::default()
        };
        let out = pr.execute(&snap);
        assert_eq!(out.iterations, 1);
        assert!(!out.converged);
        assert!((total(&out.scores) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_damping_is_uniform() {
        let snap = snapshot(&[("a", "b"), ("c", "b")]);
        let pr = PageRank {
            damping: 0.0,
            ..PageRank::default()
        };
        let out = pr.execute(&snap);
        for s in &out.scores {
            assert!((s - 1.0 / 3.0).abs() < 1e-9);
        }
    }
}
