//! Independent oracles for MST property verification.
//!
//! Two references that share no code with Kruskal: exhaustive search over
//! every edge subset (tiny graphs only) and a dense Prim's algorithm that
//! restarts on each unvisited vertex to cover forests.

use crate::Edge;

use super::helpers::{count_components, find_root};

/// Weight and shape of a reference spanning forest.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    /// Total weight of the forest.
    pub total_weight: u128,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components spanned.
    pub component_count: usize,
}

/// Finds a minimum spanning forest by checking every edge subset.
///
/// Only usable for a handful of edges; callers keep graphs at or below
/// [`super::strategies::EXHAUSTIVE_MAX_VERTICES`] vertices.
pub(super) fn exhaustive_minimum(vertex_count: usize, edges: &[Edge]) -> OracleForest {
    assert!(edges.len() <= 20, "exhaustive oracle needs a small edge list");
    let component_count = count_components(vertex_count, edges.iter().map(Edge::endpoints));
    let wanted = vertex_count - component_count;

    let mut best: Option<u128> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != wanted {
            continue;
        }
        let chosen = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| edge);
        if let Some(weight) = acyclic_weight(vertex_count, chosen) {
            best = Some(best.map_or(weight, |current| current.min(weight)));
        }
    }

    OracleForest {
        total_weight: best.unwrap_or(0),
        edge_count: wanted,
        component_count,
    }
}

fn acyclic_weight<'a>(
    vertex_count: usize,
    edges: impl Iterator<Item = &'a Edge>,
) -> Option<u128> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut total = 0;
    for edge in edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.destination());
        if left == right {
            return None;
        }
        parent[right] = left;
        total += u128::from(edge.weight());
    }
    Some(total)
}

/// Computes a minimum spanning forest with dense Prim's algorithm.
pub(super) fn prim(vertex_count: usize, edges: &[Edge]) -> OracleForest {
    let mut matrix: Vec<Vec<Option<u64>>> = vec![vec![None; vertex_count]; vertex_count];
    for edge in edges.iter().filter(|edge| !edge.is_self_loop()) {
        let (u, v) = edge.endpoints();
        let lighter = matrix[u][v].map_or(edge.weight(), |w| w.min(edge.weight()));
        matrix[u][v] = Some(lighter);
        matrix[v][u] = Some(lighter);
    }

    let mut in_tree = vec![false; vertex_count];
    let mut best: Vec<Option<u64>> = vec![None; vertex_count];
    let mut total_weight = 0;
    let mut edge_count = 0;
    let mut component_count = 0;

    for _ in 0..vertex_count {
        let next = (0..vertex_count)
            .filter(|&v| !in_tree[v])
            .min_by_key(|&v| (best[v].is_none(), best[v], v));
        let Some(vertex) = next else { break };
        match best[vertex] {
            Some(weight) => {
                total_weight += u128::from(weight);
                edge_count += 1;
            }
            None => component_count += 1,
        }
        in_tree[vertex] = true;
        for neighbour in 0..vertex_count {
            if let Some(weight) = matrix[vertex][neighbour] {
                if !in_tree[neighbour] && best[neighbour].is_none_or(|current| weight < current) {
                    best[neighbour] = Some(weight);
                }
            }
        }
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count,
    }
}
