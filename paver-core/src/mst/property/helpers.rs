//! Shared helper functions for MST property-based tests.

/// Path-halving find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts connected components of the graph induced by `pairs`.
pub(super) fn count_components(
    vertex_count: usize,
    pairs: impl IntoIterator<Item = (usize, usize)>,
) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for (left, right) in pairs {
        let left_root = find_root(&mut parent, left);
        let right_root = find_root(&mut parent, right);
        if left_root != right_root {
            parent[right_root] = left_root;
            components -= 1;
        }
    }
    components
}
