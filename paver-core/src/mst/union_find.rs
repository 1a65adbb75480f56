//! Union-find (disjoint set union) used by the Kruskal builder.
//!
//! `find` compresses the full path in two passes: the first locates the root,
//! the second re-points every visited node at it. Union is by rank; on equal
//! ranks the second root is attached under the first.

use crate::{error::GraphError, graph::check_vertex};

/// A partition of `[0, n)` into disjoint sets.
///
/// # Examples
/// ```
/// use paver_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert_eq!(sets.find(1)?, sets.find(0)?);
/// assert_eq!(sets.components(), 3);
/// # Ok::<(), paver_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns the representative of the set containing `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> Result<usize, GraphError> {
        check_vertex(node, self.parent.len())?;

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != current {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both already share a representative.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either id is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, GraphError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (parent, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        self.parent[child] = parent;
        if left_rank == right_rank {
            self.rank[parent] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, node: usize) -> u8 {
        self.rank[node]
    }
}
