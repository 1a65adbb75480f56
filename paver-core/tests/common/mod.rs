use paver_core::Graph;

/// Six-site campus edges with fixed weights; the MST totals 11 and hubs
/// `[2, 3, 5]` paint 8.
pub const CAMPUS: [(usize, usize, i64); 9] = [
    (0, 1, 5),
    (0, 2, 3),
    (1, 2, 1),
    (1, 3, 4),
    (1, 4, 2),
    (2, 3, 6),
    (3, 4, 2),
    (3, 5, 7),
    (4, 5, 3),
];

#[must_use]
pub fn campus() -> Graph {
    Graph::from_triples(6, CAMPUS).expect("campus graph is valid")
}
