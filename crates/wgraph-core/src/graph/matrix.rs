use super::Weight;

/// Dense symmetric weight matrix keyed by node index.
///
/// Invariants:
/// - the matrix is square, `size * size` cells stored row-major
/// - `weight(i, j) == weight(j, i)` and `is_adjacent(i, j) == is_adjacent(j, i)`
///
/// Presence is tracked separately from the weight, so an edge of weight `0`
/// is distinguishable from a missing edge. Absent cells read as weight `0`.
///
/// Indices must lie in `[0, size)`; anything else panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    weights: Vec<Weight>,
    present: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Create a `size` x `size` matrix with no edges
    pub fn new(size: usize) -> Self {
        Self {
            size,
            weights: vec![0; size * size],
            present: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn cell(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "index ({row}, {col}) out of bounds for adjacency matrix of size {}",
            self.size
        );
        row * self.size + col
    }

    /// Store an undirected edge between `a` and `b`
    pub fn add_edge(&mut self, a: usize, b: usize, weight: Weight) {
        let ab = self.cell(a, b);
        let ba = self.cell(b, a);
        self.weights[ab] = weight;
        self.weights[ba] = weight;
        self.present[ab] = true;
        self.present[ba] = true;
    }

    /// Weight stored between `a` and `b`, `0` when they are not adjacent
    pub fn weight(&self, a: usize, b: usize) -> Weight {
        self.weights[self.cell(a, b)]
    }

    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.present[self.cell(a, b)]
    }

    /// Copy of row `index`; changing it does not affect the matrix
    pub fn adjacent(&self, index: usize) -> Vec<Weight> {
        let start = self.cell(index, 0);
        self.weights[start..start + self.size].to_vec()
    }

    /// Indices adjacent to `index` paired with the edge weight
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let start = self.cell(index, 0);
        (0..self.size)
            .filter(move |col| self.present[start + col])
            .map(move |col| (col, self.weights[start + col]))
    }
}
