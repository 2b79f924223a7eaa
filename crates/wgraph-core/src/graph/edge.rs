use super::Node;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Integer weight carried by an edge
pub type Weight = i32;

/// An undirected, weighted connection between two nodes.
///
/// `Edge::new(a, b, w)` and `Edge::new(b, a, w)` are the same edge: equality,
/// hashing and ordering only look at the unordered endpoint pair and the
/// weight. [`Edge::a`] and [`Edge::b`] still report the endpoints in the
/// order they were given.
///
/// Edges order by weight first and then by their canonical endpoint pair
/// (lower node, higher node), which gives Kruskal a deterministic scan order.
#[derive(Debug, Clone)]
pub struct Edge<N> {
    a: N,
    b: N,
    weight: Weight,
}

impl<N: Node> Edge<N> {
    pub fn new(a: N, b: N, weight: Weight) -> Self {
        Self { a, b, weight }
    }

    pub fn a(&self) -> &N {
        &self.a
    }

    pub fn b(&self) -> &N {
        &self.b
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Both endpoints in construction order
    pub fn endpoints(&self) -> (&N, &N) {
        (&self.a, &self.b)
    }

    /// Both endpoints with the lower node first
    pub fn canonical(&self) -> (&N, &N) {
        if self.a <= self.b {
            (&self.a, &self.b)
        } else {
            (&self.b, &self.a)
        }
    }

    pub fn contains(&self, node: &N) -> bool {
        &self.a == node || &self.b == node
    }

    /// The endpoint opposite `node`, or `None` if `node` is not an endpoint
    pub fn other(&self, node: &N) -> Option<&N> {
        if &self.a == node {
            Some(&self.b)
        } else if &self.b == node {
            Some(&self.a)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// Whether both edges connect the same unordered pair, regardless of weight
    pub fn same_pair(&self, other: &Edge<N>) -> bool {
        self.canonical() == other.canonical()
    }
}

impl<N: Node> PartialEq for Edge<N> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.same_pair(other)
    }
}

impl<N: Node> Eq for Edge<N> {}

impl<N: Node> Hash for Edge<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
        self.weight.hash(state);
    }
}

impl<N: Node> PartialOrd for Edge<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Node> Ord for Edge<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.canonical().cmp(&other.canonical()))
    }
}

impl<N: Node> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -[{}]- {:?}", self.a, self.weight, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::BTreeSet;

    fn hash_of(edge: &Edge<&str>) -> u64 {
        let mut hasher = DefaultHasher::new();
        edge.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_is_symmetric() {
        let ab = Edge::new("a", "b", 4);
        let ba = Edge::new("b", "a", 4);
        assert_eq!(ab, ba);
        assert_eq!(hash_of(&ab), hash_of(&ba));
        assert_eq!(ab.cmp(&ba), Ordering::Equal);
    }

    #[test]
    fn test_weight_is_part_of_identity() {
        assert_ne!(Edge::new("a", "b", 1), Edge::new("a", "b", 2));
        assert!(Edge::new("a", "b", 1).same_pair(&Edge::new("b", "a", 2)));
    }

    #[test]
    fn test_endpoints_keep_construction_order() {
        let edge = Edge::new("z", "a", 3);
        assert_eq!(edge.endpoints(), (&"z", &"a"));
        assert_eq!(edge.canonical(), (&"a", &"z"));
    }

    #[test]
    fn test_order_by_weight_then_endpoints() {
        let mut edges = vec![
            Edge::new("c", "d", 2),
            Edge::new("b", "a", 2),
            Edge::new("x", "y", 1),
            Edge::new("a", "c", 2),
        ];
        edges.sort();
        let canonical: Vec<_> = edges.iter().map(|e| e.canonical()).collect();
        assert_eq!(
            canonical,
            vec![(&"x", &"y"), (&"a", &"b"), (&"a", &"c"), (&"c", &"d")]
        );
    }

    #[test]
    fn test_set_collapses_reversed_duplicates() {
        let set: BTreeSet<_> = [Edge::new(1, 2, 5), Edge::new(2, 1, 5)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_other_endpoint() {
        let edge = Edge::new('a', 'b', 0);
        assert_eq!(edge.other(&'a'), Some(&'b'));
        assert_eq!(edge.other(&'b'), Some(&'a'));
        assert_eq!(edge.other(&'c'), None);

        let looped = Edge::new('a', 'a', 1);
        assert!(looped.is_self_loop());
        assert_eq!(looped.other(&'a'), Some(&'a'));
    }

    #[test]
    fn test_negative_weight_is_accepted() {
        let edge = Edge::new(0u8, 1u8, -7);
        assert_eq!(edge.weight(), -7);
    }

    #[test]
    fn test_display() {
        assert_eq!(Edge::new("a", "b", 3).to_string(), "\"a\" -[3]- \"b\"");
    }
}
