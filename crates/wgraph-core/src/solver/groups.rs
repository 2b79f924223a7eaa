//! Disjoint node groups for Kruskal.
//!
//! A group is a set of nodes already connected by accepted edges. Both
//! strategies make identical merge decisions, so they produce the same
//! spanning forest; they only differ in cost.
//!
//! Looking up a node that was not registered at construction is an internal
//! invariant violation and panics.

use crate::graph::Node;
use std::collections::{BTreeMap, BTreeSet};

/// Disjoint-set interface over graph nodes
pub trait DisjointGroups<N: Node> {
    /// Merge the groups holding `a` and `b`.
    ///
    /// Returns `false` when both already share a group.
    fn merge(&mut self, a: &N, b: &N) -> bool;

    fn same_group(&mut self, a: &N, b: &N) -> bool;

    /// Number of disjoint groups
    fn group_count(&self) -> usize;
}

/// Union-find with path compression and union by size
#[derive(Debug, Clone)]
pub struct UnionFind<N: Node> {
    index: BTreeMap<N, usize>,
    parent: Vec<usize>,
    size: Vec<usize>,
    groups: usize,
}

impl<N: Node> UnionFind<N> {
    /// One singleton group per node
    pub fn new<'a>(nodes: impl IntoIterator<Item = &'a N>) -> Self
    where
        N: 'a,
    {
        let mut index = BTreeMap::new();
        for node in nodes {
            let next = index.len();
            index.entry(node.clone()).or_insert(next);
        }
        let n = index.len();
        Self {
            index,
            parent: (0..n).collect(),
            size: vec![1; n],
            groups: n,
        }
    }

    fn slot(&self, node: &N) -> usize {
        match self.index.get(node) {
            Some(&slot) => slot,
            None => panic!("node {node:?} is not tracked by any group"),
        }
    }

    /// Find the root slot of `x`, compressing the path behind it
    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Size of the group containing `node`
    pub fn group_size(&mut self, node: &N) -> usize {
        let slot = self.slot(node);
        let root = self.find(slot);
        self.size[root]
    }
}

impl<N: Node> DisjointGroups<N> for UnionFind<N> {
    fn merge(&mut self, a: &N, b: &N) -> bool {
        let (slot_a, slot_b) = (self.slot(a), self.slot(b));
        let root_a = self.find(slot_a);
        let root_b = self.find(slot_b);

        if root_a == root_b {
            return false;
        }

        let (large, small) = if self.size[root_a] >= self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.groups -= 1;
        true
    }

    fn same_group(&mut self, a: &N, b: &N) -> bool {
        let (slot_a, slot_b) = (self.slot(a), self.slot(b));
        self.find(slot_a) == self.find(slot_b)
    }

    fn group_count(&self) -> usize {
        self.groups
    }
}

/// Explicit list of node sets, searched linearly.
///
/// Merging moves the members of the smaller set into the larger one and
/// drops the emptied set.
#[derive(Debug, Clone, Default)]
pub struct GroupList<N: Node> {
    groups: Vec<BTreeSet<N>>,
}

impl<N: Node> GroupList<N> {
    pub fn new<'a>(nodes: impl IntoIterator<Item = &'a N>) -> Self
    where
        N: 'a,
    {
        Self {
            groups: nodes
                .into_iter()
                .map(|node| BTreeSet::from([node.clone()]))
                .collect(),
        }
    }

    fn position(&self, node: &N) -> usize {
        match self.groups.iter().position(|group| group.contains(node)) {
            Some(position) => position,
            None => panic!("node {node:?} is not tracked by any group"),
        }
    }

    pub fn groups(&self) -> &[BTreeSet<N>] {
        &self.groups
    }
}

impl<N: Node> DisjointGroups<N> for GroupList<N> {
    fn merge(&mut self, a: &N, b: &N) -> bool {
        let pos_a = self.position(a);
        let pos_b = self.position(b);
        if pos_a == pos_b {
            return false;
        }

        let (target, smaller) = if self.groups[pos_a].len() > self.groups[pos_b].len() {
            (pos_a, pos_b)
        } else {
            (pos_b, pos_a)
        };
        let moved = std::mem::take(&mut self.groups[smaller]);
        self.groups[target].extend(moved);
        self.groups.swap_remove(smaller);
        true
    }

    fn same_group(&mut self, a: &N, b: &N) -> bool {
        self.position(a) == self.position(b)
    }

    fn group_count(&self) -> usize {
        self.groups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<G: DisjointGroups<u32>>(mut groups: G) {
        assert_eq!(groups.group_count(), 5);
        assert!(groups.merge(&0, &1));
        assert!(groups.merge(&2, &3));
        assert!(!groups.merge(&1, &0));
        assert_eq!(groups.group_count(), 3);
        assert!(!groups.same_group(&1, &2));
        assert!(groups.merge(&3, &0));
        assert!(groups.same_group(&1, &2));
        assert!(!groups.merge(&2, &1));
        assert!(!groups.same_group(&4, &0));
        assert_eq!(groups.group_count(), 2);
    }

    #[test]
    fn test_union_find() {
        let nodes: Vec<u32> = (0..5).collect();
        exercise(UnionFind::new(&nodes));
    }

    #[test]
    fn test_group_list() {
        let nodes: Vec<u32> = (0..5).collect();
        exercise(GroupList::new(&nodes));
    }

    #[test]
    fn test_union_find_sizes() {
        let nodes = ["a", "b", "c"];
        let mut groups = UnionFind::new(&nodes);
        groups.merge(&"a", &"b");
        assert_eq!(groups.group_size(&"b"), 2);
        assert_eq!(groups.group_size(&"c"), 1);
    }

    #[test]
    fn test_group_list_merges_into_larger() {
        let nodes = ['a', 'b', 'c'];
        let mut groups = GroupList::new(&nodes);
        groups.merge(&'a', &'b');
        groups.merge(&'c', &'a');
        assert_eq!(groups.groups().len(), 1);
        assert_eq!(groups.groups()[0], BTreeSet::from(['a', 'b', 'c']));
    }

    #[test]
    #[should_panic(expected = "not tracked")]
    fn test_untracked_node_panics() {
        let nodes = [1u32];
        let mut groups = UnionFind::new(&nodes);
        groups.merge(&1, &2);
    }
}
