use std::collections::hash_map::Entry::{Occupied, Vacant};

use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};

use super::{edge::WeightedEdge, Graph, VertexId, Weight};

/// Adjacency map graph. Every vertex known to the graph has an entry in
/// `out_edges`, possibly with an empty neighbor map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashGraph {
    out_edges: HashMap<VertexId, HashMap<VertexId, Weight>>,
}

impl Default for HashGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph for HashGraph {
    fn number_of_vertices(&self) -> u32 {
        self.out_edges.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.out_edges.values().map(HashMap::len).sum::<usize>() as u32
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.out_edges.contains_key(&vertex)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + Send + '_> {
        Box::new(self.out_edges.keys().copied())
    }

    fn out_edges(&self, tail: VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + Send + '_> {
        match self.out_edges.get(&tail) {
            Some(neighbors) => Box::new(
                neighbors
                    .iter()
                    .map(move |(&head, &weight)| WeightedEdge::new(tail, head, weight)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_edge_weight(&self, tail: VertexId, head: VertexId) -> Option<Weight> {
        Some(*self.out_edges.get(&tail)?.get(&head)?)
    }
}

impl HashGraph {
    pub fn new() -> Self {
        HashGraph {
            out_edges: HashMap::new(),
        }
    }

    /// Builds a graph directly from edges. Both endpoints of every edge become
    /// vertices; duplicate edges are resolved last-write-wins.
    pub fn from_edges(edges: &[WeightedEdge]) -> HashGraph {
        let mut graph = HashGraph::new();
        edges.iter().for_each(|edge| {
            graph.add_vertex(edge.tail);
            graph.add_vertex(edge.head);
            graph.set_edge(edge);
        });
        graph
    }

    /// Adds `vertex` with an empty neighbor map. Existing edges are kept.
    pub fn add_vertex(&mut self, vertex: VertexId) {
        self.out_edges.entry(vertex).or_default();
    }

    /// Sets the weight of `edge`, overwriting any previous weight of the same
    /// (tail, head) pair.
    pub fn set_edge(&mut self, edge: &WeightedEdge) {
        self.out_edges
            .entry(edge.tail)
            .or_default()
            .insert(edge.head, edge.weight);
    }

    /// Inserts `edge` only if the graph has no (tail, head) edge yet. Returns
    /// whether the edge was inserted.
    pub fn set_edge_if_absent(&mut self, edge: &WeightedEdge) -> bool {
        match self.out_edges.entry(edge.tail).or_default().entry(edge.head) {
            Occupied(_) => false,
            Vacant(v) => {
                v.insert(edge.weight);
                true
            }
        }
    }

    pub fn neighbors(&self, tail: VertexId) -> Option<&HashMap<VertexId, Weight>> {
        self.out_edges.get(&tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_edge_overwrites() {
        let mut graph = HashGraph::new();
        graph.set_edge(&WeightedEdge::new(1, 2, 5));
        graph.set_edge(&WeightedEdge::new(1, 2, 7));

        assert_eq!(graph.get_edge_weight(1, 2), Some(7));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn set_edge_if_absent_keeps_existing() {
        let mut graph = HashGraph::new();
        graph.set_edge(&WeightedEdge::new(2, 1, 3));

        assert!(!graph.set_edge_if_absent(&WeightedEdge::new(2, 1, 5)));
        assert!(graph.set_edge_if_absent(&WeightedEdge::new(1, 2, 5)));
        assert_eq!(graph.get_edge_weight(2, 1), Some(3));
        assert_eq!(graph.get_edge_weight(1, 2), Some(5));
    }

    #[test]
    fn isolated_vertex_has_no_edges() {
        let mut graph = HashGraph::new();
        graph.add_vertex(4);

        assert!(graph.contains_vertex(4));
        assert_eq!(graph.out_edges(4).count(), 0);
        assert_eq!(graph.out_edges(5).count(), 0);
        assert_eq!(graph.number_of_vertices(), 1);
    }
}
