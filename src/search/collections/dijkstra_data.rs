use ahash::{HashMap, HashMapExt};

use crate::{
    graphs::{Distance, VertexId},
    search::path::Path,
};

/// Trait for handling data access in Dijkstra's algorithm.
pub trait DijkstraData {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: VertexId, predecessor: VertexId);

    /// Retrieves the tentative distance to a given vertex. `None` means the
    /// vertex has not been reached.
    fn get_distance(&self, vertex: VertexId) -> Option<Distance>;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: VertexId, distance: Distance);

    /// All vertices that have been assigned a distance.
    fn reached_vertices(&self) -> Vec<VertexId>;

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// This function traces back from the target vertex using
    /// predecessor data to build the full path. Returns `None`
    /// if the target vertex is unreachable.
    fn get_path(&self, target: VertexId) -> Option<Path> {
        let distance = self.get_distance(target)?;

        let mut vertices = vec![target];

        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor);
        }

        vertices.reverse();

        Some(Path { vertices, distance })
    }

    /// The vertices preceding `vertex` on its path from the source, without
    /// `vertex` itself. Empty for the source, `None` if unreachable.
    fn get_predecessor_chain(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        let mut path = self.get_path(vertex)?;
        path.vertices.pop();
        Some(path.vertices)
    }
}

#[derive(Default)]
pub struct DijkstraDataHashMap {
    predecessors: HashMap<VertexId, VertexId>,
    distances: HashMap<VertexId, Distance>,
}

impl DijkstraDataHashMap {
    pub fn new() -> Self {
        DijkstraDataHashMap {
            predecessors: HashMap::new(),
            distances: HashMap::new(),
        }
    }
}

impl DijkstraData for DijkstraDataHashMap {
    fn clear(&mut self) {
        self.predecessors.clear();
        self.distances.clear();
    }

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(&vertex).copied()
    }

    fn set_predecessor(&mut self, vertex: VertexId, predecessor: VertexId) {
        self.predecessors.insert(vertex, predecessor);
    }

    fn get_distance(&self, vertex: VertexId) -> Option<Distance> {
        self.distances.get(&vertex).copied()
    }

    fn set_distance(&mut self, vertex: VertexId, distance: Distance) {
        self.distances.insert(vertex, distance);
    }

    fn reached_vertices(&self) -> Vec<VertexId> {
        self.distances.keys().copied().collect()
    }
}
