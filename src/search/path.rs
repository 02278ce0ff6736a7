use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Graph, VertexId};

/// Represents a path in a graph.
///
/// The vertices run from source to target, both inclusive, and `distance` is
/// the sum of the edge weights along them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub distance: Distance,
}

impl Path {
    /// Number of edges on the path.
    pub fn hops(&self) -> u32 {
        self.vertices.len().saturating_sub(1) as u32
    }
}

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: VertexId,
    pub target: VertexId,
}

/// Represents a request for validating a shortest path in a graph.
///
/// This struct is used to encapsulate a shortest path request along with the
/// distance of a shortest path, if there exists one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub request: ShortestPathRequest,
    pub distance: Option<Distance>,
}

/// Result of a one to all search.
///
/// `distances` holds every vertex of the searched graph plus every vertex
/// reached through an edge to a vertex outside of it; unreachable vertices map
/// to `None`. `forest` maps every reached vertex to the vertices preceding it
/// on its shortest path, the source maps to an empty chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    pub source: VertexId,
    pub distances: BTreeMap<VertexId, Option<Distance>>,
    pub forest: BTreeMap<VertexId, Vec<VertexId>>,
}

impl ShortestPathTree {
    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.distances.get(&vertex).copied().flatten()
    }

    pub fn path(&self, target: VertexId) -> Option<Path> {
        let distance = self.distance(target)?;
        let mut vertices = self.forest.get(&target)?.clone();
        vertices.push(target);
        Some(Path { vertices, distance })
    }
}

/// Outcome of [`crate::search::dijkstra::shortest_path`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// A target was given. `None` if it is unreachable.
    SingleTarget(Option<Path>),
    /// No target was given.
    AllTargets(ShortestPathTree),
}

/// Checks a path against the graph and an expected distance.
pub fn validate_path(
    graph: &dyn Graph,
    test_case: &ShortestPathTestCase,
    path: &Option<Path>,
) -> Result<(), String> {
    let ShortestPathRequest { source, target } = test_case.request;

    let (path, distance) = match (path, test_case.distance) {
        (Some(path), Some(distance)) => (path, distance),
        (None, None) => return Ok(()),
        (Some(_), None) => return Err("a path was found where there should be none".to_string()),
        (None, Some(_)) => return Err("no path is found but there should be one".to_string()),
    };

    if path.distance != distance {
        return Err(format!(
            "wrong path distance, expected {} got {}",
            distance, path.distance
        ));
    }

    // Ensure first and last vertex of path are source and target of request.
    if path.vertices.first() != Some(&source) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&target) {
        return Err("last vertex of path is not target of request".to_string());
    }

    let mut true_distance: Distance = 0;
    for window in path.vertices.windows(2) {
        let (tail, head) = (window[0], window[1]);
        match graph.get_edge_weight(tail, head) {
            Some(weight) => true_distance += weight as Distance,
            None => return Err(format!("no edge between {} and {} found", tail, head)),
        }
    }

    if true_distance != path.distance {
        return Err(format!(
            "edges of path sum up to {} but path claims {}",
            true_distance, path.distance
        ));
    }

    Ok(())
}
