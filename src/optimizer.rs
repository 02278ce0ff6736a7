use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    graphs::{Distance, Graph, VertexId},
    search::{
        collections::vertex_distance_queue::QueueKind, dijkstra::Dijkstra, path::ShortestPathTree,
        PathFinding,
    },
};

/// Why a path query was not run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum QueryRejection {
    #[error("same source and target")]
    SameSourceAndTarget,
    #[error("source not found")]
    SourceNotFound,
    #[error("target not found")]
    TargetNotFound,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathQueryResult {
    Rejected {
        reason: QueryRejection,
    },
    NotFound,
    Found {
        path: Vec<VertexId>,
        total_cost: Distance,
        transfer_count: u32,
    },
}

impl PathQueryResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathQueryResult::Found { .. })
    }
}

/// Checks a query before any search is run. Same-node queries are rejected
/// regardless of the graph.
pub fn validate_query(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Result<(), QueryRejection> {
    if source == target {
        return Err(QueryRejection::SameSourceAndTarget);
    }
    if !graph.contains_vertex(source) {
        return Err(QueryRejection::SourceNotFound);
    }
    if !graph.contains_vertex(target) {
        return Err(QueryRejection::TargetNotFound);
    }
    Ok(())
}

pub fn find_optimal_path(graph: &dyn Graph, source: VertexId, target: VertexId) -> PathQueryResult {
    find_optimal_path_with_queue(graph, source, target, QueueKind::default())
}

/// Finds the cheapest path from `source` to `target`. Paths through
/// synthesized reverse edges count their hops like any other path.
pub fn find_optimal_path_with_queue(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
    queue: QueueKind,
) -> PathQueryResult {
    if let Err(reason) = validate_query(graph, source, target) {
        info!("rejected path query {} -> {}: {}", source, target, reason);
        return PathQueryResult::Rejected { reason };
    }

    match Dijkstra::with_queue(graph, queue).shortest_path(source, target) {
        Some(path) => {
            info!(
                "path {} -> {} found with cost {} over {} hops",
                source,
                target,
                path.distance,
                path.hops()
            );
            PathQueryResult::Found {
                transfer_count: path.hops(),
                total_cost: path.distance,
                path: path.vertices,
            }
        }
        None => {
            info!("no path {} -> {}", source, target);
            PathQueryResult::NotFound
        }
    }
}

/// Distances and predecessor chains of every vertex reachable from `source`.
/// Meant for diagnostics.
pub fn all_distances_from(
    graph: &dyn Graph,
    source: VertexId,
) -> Result<ShortestPathTree, QueryRejection> {
    all_distances_from_with_queue(graph, source, QueueKind::default())
}

pub fn all_distances_from_with_queue(
    graph: &dyn Graph,
    source: VertexId,
    queue: QueueKind,
) -> Result<ShortestPathTree, QueryRejection> {
    if !graph.contains_vertex(source) {
        return Err(QueryRejection::SourceNotFound);
    }
    Ok(Dijkstra::with_queue(graph, queue).one_to_all(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{edge::WeightedEdge, hash_graph::HashGraph};

    #[test]
    fn rejection_reasons_render_as_documented() {
        assert_eq!(
            QueryRejection::SameSourceAndTarget.to_string(),
            "same source and target"
        );
        assert_eq!(QueryRejection::SourceNotFound.to_string(), "source not found");
        assert_eq!(QueryRejection::TargetNotFound.to_string(), "target not found");
    }

    #[test]
    fn same_node_is_rejected_even_if_unknown() {
        let graph = HashGraph::new();

        assert_eq!(
            find_optimal_path(&graph, 2, 2),
            PathQueryResult::Rejected {
                reason: QueryRejection::SameSourceAndTarget
            }
        );
    }

    #[test]
    fn unknown_target_is_rejected() {
        let graph = HashGraph::from_edges(&[WeightedEdge::new(1, 2, 1)]);

        assert_eq!(
            find_optimal_path(&graph, 1, 42),
            PathQueryResult::Rejected {
                reason: QueryRejection::TargetNotFound
            }
        );
    }

    #[test]
    fn all_distances_requires_known_source() {
        let graph = HashGraph::from_edges(&[WeightedEdge::new(1, 2, 1)]);

        assert_eq!(
            all_distances_from(&graph, 3),
            Err(QueryRejection::SourceNotFound)
        );
        assert_eq!(all_distances_from(&graph, 1).unwrap().distance(2), Some(1));
    }
}
