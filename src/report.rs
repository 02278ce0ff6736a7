use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    graphs::{snapshot::DirectoryGraph, Distance, Graph, VertexId, Weight},
    optimizer::{
        all_distances_from_with_queue, find_optimal_path_with_queue, PathQueryResult,
        QueryRejection,
    },
    search::collections::vertex_distance_queue::QueueKind,
};

pub const NO_PATH_MESSAGE: &str =
    "No valid path exists between these schools. Check transportation costs.";

/// One hop of a found route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    pub from: VertexId,
    pub to: VertexId,
    pub cost: Weight,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub source_id: VertexId,
    pub distances: BTreeMap<VertexId, Option<Distance>>,
    pub spf: BTreeMap<String, Vec<String>>,
}

/// Display ready result of a path query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub success: bool,
    pub message: String,
    pub path: Vec<VertexId>,
    pub path_names: Vec<String>,
    pub total_cost: Option<Distance>,
    pub num_transfers: Option<u32>,
    pub legs: Vec<Leg>,
    pub debug: Option<DebugInfo>,
}

impl OptimizationReport {
    fn failure(message: String) -> OptimizationReport {
        OptimizationReport {
            success: false,
            message,
            path: Vec::new(),
            path_names: Vec::new(),
            total_cost: None,
            num_transfers: None,
            legs: Vec::new(),
            debug: None,
        }
    }

    /// Route as `A -> B -> C`, empty if no route was found.
    pub fn route(&self) -> String {
        self.path_names.iter().join(" -> ")
    }
}

pub fn rejection_message(reason: QueryRejection, source: VertexId, target: VertexId) -> String {
    match reason {
        QueryRejection::SameSourceAndTarget => {
            "Source and target schools cannot be the same.".to_string()
        }
        QueryRejection::SourceNotFound => {
            format!("Source school (ID: {}) not found in system.", source)
        }
        QueryRejection::TargetNotFound => {
            format!("Target school (ID: {}) not found in system.", target)
        }
    }
}

pub fn school_name(directory: &DirectoryGraph, vertex: VertexId) -> String {
    directory
        .name(vertex)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Unknown School (ID: {})", vertex))
}

fn short_name(directory: &DirectoryGraph, vertex: VertexId) -> String {
    directory
        .name(vertex)
        .map(str::to_string)
        .unwrap_or_else(|| format!("ID:{}", vertex))
}

/// Runs a path query on `directory` and renders the outcome. A successful
/// report also carries the one to all search from `source`.
pub fn optimize(
    directory: &DirectoryGraph,
    source: VertexId,
    target: VertexId,
    queue: QueueKind,
) -> OptimizationReport {
    let (path, total_cost, transfer_count) =
        match find_optimal_path_with_queue(&directory.graph, source, target, queue) {
            PathQueryResult::Rejected { reason } => {
                return OptimizationReport::failure(rejection_message(reason, source, target))
            }
            PathQueryResult::NotFound => {
                return OptimizationReport::failure(NO_PATH_MESSAGE.to_string())
            }
            PathQueryResult::Found {
                path,
                total_cost,
                transfer_count,
            } => (path, total_cost, transfer_count),
        };

    let legs = path
        .iter()
        .tuple_windows()
        .map(|(&from, &to)| Leg {
            from,
            to,
            cost: directory.graph.get_edge_weight(from, to).unwrap_or(0),
        })
        .collect();

    let debug = all_distances_from_with_queue(&directory.graph, source, queue)
        .ok()
        .map(|tree| DebugInfo {
            source_id: source,
            spf: tree
                .forest
                .iter()
                .map(|(&vertex, chain)| {
                    (
                        short_name(directory, vertex),
                        chain
                            .iter()
                            .map(|&predecessor| short_name(directory, predecessor))
                            .collect(),
                    )
                })
                .collect(),
            distances: tree.distances,
        });

    OptimizationReport {
        success: true,
        message: format!("Optimal path found with {} transfer(s).", transfer_count),
        path_names: path
            .iter()
            .map(|&vertex| school_name(directory, vertex))
            .collect(),
        path,
        total_cost: Some(total_cost),
        num_transfers: Some(transfer_count),
        legs,
        debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::snapshot::{build_graph, School, Snapshot, TransportationCost};

    fn directory(bidirectional: bool) -> DirectoryGraph {
        let cost = |from_school_id, to_school_id, cost| TransportationCost {
            from_school_id,
            to_school_id,
            cost,
        };
        build_graph(
            &Snapshot {
                schools: vec![
                    School::new(1, "A"),
                    School::new(2, "B"),
                    School::new(3, "C"),
                    School::new(4, "D"),
                ],
                transportation_costs: vec![
                    cost(1, 2, 4),
                    cost(1, 3, 1),
                    cost(3, 2, 1),
                    cost(2, 4, 2),
                    cost(3, 4, 7),
                ],
            },
            bidirectional,
        )
    }

    #[test]
    fn successful_report() {
        let report = optimize(&directory(false), 1, 4, QueueKind::BinaryHeap);

        assert!(report.success);
        assert_eq!(report.message, "Optimal path found with 3 transfer(s).");
        assert_eq!(report.route(), "A -> C -> B -> D");
        assert_eq!(report.total_cost, Some(4));
        assert_eq!(
            report.legs.iter().map(|leg| leg.cost).collect::<Vec<_>>(),
            vec![1, 1, 2]
        );

        let debug = report.debug.unwrap();
        assert_eq!(debug.source_id, 1);
        assert_eq!(debug.distances[&4], Some(4));
        assert_eq!(debug.spf["D"], vec!["A", "C", "B"]);
    }

    #[test]
    fn failure_messages() {
        let directory = directory(false);

        assert_eq!(
            optimize(&directory, 2, 2, QueueKind::BinaryHeap).message,
            "Source and target schools cannot be the same."
        );
        assert_eq!(
            optimize(&directory, 9, 2, QueueKind::BinaryHeap).message,
            "Source school (ID: 9) not found in system."
        );
        assert_eq!(
            optimize(&directory, 2, 9, QueueKind::BinaryHeap).message,
            "Target school (ID: 9) not found in system."
        );

        let no_path = optimize(&directory, 4, 1, QueueKind::BinaryHeap);
        assert!(!no_path.success);
        assert_eq!(no_path.message, NO_PATH_MESSAGE);
        assert!(no_path.route().is_empty());
    }

    #[test]
    fn bidirectional_directory_allows_reverse_route() {
        let report = optimize(&directory(true), 4, 1, QueueKind::Radix);

        assert!(report.success);
        assert_eq!(report.total_cost, Some(4));
        assert_eq!(report.num_transfers, Some(3));
    }
}
