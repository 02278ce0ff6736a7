use ahash::HashSet;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{edge::WeightedEdge, hash_graph::HashGraph, VertexId};

/// Counts what happened to the edges handed to a [`GraphBuilder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Edges written under their tail.
    pub inserted: u32,
    /// Edges whose tail is not a known vertex.
    pub dropped: u32,
    /// Reverse edges added in bidirectional mode.
    pub synthesized: u32,
    /// Reverse edges not added because an explicit edge already existed.
    pub shadowed: u32,
}

/// Turns a vertex set and a sequence of weighted edges into a [`HashGraph`].
///
/// Edges are applied in order. An edge is written only if its tail is a known
/// vertex, later edges overwrite earlier edges with the same tail and head. In
/// bidirectional mode the reverse of every edge whose head is known is added
/// afterwards, unless the graph already holds an edge in that direction.
///
/// All weights must be nonnegative, which `Weight` guarantees by type.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphBuilder {
    pub bidirectional: bool,
}

impl GraphBuilder {
    pub fn new(bidirectional: bool) -> GraphBuilder {
        GraphBuilder { bidirectional }
    }

    pub fn build(&self, vertices: &HashSet<VertexId>, edges: &[WeightedEdge]) -> HashGraph {
        self.build_with_report(vertices, edges).0
    }

    pub fn build_with_report(
        &self,
        vertices: &HashSet<VertexId>,
        edges: &[WeightedEdge],
    ) -> (HashGraph, BuildReport) {
        let mut graph = HashGraph::new();
        let mut report = BuildReport::default();

        vertices.iter().for_each(|&vertex| graph.add_vertex(vertex));

        for edge in edges {
            if vertices.contains(&edge.tail) {
                graph.set_edge(edge);
                report.inserted += 1;
            } else {
                debug!(
                    "dropping edge {} -> {} (cost {}): unknown tail",
                    edge.tail, edge.head, edge.weight
                );
                report.dropped += 1;
            }
        }

        // All explicit edges are in place before the first reverse edge is
        // synthesized.
        if self.bidirectional {
            for edge in edges.iter().filter(|edge| vertices.contains(&edge.head)) {
                if graph.set_edge_if_absent(&edge.reversed()) {
                    report.synthesized += 1;
                } else {
                    report.shadowed += 1;
                }
            }
        }

        if report.dropped > 0 {
            warn!(
                "dropped {} of {} edges referencing unknown vertices",
                report.dropped,
                edges.len()
            );
        }

        (graph, report)
    }

    /// Runs the same checks as [`GraphBuilder::build_with_report`] without
    /// keeping the graph.
    pub fn validate_only(&self, vertices: &HashSet<VertexId>, edges: &[WeightedEdge]) -> BuildReport {
        self.build_with_report(vertices, edges).1
    }
}
