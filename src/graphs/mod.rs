use edge::WeightedEdge;

pub mod edge;
pub mod graph_builder;
pub mod hash_graph;
pub mod snapshot;

/// Identifier of a school.
pub type VertexId = u32;

/// Cost of a single transfer between two schools.
pub type Weight = u32;

/// Cumulative cost of a path. Wider than `Weight` so that sums over long
/// paths can not overflow.
pub type Distance = u64;

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32;

    fn contains_vertex(&self, vertex: VertexId) -> bool;

    /// Iterates over all vertices that have an adjacency entry. The order is
    /// unspecified.
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + Send + '_>;

    /// Iterates over the out edges of `tail`. A vertex without an adjacency
    /// entry has no out edges.
    fn out_edges(&self, tail: VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + Send + '_>;

    fn get_edge_weight(&self, tail: VertexId, head: VertexId) -> Option<Weight>;
}
