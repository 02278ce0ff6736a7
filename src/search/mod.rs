use crate::graphs::{Distance, VertexId};
use path::Path;

pub mod collections;
pub mod dijkstra;
pub mod path;

pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, source: VertexId, target: VertexId) -> Option<Path>;

    fn shortest_path_distance(&self, source: VertexId, target: VertexId) -> Option<Distance>;
}
