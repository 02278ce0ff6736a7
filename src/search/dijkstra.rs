use std::collections::BTreeMap;

use log::{debug, trace};

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataHashMap},
        vertex_distance_queue::{QueueKind, VertexDistanceQueue},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataHashSet},
    },
    path::{Path, SearchOutcome, ShortestPathTree},
    PathFinding,
};
use crate::graphs::{Distance, Graph, VertexId};

/// Dijkstra's algorithm over a borrowed graph.
///
/// The graph is expected to have nonnegative weights only. Source and target
/// are not validated, a vertex unknown to the graph behaves like a vertex
/// without out edges.
#[derive(Clone, Copy)]
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
    queue: QueueKind,
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, source: VertexId, target: VertexId) -> Option<Path> {
        let mut data = DijkstraDataHashMap::new();
        self.run(&mut data, source, Some(target));
        data.get_path(target)
    }

    fn shortest_path_distance(&self, source: VertexId, target: VertexId) -> Option<Distance> {
        self.shortest_path(source, target).map(|path| path.distance)
    }
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Dijkstra<'a> {
        Dijkstra {
            graph,
            queue: QueueKind::default(),
        }
    }

    pub fn with_queue(graph: &'a dyn Graph, queue: QueueKind) -> Dijkstra<'a> {
        Dijkstra { graph, queue }
    }

    pub fn one_to_all(&self, source: VertexId) -> ShortestPathTree {
        let mut data = DijkstraDataHashMap::new();
        self.run(&mut data, source, None);
        shortest_path_tree(self.graph, &data, source)
    }

    pub fn search(&self, source: VertexId, target: Option<VertexId>) -> SearchOutcome {
        match target {
            Some(target) => SearchOutcome::SingleTarget(self.shortest_path(source, target)),
            None => SearchOutcome::AllTargets(self.one_to_all(source)),
        }
    }

    fn run(&self, data: &mut dyn DijkstraData, source: VertexId, target: Option<VertexId>) {
        let mut expanded = VertexExpandedDataHashSet::new();
        let mut queue = self.queue.new_queue();
        dijkstra(
            self.graph,
            data,
            &mut expanded,
            queue.as_mut(),
            source,
            target,
        );
    }
}

/// Runs Dijkstra's algorithm from `source`. If `target` is given the search
/// stops as soon as it is expanded, its distance and path are final then.
pub fn dijkstra(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: VertexId,
    target: Option<VertexId>,
) {
    data.set_distance(source, 0);
    queue.insert(source, 0);

    let mut number_of_expanded = 0;
    while let Some((tail, distance_tail)) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }
        number_of_expanded += 1;
        trace!("expanding {} at distance {}", tail, distance_tail);

        if Some(tail) == target {
            break;
        }

        for edge in graph.out_edges(tail) {
            let alternative_distance_head = distance_tail + edge.weight as Distance;
            let is_shorter = data
                .get_distance(edge.head)
                .map_or(true, |current_distance_head| {
                    alternative_distance_head < current_distance_head
                });
            if is_shorter {
                data.set_distance(edge.head, alternative_distance_head);
                data.set_predecessor(edge.head, tail);
                queue.insert(edge.head, alternative_distance_head);
            }
        }
    }

    debug!(
        "dijkstra from {} expanded {} vertices",
        source, number_of_expanded
    );
}

/// Collects distances and predecessor chains of a finished search.
pub fn shortest_path_tree(
    graph: &dyn Graph,
    data: &dyn DijkstraData,
    source: VertexId,
) -> ShortestPathTree {
    let mut distances: BTreeMap<VertexId, Option<Distance>> =
        graph.vertices().map(|vertex| (vertex, None)).collect();
    let mut forest = BTreeMap::new();

    for vertex in data.reached_vertices() {
        distances.insert(vertex, data.get_distance(vertex));
        if let Some(chain) = data.get_predecessor_chain(vertex) {
            forest.insert(vertex, chain);
        }
    }

    ShortestPathTree {
        source,
        distances,
        forest,
    }
}

pub fn dijkstra_one_to_one(graph: &dyn Graph, source: VertexId, target: VertexId) -> Option<Path> {
    Dijkstra::new(graph).shortest_path(source, target)
}

pub fn dijkstra_one_to_all(graph: &dyn Graph, source: VertexId) -> ShortestPathTree {
    Dijkstra::new(graph).one_to_all(source)
}

/// Single-source shortest path search. With a target the result is the
/// shortest path to it, if any; without one it is the full tree of the
/// source.
pub fn shortest_path(
    graph: &dyn Graph,
    source: VertexId,
    target: Option<VertexId>,
) -> SearchOutcome {
    Dijkstra::new(graph).search(source, target)
}
