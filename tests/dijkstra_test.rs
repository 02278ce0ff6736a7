use rand::{rngs::StdRng, SeedableRng};
use transfer_paths::{
    graphs::{
        edge::WeightedEdge,
        hash_graph::HashGraph,
        snapshot::build_graph,
        Graph,
    },
    search::{
        collections::vertex_distance_queue::QueueKind,
        dijkstra::{dijkstra_one_to_all, dijkstra_one_to_one, Dijkstra},
        path::{validate_path, ShortestPathRequest, ShortestPathTestCase},
        PathFinding,
    },
    utility::{brute_force_distance, generate_test_cases, random_snapshot},
};

fn get_small_graph() -> HashGraph {
    let edges: Vec<WeightedEdge> = [
        (0, 1, 3),
        (0, 2, 5),
        (0, 10, 3),
        (1, 2, 3),
        (1, 3, 5),
        (2, 3, 2),
        (2, 9, 2),
        (3, 4, 7),
        (3, 9, 4),
        (4, 5, 6),
        (4, 9, 3),
        (5, 6, 4),
        (5, 7, 2),
        (6, 7, 3),
        (6, 8, 5),
        (7, 8, 3),
        (7, 9, 2),
        (8, 9, 4),
        (8, 10, 6),
        (9, 10, 3),
    ]
    .into_iter()
    .flat_map(|(tail, head, weight)| {
        let edge = WeightedEdge::new(tail, head, weight);
        [edge, edge.reversed()]
    })
    .collect();
    HashGraph::from_edges(&edges)
}

#[test]
fn dijkstra_matches_brute_force_on_small_graph() {
    let graph = get_small_graph();

    for source in graph.vertices() {
        for target in graph.vertices() {
            let path = dijkstra_one_to_one(&graph, source, target);
            let test_case = ShortestPathTestCase {
                request: ShortestPathRequest { source, target },
                distance: brute_force_distance(&graph, source, target),
            };
            assert_eq!(validate_path(&graph, &test_case, &path), Ok(()));
        }
    }
}

#[test]
fn dijkstra_matches_brute_force_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let snapshot = random_snapshot(&mut rng, 7, 14, 9);
        for bidirectional in [false, true] {
            let graph = build_graph(&snapshot, bidirectional).graph;

            for test_case in generate_test_cases(&graph) {
                let ShortestPathRequest { source, target } = test_case.request;
                assert_eq!(
                    test_case.distance,
                    brute_force_distance(&graph, source, target)
                );

                for queue in [QueueKind::BinaryHeap, QueueKind::Radix] {
                    let path = Dijkstra::with_queue(&graph, queue).shortest_path(source, target);
                    assert_eq!(validate_path(&graph, &test_case, &path), Ok(()));
                }
            }
        }
    }
}

#[test]
fn one_to_all_agrees_with_one_to_one() {
    let graph = get_small_graph();
    let tree = dijkstra_one_to_all(&graph, 0);

    for target in graph.vertices() {
        let path = dijkstra_one_to_one(&graph, 0, target).unwrap();
        let tree_path = tree.path(target).unwrap();
        assert_eq!(tree_path.distance, path.distance);
        assert_eq!(tree_path.vertices.first(), Some(&0));
        assert_eq!(tree_path.vertices.last(), Some(&target));
    }
}

#[test]
fn ties_only_fix_the_cost() {
    // two paths of cost 2 from 1 to 4
    let graph = HashGraph::from_edges(&[
        WeightedEdge::new(1, 2, 1),
        WeightedEdge::new(1, 3, 1),
        WeightedEdge::new(2, 4, 1),
        WeightedEdge::new(3, 4, 1),
    ]);

    let path = dijkstra_one_to_one(&graph, 1, 4).unwrap();

    assert_eq!(path.distance, 2);
    assert_eq!(path.vertices.len(), 3);
}

#[test]
fn zero_cost_edges() {
    let graph = HashGraph::from_edges(&[
        WeightedEdge::new(1, 2, 0),
        WeightedEdge::new(2, 1, 0),
        WeightedEdge::new(2, 3, 0),
    ]);

    let path = dijkstra_one_to_one(&graph, 1, 3).unwrap();

    assert_eq!(path.distance, 0);
    assert_eq!(path.vertices, vec![1, 2, 3]);
}
