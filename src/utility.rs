use ahash::{HashSet, HashSetExt};
use flexi_logger::{Logger, LoggerHandle};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;

use crate::{
    error::Result,
    graphs::{
        snapshot::{School, Snapshot, TransportationCost},
        Distance, Graph, VertexId, Weight,
    },
    search::{
        dijkstra::Dijkstra,
        path::{ShortestPathRequest, ShortestPathTestCase},
    },
};

/// Starts logging to stderr. The returned handle must be kept alive for as
/// long as the program logs.
pub fn init_logging(spec: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(spec)?.log_to_stderr().start()?;
    Ok(handle)
}

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} eta {eta_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner
}

/// Random snapshot with schools `1..=number_of_schools` and up to
/// `number_of_costs` transportation costs between distinct schools.
pub fn random_snapshot<R: Rng>(
    rng: &mut R,
    number_of_schools: u32,
    number_of_costs: u32,
    max_cost: Weight,
) -> Snapshot {
    let schools = (1..=number_of_schools)
        .map(|id| School::new(id, format!("School {}", id)))
        .collect();

    let transportation_costs = if number_of_schools < 2 {
        Vec::new()
    } else {
        (0..number_of_costs)
            .filter_map(|_| {
                let from_school_id = rng.gen_range(1..=number_of_schools);
                let to_school_id = rng.gen_range(1..=number_of_schools);
                (from_school_id != to_school_id).then(|| TransportationCost {
                    from_school_id,
                    to_school_id,
                    cost: rng.gen_range(0..=max_cost),
                })
            })
            .collect()
    };

    Snapshot {
        schools,
        transportation_costs,
    }
}

/// Cheapest distance from `source` to `target` by enumerating every simple
/// path. Exponential, only for small graphs.
pub fn brute_force_distance(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Option<Distance> {
    fn visit(
        graph: &dyn Graph,
        vertex: VertexId,
        target: VertexId,
        distance: Distance,
        on_path: &mut HashSet<VertexId>,
        best: &mut Option<Distance>,
    ) {
        if vertex == target {
            if best.map_or(true, |best| distance < best) {
                *best = Some(distance);
            }
            return;
        }

        for edge in graph.out_edges(vertex) {
            if on_path.insert(edge.head) {
                visit(
                    graph,
                    edge.head,
                    target,
                    distance + edge.weight as Distance,
                    on_path,
                    best,
                );
                on_path.remove(&edge.head);
            }
        }
    }

    let mut on_path = HashSet::new();
    on_path.insert(source);
    let mut best = None;
    visit(graph, source, target, 0, &mut on_path, &mut best);
    best
}

/// Computes the test cases of all ordered pairs of distinct vertices. One
/// search per source runs in parallel.
pub fn generate_test_cases(graph: &dyn Graph) -> Vec<ShortestPathTestCase> {
    let mut sources: Vec<VertexId> = graph.vertices().collect();
    sources.sort_unstable();

    let bar = get_progressbar("Generating test cases", sources.len() as u64);
    let dijkstra = Dijkstra::new(graph);

    let test_cases = sources
        .par_iter()
        .progress_with(bar)
        .flat_map_iter(|&source| {
            let tree = dijkstra.one_to_all(source);
            sources
                .iter()
                .filter(move |&&target| target != source)
                .map(move |&target| ShortestPathTestCase {
                    request: ShortestPathRequest { source, target },
                    distance: tree.distance(target),
                })
                .collect::<Vec<_>>()
        })
        .collect();

    test_cases
}
