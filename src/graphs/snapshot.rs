use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use ahash::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use super::{
    edge::WeightedEdge,
    graph_builder::{BuildReport, GraphBuilder},
    hash_graph::HashGraph,
    VertexId, Weight,
};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: VertexId,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl School {
    pub fn new(id: VertexId, name: impl Into<String>) -> School {
        School {
            id,
            name: name.into(),
            address: None,
            kind: None,
            status: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportationCost {
    pub from_school_id: VertexId,
    pub to_school_id: VertexId,
    pub cost: Weight,
}

impl From<&TransportationCost> for WeightedEdge {
    fn from(cost: &TransportationCost) -> Self {
        WeightedEdge::new(cost.from_school_id, cost.to_school_id, cost.cost)
    }
}

/// Everything the storage layer knows about schools and their connections at
/// one point in time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub schools: Vec<School>,
    pub transportation_costs: Vec<TransportationCost>,
}

impl Snapshot {
    /// Reads a snapshot, `.bincode` files as bincode and `.json` files as json.
    pub fn from_file(path: &Path) -> Result<Snapshot> {
        let reader = BufReader::new(File::open(path)?);
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Ok(serde_json::from_reader(reader)?),
            Some("bincode") => Ok(bincode::deserialize_from(reader)?),
            _ => Err(Error::UnsupportedSnapshot(path.to_path_buf())),
        }
    }

    pub fn to_file(&self, path: &Path) -> Result<()> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => {
                let writer = BufWriter::new(File::create(path)?);
                serde_json::to_writer_pretty(writer, self)?;
            }
            Some("bincode") => {
                let writer = BufWriter::new(File::create(path)?);
                bincode::serialize_into(writer, self)?;
            }
            _ => return Err(Error::UnsupportedSnapshot(path.to_path_buf())),
        }
        Ok(())
    }

    pub fn vertices(&self) -> HashSet<VertexId> {
        self.schools.iter().map(|school| school.id).collect()
    }

    pub fn edges(&self) -> Vec<WeightedEdge> {
        self.transportation_costs
            .iter()
            .map(WeightedEdge::from)
            .collect()
    }
}

/// A graph built from a [`Snapshot`] together with the names of its schools.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryGraph {
    pub graph: HashGraph,
    pub names: HashMap<VertexId, String>,
    pub report: BuildReport,
}

impl DirectoryGraph {
    pub fn name(&self, vertex: VertexId) -> Option<&str> {
        self.names.get(&vertex).map(String::as_str)
    }
}

/// Builds a fresh graph from `snapshot`. Nothing is cached between calls.
pub fn build_graph(snapshot: &Snapshot, bidirectional: bool) -> DirectoryGraph {
    let (graph, report) =
        GraphBuilder::new(bidirectional).build_with_report(&snapshot.vertices(), &snapshot.edges());

    let names = snapshot
        .schools
        .iter()
        .map(|school| (school.id, school.name.clone()))
        .collect();

    DirectoryGraph {
        graph,
        names,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::Graph;

    fn snapshot() -> Snapshot {
        Snapshot {
            schools: vec![School::new(1, "A"), School::new(2, "B"), School::new(3, "C")],
            transportation_costs: vec![
                TransportationCost {
                    from_school_id: 1,
                    to_school_id: 2,
                    cost: 5,
                },
                TransportationCost {
                    from_school_id: 9,
                    to_school_id: 1,
                    cost: 1,
                },
            ],
        }
    }

    #[test]
    fn build_graph_keeps_names_and_drops_unknown() {
        let directory = build_graph(&snapshot(), true);

        assert_eq!(directory.name(2), Some("B"));
        assert_eq!(directory.name(9), None);
        assert_eq!(directory.graph.number_of_vertices(), 3);
        assert_eq!(directory.graph.get_edge_weight(2, 1), Some(5));
        assert_eq!(directory.report.dropped, 1);
    }

    #[test]
    fn build_graph_is_idempotent() {
        let snapshot = snapshot();

        assert_eq!(build_graph(&snapshot, true), build_graph(&snapshot, true));
        assert_eq!(build_graph(&snapshot, false), build_graph(&snapshot, false));
    }

    #[test]
    fn snapshot_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot();

        for file_name in ["snapshot.json", "snapshot.bincode"] {
            let path = dir.path().join(file_name);
            snapshot.to_file(&path).unwrap();
            assert_eq!(Snapshot::from_file(&path).unwrap(), snapshot);
        }
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.csv");

        assert!(matches!(
            snapshot().to_file(&path),
            Err(Error::UnsupportedSnapshot(_))
        ));
    }
}
