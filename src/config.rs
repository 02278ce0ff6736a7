use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{error::Result, search::collections::vertex_distance_queue::QueueKind};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Treat every transportation cost as usable in both directions unless
    /// the reverse direction has its own cost.
    pub bidirectional: bool,
    pub queue: QueueKind,
    /// Log specification in `RUST_LOG` syntax, e.g. `info` or
    /// `warn, transfer_paths::search=trace`.
    pub log_level: String,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            bidirectional: true,
            queue: QueueKind::BinaryHeap,
            log_level: "info".to_string(),
        }
    }
}

impl OptimizerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: OptimizerConfig = toml::from_str("queue = \"radix\"").unwrap();

        assert_eq!(config.queue, QueueKind::Radix);
        assert!(config.bidirectional);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("optimizer.toml");
        fs::write(&path, "bidirectional = false\nlog_level = \"debug\"\n").unwrap();

        let config = OptimizerConfig::load(&path).unwrap();

        assert!(!config.bidirectional);
        assert_eq!(config.queue, QueueKind::BinaryHeap);
        assert_eq!(config.log_level, "debug");
    }
}
