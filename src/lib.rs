//! Cheapest transfer routes between schools.
//!
//! A [`graphs::snapshot::Snapshot`] of schools and transportation costs is
//! turned into a graph by [`graphs::graph_builder::GraphBuilder`], which
//! [`search::dijkstra`] searches. [`optimizer`] validates path queries and
//! shapes their results, [`report`] renders them for display.

pub mod config;
pub mod error;
pub mod graphs;
pub mod optimizer;
pub mod report;
pub mod search;
pub mod utility;
