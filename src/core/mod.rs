//! Core logic - the object graph, per-entity data access, graph persistence and the
//! seed routine. Nothing here depends on how the binary is configured.

pub mod budget;
pub mod department;
pub mod employee;
pub mod graph;
pub mod manager;
pub mod persist;
pub mod report;
pub mod seed;
