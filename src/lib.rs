//! Boltgraph - Bolt query result transformation layer
//!
//! This crate turns driver-decoded Bolt query results into the representations
//! a graph UI consumes:
//! - Value trees with out-of-range integers rendered as exact decimal strings
//! - A deduplicated, referentially consistent graph model (nodes and relationships)
//! - A normalized execution-plan / profile tree
//!
//! It performs no I/O: query execution, connection management, and rendering
//! belong to the driver and UI layers on either side of it.

pub mod bolt;
pub mod transform;
