//! Driver-side value model for Bolt query results.
//!
//! Everything in this module mirrors what a Bolt driver hands to the
//! transformation layer: the heterogeneous value union, the graph object
//! types embedded in it, one result row, and the result summary that may
//! carry an execution plan or profile.

pub mod graph_objects;
pub mod summary;
pub mod values;
