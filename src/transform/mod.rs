//! Result transformation pipelines.
//!
//! Two pipelines share one traversal primitive:
//!
//! 1. **Value normalization**: [`type_converter::convert`] walks any value
//!    tree applying a predicate/transform pair;
//!    [`type_converter::normalize_integers`] is its main use, rendering
//!    64-bit integers as exact decimal strings for JSON-safe export.
//!
//! 2. **Extraction**: [`graph_extractor`] turns result rows into a
//!    deduplicated, referentially consistent graph model;
//!    [`plan_extractor`] turns a result summary into a normalized
//!    execution-plan tree.
//!
//! All of it is pure and synchronous: no I/O, no shared state, fresh output
//! per call. Normalization is composable with extraction, not baked in —
//! extracted property maps carry whatever values were supplied.

pub mod graph_extractor;
pub mod plan_extractor;
pub mod type_converter;
