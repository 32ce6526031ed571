//! Graph extraction from result records.
//!
//! Scans result rows for graph values — bare nodes, bare relationships, and
//! nodes/relationships embedded in paths — and accumulates a deduplicated
//! graph model for visualization. Extraction is two-phase: nodes are
//! collected and relationships recorded as pending descriptors while rows
//! are scanned; descriptors are only materialized at the end, and only when
//! both endpoint identities landed in the extracted node set. A relationship
//! pointing at a node the query never returned is a normal occurrence and is
//! dropped, not reported.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::bolt::graph_objects::{Node, Relationship};
use crate::bolt::values::{BoltValue, Record};

/// A node of the extracted graph model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub labels: Vec<String>,
    pub properties: HashMap<String, BoltValue>,
}

/// A relationship of the extracted graph model. Both endpoint ids are
/// guaranteed to name a [`GraphNode`] in the same [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphRelationship {
    pub id: String,
    pub start_node_id: String,
    pub end_node_id: String,
    #[serde(rename = "type")]
    pub rel_type: String,
    pub properties: HashMap<String, BoltValue>,
}

/// The extracted graph model: nodes in first-discovery order, relationships
/// in the order they were encountered (dangling ones excluded).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub relationships: Vec<GraphRelationship>,
}

/// Relationship seen during the scan, not yet endpoint-checked.
#[derive(Debug, Clone)]
struct PendingRelationship {
    id: String,
    start_node_id: String,
    end_node_id: String,
    rel_type: String,
    properties: HashMap<String, BoltValue>,
}

/// Accumulates graph values across records, then finalizes in one
/// endpoint-filtering pass.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<GraphNode>,
    seen_nodes: HashSet<String>,
    pending: Vec<PendingRelationship>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        GraphBuilder::default()
    }

    /// Scan one record's columns, in column order, for graph values.
    /// Columns holding anything else are skipped.
    pub fn add_record(&mut self, record: &Record) {
        for (key, value) in record.iter() {
            match value {
                BoltValue::Node(node) => self.add_node(node),
                BoltValue::Relationship(rel) => self.add_relationship(rel),
                BoltValue::Path(path) => {
                    for segment in path.segments() {
                        self.add_node(&segment.start);
                        self.add_node(&segment.end);
                        // The relationship's own endpoints, not the segment's
                        // traversal order, decide its orientation.
                        self.add_relationship(&segment.relationship);
                    }
                }
                other => {
                    log::trace!("column '{}' holds {}, not a graph value", key, other.type_name());
                }
            }
        }
    }

    /// First occurrence wins; a re-encountered identity is ignored.
    pub fn add_node(&mut self, node: &Node) {
        let id = node.identity.to_string();
        if self.seen_nodes.insert(id.clone()) {
            self.nodes.push(GraphNode {
                id,
                labels: node.labels.clone(),
                properties: node.properties.clone(),
            });
        }
    }

    /// Record a relationship for endpoint checking at [`GraphBuilder::finish`].
    pub fn add_relationship(&mut self, rel: &Relationship) {
        self.pending.push(PendingRelationship {
            id: rel.identity.to_string(),
            start_node_id: rel.start_node_identity.to_string(),
            end_node_id: rel.end_node_identity.to_string(),
            rel_type: rel.rel_type.clone(),
            properties: rel.properties.clone(),
        });
    }

    /// Materialize the graph, keeping only relationships whose endpoints are
    /// both present in the extracted node set.
    pub fn finish(self) -> Graph {
        let GraphBuilder {
            nodes,
            seen_nodes,
            pending,
        } = self;

        let mut relationships = Vec::with_capacity(pending.len());
        for rel in pending {
            if seen_nodes.contains(&rel.start_node_id) && seen_nodes.contains(&rel.end_node_id) {
                relationships.push(GraphRelationship {
                    id: rel.id,
                    start_node_id: rel.start_node_id,
                    end_node_id: rel.end_node_id,
                    rel_type: rel.rel_type,
                    properties: rel.properties,
                });
            } else {
                log::debug!(
                    "dropping relationship '{}' ({}): endpoint '{}' or '{}' not in extracted node set",
                    rel.id,
                    rel.rel_type,
                    rel.start_node_id,
                    rel.end_node_id
                );
            }
        }

        Graph {
            nodes,
            relationships,
        }
    }
}

/// Extract the deduplicated graph model from a sequence of result records.
pub fn extract_graph(records: &[Record]) -> Graph {
    let mut builder = GraphBuilder::new();
    for record in records {
        builder.add_record(record);
    }
    builder.finish()
}
