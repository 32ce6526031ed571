//! Graph objects carried inside Bolt result values.
//!
//! These are the driver-owned shapes the transformation layer reads: nodes
//! with labels and properties, relationships with their recorded endpoint
//! identities, and paths as ordered `(start, relationship, end)` segments.
//!
//! A path segment's relationship keeps its own start/end identities from the
//! store. When a path traverses a relationship against its direction, the
//! segment's `start`/`end` and the relationship's recorded endpoints disagree
//! on purpose; the relationship is authoritative for orientation.

use serde::Serialize;
use std::collections::HashMap;

use crate::bolt::values::BoltValue;

/// A graph node: stable identity, labels, and a property map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub identity: i64,
    pub labels: Vec<String>,
    pub properties: HashMap<String, BoltValue>,
}

impl Node {
    pub fn new(identity: i64, labels: Vec<String>, properties: HashMap<String, BoltValue>) -> Self {
        Node {
            identity,
            labels,
            properties,
        }
    }
}

/// A graph relationship between two node identities.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub identity: i64,
    pub start_node_identity: i64,
    pub end_node_identity: i64,
    #[serde(rename = "type")]
    pub rel_type: String,
    pub properties: HashMap<String, BoltValue>,
}

impl Relationship {
    pub fn new(
        identity: i64,
        start_node_identity: i64,
        end_node_identity: i64,
        rel_type: String,
        properties: HashMap<String, BoltValue>,
    ) -> Self {
        Relationship {
            identity,
            start_node_identity,
            end_node_identity,
            rel_type,
            properties,
        }
    }
}

/// One hop of a path, in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSegment {
    pub start: Node,
    pub relationship: Relationship,
    pub end: Node,
}

impl PathSegment {
    pub fn new(start: Node, relationship: Relationship, end: Node) -> Self {
        PathSegment {
            start,
            relationship,
            end,
        }
    }
}

/// An ordered sequence of path segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Path { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// First node of the path, if any.
    pub fn start(&self) -> Option<&Node> {
        self.segments.first().map(|segment| &segment.start)
    }

    /// Last node of the path, if any.
    pub fn end(&self) -> Option<&Node> {
        self.segments.last().map(|segment| &segment.end)
    }

    /// Number of hops.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
