//! Execution plan extraction from a result summary.
//!
//! Converts the server-reported plan or profile tree into a normalized
//! [`PlanNode`] tree for inspection UIs. Argument entries are flattened onto
//! each node with their keys kept verbatim (hyphenated keys included); when
//! the source is a profile, the runtime counters are carried onto every node
//! as `DbHits` and `Rows`.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;

use crate::bolt::summary::{PlanInfo, ProfileInfo, QueryResult};
use crate::bolt::values::BoltValue;

/// One operator of the normalized plan tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanNode {
    pub operator_type: String,
    pub identifiers: Vec<String>,
    /// Source arguments, keys verbatim, plus `DbHits`/`Rows` when profiled.
    /// Serialized as sibling fields of `operatorType`.
    pub arguments: HashMap<String, BoltValue>,
    pub children: Vec<PlanNode>,
}

impl PlanNode {
    /// Argument entry by its verbatim key.
    pub fn argument(&self, key: &str) -> Option<&BoltValue> {
        self.arguments.get(key)
    }
}

impl Serialize for PlanNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Arguments are flattened to siblings of operatorType, matching what
        // plan inspection UIs consume.
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("operatorType", &self.operator_type)?;
        map.serialize_entry("identifiers", &self.identifiers)?;
        for (key, value) in &self.arguments {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("children", &self.children)?;
        map.end()
    }
}

/// The extracted plan tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanTree {
    pub root: PlanNode,
}

/// Extract the plan tree from a result's summary.
///
/// A profile takes precedence over a plan; a summary carrying neither yields
/// `None`, which is the normal outcome for unexplained queries.
pub fn extract_plan(result: &QueryResult) -> Option<PlanTree> {
    let summary = &result.summary;
    if let Some(profile) = &summary.profile {
        Some(PlanTree {
            root: convert_profile(profile),
        })
    } else {
        summary.plan.as_ref().map(|plan| PlanTree {
            root: convert_plan(plan),
        })
    }
}

fn convert_plan(plan: &PlanInfo) -> PlanNode {
    PlanNode {
        operator_type: plan.operator_type.clone(),
        identifiers: plan.identifiers.clone(),
        arguments: plan.arguments.clone(),
        children: plan.children.iter().map(convert_plan).collect(),
    }
}

fn convert_profile(profile: &ProfileInfo) -> PlanNode {
    let mut arguments = profile.arguments.clone();
    // Counters live on the profile node itself, not in its arguments.
    arguments.insert("DbHits".to_string(), BoltValue::from(profile.db_hits));
    arguments.insert("Rows".to_string(), BoltValue::from(profile.rows));
    PlanNode {
        operator_type: profile.operator_type.clone(),
        identifiers: profile.identifiers.clone(),
        arguments,
        children: profile.children.iter().map(convert_profile).collect(),
    }
}
