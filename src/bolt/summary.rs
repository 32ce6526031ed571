//! Query result summary: the plan / profile side of a result.
//!
//! A result carries its rows plus a summary. When the query was explained the
//! summary holds a [`PlanInfo`] tree; when it was profiled it holds a
//! [`ProfileInfo`] tree instead, which is the same shape annotated with
//! runtime counters on every node. Most results carry neither.

use std::collections::HashMap;

use crate::bolt::values::{BoltValue, Record};

/// A materialized query result: rows plus summary metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub records: Vec<Record>,
    pub summary: ResultSummary,
}

impl QueryResult {
    pub fn new(records: Vec<Record>, summary: ResultSummary) -> Self {
        QueryResult { records, summary }
    }
}

/// Summary metadata attached to a result. Plan and profile are mutually
/// exclusive in practice; when both are present the profile wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSummary {
    pub plan: Option<PlanInfo>,
    pub profile: Option<ProfileInfo>,
}

impl ResultSummary {
    pub fn with_plan(plan: PlanInfo) -> Self {
        ResultSummary {
            plan: Some(plan),
            profile: None,
        }
    }

    pub fn with_profile(profile: ProfileInfo) -> Self {
        ResultSummary {
            plan: None,
            profile: Some(profile),
        }
    }
}

/// One operator of an execution plan, as reported by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanInfo {
    pub operator_type: String,
    pub identifiers: Vec<String>,
    /// Operator arguments, keys verbatim (hyphenated keys included).
    pub arguments: HashMap<String, BoltValue>,
    pub children: Vec<PlanInfo>,
}

/// One operator of a profiled plan: a [`PlanInfo`] shape plus runtime
/// counters, recursively on every child.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInfo {
    pub operator_type: String,
    pub identifiers: Vec<String>,
    pub arguments: HashMap<String, BoltValue>,
    pub db_hits: i64,
    pub rows: i64,
    pub children: Vec<ProfileInfo>,
}
