//! Bolt value union and result records.
//!
//! A query result arrives as rows of heterogeneous values: scalars, 64-bit
//! integers, lists, maps, and graph objects (nodes, relationships, paths).
//! `BoltValue` is the tagged union over all of them; `Record` is one row,
//! keyed by the query's return columns.
//!
//! Integers get their own leaf type (`BoltInteger`) rather than folding into
//! a plain number: Bolt integers span the full signed 64-bit range, and
//! downstream JSON consumers that parse numbers as IEEE-754 doubles silently
//! lose the low bits past ±(2^53 - 1). The transformation layer renders
//! out-of-range values as exact decimal strings instead (see
//! [`crate::transform::type_converter::normalize_integers`]).

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::bolt::graph_objects::{Node, Path, Relationship};

/// Largest integer exactly representable in an IEEE-754 double (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// A Bolt integer: signed 64-bit, potentially outside the double-safe range.
///
/// Kept opaque so call sites go through [`BoltInteger::to_decimal_string`]
/// for lossless rendering instead of casting to a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoltInteger(i64);

impl BoltInteger {
    pub fn new(value: i64) -> Self {
        BoltInteger(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Exact base-10 rendering, sign preserved, no rounding.
    pub fn to_decimal_string(&self) -> String {
        self.0.to_string()
    }

    /// Whether the value survives a round-trip through an IEEE-754 double.
    pub fn is_safe(&self) -> bool {
        (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&self.0)
    }
}

impl From<i64> for BoltInteger {
    fn from(value: i64) -> Self {
        BoltInteger(value)
    }
}

impl std::fmt::Display for BoltInteger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The tagged union over every value kind a Bolt result can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum BoltValue {
    Null,
    Boolean(bool),
    Integer(BoltInteger),
    Float(f64),
    String(String),
    List(Vec<BoltValue>),
    Map(HashMap<String, BoltValue>),
    Node(Node),
    Relationship(Relationship),
    Path(Path),
}

impl BoltValue {
    /// Human-readable kind name, for diagnostics and conversion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            BoltValue::Null => "Null",
            BoltValue::Boolean(_) => "Boolean",
            BoltValue::Integer(_) => "Integer",
            BoltValue::Float(_) => "Float",
            BoltValue::String(_) => "String",
            BoltValue::List(_) => "List",
            BoltValue::Map(_) => "Map",
            BoltValue::Node(_) => "Node",
            BoltValue::Relationship(_) => "Relationship",
            BoltValue::Path(_) => "Path",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, BoltValue::Null)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, BoltValue::Integer(_))
    }

    pub fn is_node(&self) -> bool {
        matches!(self, BoltValue::Node(_))
    }

    pub fn is_relationship(&self) -> bool {
        matches!(self, BoltValue::Relationship(_))
    }

    pub fn is_path(&self) -> bool {
        matches!(self, BoltValue::Path(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            BoltValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<BoltInteger> {
        match self {
            BoltValue::Integer(int) => Some(*int),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[BoltValue]> {
        match self {
            BoltValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, BoltValue>> {
        match self {
            BoltValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            BoltValue::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Build a value tree from parsed JSON. Numbers with a fractional part
    /// become `Float`; whole numbers become `Integer`.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => BoltValue::Null,
            Value::Bool(b) => BoltValue::Boolean(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    BoltValue::Integer(BoltInteger(i))
                } else {
                    BoltValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            Value::String(s) => BoltValue::String(s),
            Value::Array(items) => {
                BoltValue::List(items.into_iter().map(BoltValue::from_json).collect())
            }
            Value::Object(entries) => BoltValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, BoltValue::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for BoltValue {
    fn from(value: bool) -> Self {
        BoltValue::Boolean(value)
    }
}

impl From<i64> for BoltValue {
    fn from(value: i64) -> Self {
        BoltValue::Integer(BoltInteger(value))
    }
}

impl From<f64> for BoltValue {
    fn from(value: f64) -> Self {
        BoltValue::Float(value)
    }
}

impl From<&str> for BoltValue {
    fn from(value: &str) -> Self {
        BoltValue::String(value.to_string())
    }
}

impl From<String> for BoltValue {
    fn from(value: String) -> Self {
        BoltValue::String(value)
    }
}

impl From<Vec<BoltValue>> for BoltValue {
    fn from(value: Vec<BoltValue>) -> Self {
        BoltValue::List(value)
    }
}

impl From<HashMap<String, BoltValue>> for BoltValue {
    fn from(value: HashMap<String, BoltValue>) -> Self {
        BoltValue::Map(value)
    }
}

impl From<Node> for BoltValue {
    fn from(value: Node) -> Self {
        BoltValue::Node(value)
    }
}

impl From<Relationship> for BoltValue {
    fn from(value: Relationship) -> Self {
        BoltValue::Relationship(value)
    }
}

impl From<Path> for BoltValue {
    fn from(value: Path) -> Self {
        BoltValue::Path(value)
    }
}

/// Typed extraction failed: the value held a different kind.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValueConversionError {
    #[error("expected {expected} value but found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

fn mismatch(expected: &'static str, value: &BoltValue) -> ValueConversionError {
    ValueConversionError::TypeMismatch {
        expected,
        actual: value.type_name(),
    }
}

impl TryFrom<BoltValue> for i64 {
    type Error = ValueConversionError;

    fn try_from(value: BoltValue) -> Result<Self, Self::Error> {
        match value {
            BoltValue::Integer(int) => Ok(int.value()),
            other => Err(mismatch("Integer", &other)),
        }
    }
}

impl TryFrom<BoltValue> for bool {
    type Error = ValueConversionError;

    fn try_from(value: BoltValue) -> Result<Self, Self::Error> {
        match value {
            BoltValue::Boolean(b) => Ok(b),
            other => Err(mismatch("Boolean", &other)),
        }
    }
}

impl TryFrom<BoltValue> for f64 {
    type Error = ValueConversionError;

    fn try_from(value: BoltValue) -> Result<Self, Self::Error> {
        match value {
            BoltValue::Float(f) => Ok(f),
            other => Err(mismatch("Float", &other)),
        }
    }
}

impl TryFrom<BoltValue> for String {
    type Error = ValueConversionError;

    fn try_from(value: BoltValue) -> Result<Self, Self::Error> {
        match value {
            BoltValue::String(s) => Ok(s),
            other => Err(mismatch("String", &other)),
        }
    }
}

impl TryFrom<BoltValue> for Node {
    type Error = ValueConversionError;

    fn try_from(value: BoltValue) -> Result<Self, Self::Error> {
        match value {
            BoltValue::Node(node) => Ok(node),
            other => Err(mismatch("Node", &other)),
        }
    }
}

impl TryFrom<BoltValue> for Relationship {
    type Error = ValueConversionError;

    fn try_from(value: BoltValue) -> Result<Self, Self::Error> {
        match value {
            BoltValue::Relationship(rel) => Ok(rel),
            other => Err(mismatch("Relationship", &other)),
        }
    }
}

impl TryFrom<BoltValue> for Path {
    type Error = ValueConversionError;

    fn try_from(value: BoltValue) -> Result<Self, Self::Error> {
        match value {
            BoltValue::Path(path) => Ok(path),
            other => Err(mismatch("Path", &other)),
        }
    }
}

impl Serialize for BoltValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BoltValue::Null => serializer.serialize_unit(),
            BoltValue::Boolean(b) => serializer.serialize_bool(*b),
            // Exact in serde_json; normalize to a decimal string first when the
            // consumer parses numbers as doubles.
            BoltValue::Integer(int) => serializer.serialize_i64(int.value()),
            BoltValue::Float(f) => serializer.serialize_f64(*f),
            BoltValue::String(s) => serializer.serialize_str(s),
            BoltValue::List(items) => items.serialize(serializer),
            BoltValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            BoltValue::Node(node) => node.serialize(serializer),
            BoltValue::Relationship(rel) => rel.serialize(serializer),
            BoltValue::Path(path) => path.serialize(serializer),
        }
    }
}

/// One row of a query result: ordered column keys and one value per key.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    keys: Vec<String>,
    fields: Vec<BoltValue>,
}

impl Record {
    pub fn new(keys: Vec<String>, fields: Vec<BoltValue>) -> Self {
        Record { keys, fields }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn fields(&self) -> &[BoltValue] {
        &self.fields
    }

    /// Value of the named column, if present.
    pub fn get(&self, key: &str) -> Option<&BoltValue> {
        self.keys
            .iter()
            .position(|k| k == key)
            .and_then(|idx| self.fields.get(idx))
    }

    /// Columns in return order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoltValue)> {
        self.keys
            .iter()
            .map(|k| k.as_str())
            .zip(self.fields.iter())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
