//! Recursive value conversion.
//!
//! [`convert`] is the traversal primitive shared by the normalization
//! pipeline: given a predicate and a transform, it walks an arbitrarily
//! nested value and rewrites every matching node, recursing into lists and
//! maps and leaving everything else untouched.

use crate::bolt::values::BoltValue;

/// Walk `value`, replacing every node for which `is_match` holds with
/// `transform(node)`.
///
/// The transform's output is taken as-is — the converter does not recurse
/// into it. A transform that needs recursive treatment of its own output
/// calls back into `convert` itself.
///
/// Lists are rebuilt element-wise (order and length preserved), maps
/// entry-wise (key set preserved). Non-matching leaves, graph objects
/// included, are cloned unchanged. The input is never mutated.
pub fn convert<M, T>(value: &BoltValue, is_match: &M, transform: &T) -> BoltValue
where
    M: Fn(&BoltValue) -> bool,
    T: Fn(&BoltValue) -> BoltValue,
{
    if is_match(value) {
        return transform(value);
    }
    match value {
        BoltValue::List(items) => BoltValue::List(
            items
                .iter()
                .map(|item| convert(item, is_match, transform))
                .collect(),
        ),
        BoltValue::Map(entries) => BoltValue::Map(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), convert(item, is_match, transform)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Render every integer leaf as its exact decimal string.
///
/// Bolt integers span the full signed 64-bit range; consumers that parse
/// JSON numbers as doubles drop the low bits past ±(2^53 - 1). Applying
/// this pass before serialization guarantees no precision loss. The output
/// tree has the same shape as the input; only integer leaves change type.
pub fn normalize_integers(value: &BoltValue) -> BoltValue {
    convert(
        value,
        &|v| matches!(v, BoltValue::Integer(_)),
        &|v| match v {
            BoltValue::Integer(int) => BoltValue::String(int.to_decimal_string()),
            other => other.clone(),
        },
    )
}
