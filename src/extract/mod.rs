//! Field extractors for cloud inventory documents
//!
//! Each extractor projects one hardcoded field path out of the document
//! produced by one inventory command. Extractors never decide how failures
//! are surfaced: they return an [`ExtractError`] and [`resolve`] applies the
//! caller's [`FailurePolicy`].

pub mod cache_nodes;
pub mod instance_ids;
pub mod instance_states;
pub mod security_groups;
pub mod tags;

pub use cache_nodes::CacheNodeEndpointExtractor;
pub use instance_ids::InstanceIdExtractor;
pub use instance_states::InstanceStateExtractor;
pub use security_groups::SecurityGroupIdExtractor;
pub use tags::TagResourceIdExtractor;

use crate::document::Node;
use crate::error::ExtractError;
use crate::types::{FailurePolicy, Line};
use serde_json::Value;
use tracing::warn;

pub trait Extractor {
    /// Short name used in diagnostics
    const NAME: &'static str;

    /// Inventory command whose output this extractor understands
    const SOURCE_COMMAND: &'static str;

    /// Key at the document root holding the records
    const TOP_LEVEL_KEY: &'static str;

    /// Policy applied when the caller does not choose one
    const DEFAULT_POLICY: FailurePolicy;

    /// Project the document into output lines, in document order
    fn extract(&self, document: &Value) -> Result<Vec<Line>, ExtractError>;
}

/// Apply `policy` to an extraction result
///
/// Under [`FailurePolicy::Sentinel`] any error becomes a single fallback line;
/// under [`FailurePolicy::Propagate`] it is returned unchanged.
pub fn resolve(
    name: &str,
    result: Result<Vec<Line>, ExtractError>,
    policy: FailurePolicy,
) -> Result<Vec<Line>, ExtractError> {
    match (result, policy) {
        (Ok(lines), _) => Ok(lines),
        (Err(err), FailurePolicy::Sentinel) => {
            warn!(
                extractor = name,
                class = ?err.class(),
                path = err.path().unwrap_or("-"),
                error = %err,
                "extraction failed, emitting sentinel"
            );
            Ok(vec![Line::Fallback])
        }
        (Err(err), FailurePolicy::Propagate) => Err(err),
    }
}

/// The record sequence under `key`, or `None` when it is present but falsy
///
/// Shared by the extractors that print a single fallback for an empty
/// top-level sequence.
fn guarded_records<'a>(document: &'a Value, key: &str) -> Result<Option<Vec<Node<'a>>>, ExtractError> {
    let records = Node::root(document).field(key)?;
    if !records.is_truthy() {
        return Ok(None);
    }
    records.elements().map(Some)
}

/// The record sequence under `key`, with no empty-sequence fallback
///
/// An empty object or string iterates as no records; `null`, numbers and
/// booleans are not sequences at all.
fn records<'a>(document: &'a Value, key: &str) -> Result<Vec<Node<'a>>, ExtractError> {
    let records = Node::root(document).field(key)?;
    match records.value() {
        Value::Object(obj) if obj.is_empty() => Ok(Vec::new()),
        Value::String(s) if s.is_empty() => Ok(Vec::new()),
        _ => records.elements(),
    }
}
