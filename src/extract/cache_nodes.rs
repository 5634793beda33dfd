use super::{guarded_records, Extractor};
use crate::error::ExtractError;
use crate::types::{FailurePolicy, Line};
use serde_json::Value;

/// Emits the endpoint address of every cache node across all clusters
///
/// A cluster whose `CacheNodes` is empty yields one fallback line in its
/// place, so every cluster is represented in the output.
#[derive(Debug, Default, Clone, Copy)]
pub struct CacheNodeEndpointExtractor;

impl Extractor for CacheNodeEndpointExtractor {
    const NAME: &'static str = "cache-nodes";
    const SOURCE_COMMAND: &'static str =
        "aws elasticache describe-cache-clusters --show-cache-node-info";
    const TOP_LEVEL_KEY: &'static str = "CacheClusters";
    const DEFAULT_POLICY: FailurePolicy = FailurePolicy::Sentinel;

    fn extract(&self, document: &Value) -> Result<Vec<Line>, ExtractError> {
        let Some(clusters) = guarded_records(document, Self::TOP_LEVEL_KEY)? else {
            return Ok(vec![Line::Fallback]);
        };

        let mut lines = Vec::new();
        for cluster in clusters {
            let nodes = cluster.field("CacheNodes")?;
            if !nodes.is_truthy() {
                lines.push(Line::Fallback);
                continue;
            }
            for node in nodes.elements()? {
                let address = node.field("Endpoint")?.field("Address")?;
                lines.push(Line::Value(address.text()?));
            }
        }
        Ok(lines)
    }
}
