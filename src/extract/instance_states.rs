use super::{guarded_records, Extractor};
use crate::error::ExtractError;
use crate::types::{FailurePolicy, Line};
use serde_json::Value;

/// Emits the lifecycle state name (`running`, `stopped`, ...) of every instance
#[derive(Debug, Default, Clone, Copy)]
pub struct InstanceStateExtractor;

impl Extractor for InstanceStateExtractor {
    const NAME: &'static str = "instance-states";
    const SOURCE_COMMAND: &'static str = "aws ec2 describe-instance-status";
    const TOP_LEVEL_KEY: &'static str = "InstanceStatuses";
    const DEFAULT_POLICY: FailurePolicy = FailurePolicy::Sentinel;

    fn extract(&self, document: &Value) -> Result<Vec<Line>, ExtractError> {
        let Some(statuses) = guarded_records(document, Self::TOP_LEVEL_KEY)? else {
            return Ok(vec![Line::Fallback]);
        };

        statuses
            .into_iter()
            .map(|status| -> Result<Line, ExtractError> {
                let name = status.field("InstanceState")?.field("Name")?;
                Ok(Line::Value(name.text()?))
            })
            .collect()
    }
}
