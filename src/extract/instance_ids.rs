use super::{records, Extractor};
use crate::error::ExtractError;
use crate::types::{FailurePolicy, Line};
use serde_json::Value;

/// Emits the identifier of every instance created by a launch request
#[derive(Debug, Default, Clone, Copy)]
pub struct InstanceIdExtractor;

impl Extractor for InstanceIdExtractor {
    const NAME: &'static str = "instance-ids";
    const SOURCE_COMMAND: &'static str = "aws ec2 run-instances";
    const TOP_LEVEL_KEY: &'static str = "Instances";
    const DEFAULT_POLICY: FailurePolicy = FailurePolicy::Propagate;

    fn extract(&self, document: &Value) -> Result<Vec<Line>, ExtractError> {
        records(document, Self::TOP_LEVEL_KEY)?
            .into_iter()
            .map(|instance| -> Result<Line, ExtractError> {
                Ok(Line::Value(instance.field("InstanceId")?.text()?))
            })
            .collect()
    }
}
