use super::{guarded_records, Extractor};
use crate::error::ExtractError;
use crate::types::{FailurePolicy, Line};
use serde_json::Value;

/// Emits the identifier of every security group
///
/// A group whose `GroupId` is absent or falsy (including the empty string)
/// yields a fallback line rather than failing the whole document.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecurityGroupIdExtractor;

impl Extractor for SecurityGroupIdExtractor {
    const NAME: &'static str = "security-groups";
    const SOURCE_COMMAND: &'static str = "aws ec2 describe-security-groups";
    const TOP_LEVEL_KEY: &'static str = "SecurityGroups";
    const DEFAULT_POLICY: FailurePolicy = FailurePolicy::Sentinel;

    fn extract(&self, document: &Value) -> Result<Vec<Line>, ExtractError> {
        let Some(groups) = guarded_records(document, Self::TOP_LEVEL_KEY)? else {
            return Ok(vec![Line::Fallback]);
        };

        groups
            .into_iter()
            .map(|group| -> Result<Line, ExtractError> {
                match group.get("GroupId")? {
                    Some(id) if id.is_truthy() => Ok(Line::Value(id.text()?)),
                    _ => Ok(Line::Fallback),
                }
            })
            .collect()
    }
}
