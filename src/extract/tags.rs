use super::{records, Extractor};
use crate::error::ExtractError;
use crate::types::{FailurePolicy, Line};
use serde_json::Value;

/// Emits the identifier of the resource each tag is attached to
///
/// One line per tag, so a resource carrying several tags appears several
/// times.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagResourceIdExtractor;

impl Extractor for TagResourceIdExtractor {
    const NAME: &'static str = "tags";
    const SOURCE_COMMAND: &'static str = "aws ec2 describe-tags";
    const TOP_LEVEL_KEY: &'static str = "Tags";
    const DEFAULT_POLICY: FailurePolicy = FailurePolicy::Propagate;

    fn extract(&self, document: &Value) -> Result<Vec<Line>, ExtractError> {
        records(document, Self::TOP_LEVEL_KEY)?
            .into_iter()
            .map(|tag| -> Result<Line, ExtractError> {
                Ok(Line::Value(tag.field("ResourceId")?.text()?))
            })
            .collect()
    }
}
