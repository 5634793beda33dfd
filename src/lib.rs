//! # Cloudpick - field extraction for cloud inventory output
//!
//! Small filters that read the JSON printed by a cloud inventory command and
//! print one plain-text line per extracted field, for use in shell pipelines.
//!
//! ## Modules
//!
//! - **document**: parsing and path-tracking field access over `serde_json::Value`
//! - **extract**: one [`Extractor`] per supported inventory command
//! - **writer**: plain line output with sentinel substitution
//! - **cli**: the argument group and runner shared by the binaries
//!
//! ## Quick Start
//!
//! ```rust
//! use cloudpick::{filter_document, FilterConfig, SecurityGroupIdExtractor};
//!
//! # fn main() -> anyhow::Result<()> {
//! let input = br#"{"SecurityGroups": [{"GroupId": "sg-1"}, {"GroupId": null}]}"#;
//! let config = FilterConfig::for_extractor::<SecurityGroupIdExtractor>();
//! let lines = filter_document(&SecurityGroupIdExtractor, input, &config)?;
//!
//! assert_eq!(lines, vec!["sg-1", "unknown"]);
//! # Ok(())
//! # }
//! ```
//!
//! Failures are surfaced according to the [`FailurePolicy`]: the guarded
//! extractors print a single sentinel line for malformed input, while the
//! others propagate the error.

use anyhow::Result;
use std::io::{Read, Write};
use tracing::debug;

pub mod cli;
pub mod document;
pub mod error;
pub mod extract;
pub mod logging;
pub mod types;
pub mod writer;

pub use error::{ErrorClass, ExtractError};
pub use extract::{
    CacheNodeEndpointExtractor, Extractor, InstanceIdExtractor, InstanceStateExtractor,
    SecurityGroupIdExtractor, TagResourceIdExtractor,
};
pub use types::{FailurePolicy, FilterConfig, Line, SENTINEL};
pub use writer::LineWriter;

/// Parse `input` and extract its lines, applying the configured policy
///
/// Returns the rendered lines, with fallbacks already replaced by the sentinel.
pub fn filter_document<E: Extractor>(
    extractor: &E,
    input: &[u8],
    config: &FilterConfig,
) -> std::result::Result<Vec<String>, ExtractError> {
    let result = document::parse_document(input).and_then(|doc| extractor.extract(&doc));
    let lines = extract::resolve(E::NAME, result, config.policy)?;

    Ok(lines
        .iter()
        .map(|line| line.render(&config.sentinel).to_string())
        .collect())
}

/// Main entry point: read one document from `reader` and write its lines
///
/// Nothing is written unless extraction as a whole succeeds (or the policy
/// turned the failure into a sentinel line).
pub fn run_filter<E: Extractor, R: Read, W: Write>(
    extractor: &E,
    reader: R,
    writer: &mut LineWriter<W>,
    config: &FilterConfig,
) -> Result<()> {
    let result = document::read_document(reader).and_then(|doc| extractor.extract(&doc));
    let lines = extract::resolve(E::NAME, result, config.policy)?;

    debug!(
        extractor = E::NAME,
        source = E::SOURCE_COMMAND,
        lines = lines.len(),
        "extraction complete"
    );

    writer.write_lines(&lines)?;
    writer.flush()?;
    Ok(())
}
