//! Command-line surface shared by the filter binaries

use crate::extract::Extractor;
use crate::logging::{init_logging, LogLevel};
use crate::types::{FailurePolicy, FilterConfig, SENTINEL};
use crate::writer::LineWriter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// How to handle unreadable, malformed or unexpectedly shaped input
    /// (defaults to the filter's own policy)
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_error: Option<FailurePolicy>,

    /// Text printed in place of a missing value
    #[arg(long, default_value = SENTINEL)]
    pub sentinel: String,

    /// Diagnostic verbosity on stderr (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl FilterArgs {
    pub fn config<E: Extractor>(&self) -> FilterConfig {
        let config = FilterConfig::for_extractor::<E>().with_sentinel(self.sentinel.clone());
        match self.on_error {
            Some(policy) => config.with_policy(policy),
            None => config,
        }
    }
}

/// Run `extractor` as a filter from stdin (or FILE) to stdout
pub fn run<E: Extractor>(extractor: &E, args: FilterArgs) -> Result<()> {
    init_logging(args.log_level);
    let config = args.config::<E>();

    let reader = if let Some(path) = &args.input {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file: {}", path.display()))?;
        Box::new(BufReader::new(file)) as Box<dyn Read>
    } else {
        Box::new(std::io::stdin()) as Box<dyn Read>
    };

    let stdout = std::io::stdout();
    let mut writer = LineWriter::new(BufWriter::new(stdout.lock()), config.sentinel.clone());

    crate::run_filter(extractor, reader, &mut writer, &config)
        .with_context(|| format!("{} failed", E::NAME))
}
