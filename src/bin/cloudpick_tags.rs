//! cloudpick-tags: print the resource IDs of tags from `aws ec2 describe-tags`
//!
//! One resource ID per tag. Malformed input is a fatal error unless
//! `--on-error sentinel` is given.
//!
//! Usage:
//!   aws ec2 describe-tags --filters Name=key,Values=Name | cloudpick-tags

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use cloudpick::cli::{self, FilterArgs};
use cloudpick::TagResourceIdExtractor;

#[derive(Parser, Debug)]
#[command(name = "cloudpick-tags", version)]
#[command(about = "Print the resource IDs of tags from `aws ec2 describe-tags` output", long_about = None)]
struct Args {
    #[command(flatten)]
    filter: FilterArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cli::run(&TagResourceIdExtractor, args.filter)
}
