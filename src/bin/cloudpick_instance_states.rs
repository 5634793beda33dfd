//! cloudpick-instance-states: print instance lifecycle state names from `aws ec2 describe-instance-status`
//!
//! One state name (`running`, `stopped`, ...) per instance status.
//!
//! Usage:
//!   aws ec2 describe-instance-status --include-all-instances | cloudpick-instance-states

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use cloudpick::cli::{self, FilterArgs};
use cloudpick::InstanceStateExtractor;

#[derive(Parser, Debug)]
#[command(name = "cloudpick-instance-states", version)]
#[command(about = "Print instance lifecycle state names from `aws ec2 describe-instance-status` output", long_about = None)]
struct Args {
    #[command(flatten)]
    filter: FilterArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cli::run(&InstanceStateExtractor, args.filter)
}
