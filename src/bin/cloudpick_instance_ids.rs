//! cloudpick-instance-ids: print the IDs of newly launched instances from `aws ec2 run-instances`
//!
//! One instance ID per launched instance. Malformed input is a fatal error
//! unless `--on-error sentinel` is given.
//!
//! Usage:
//!   aws ec2 run-instances --image-id ami-0abc --count 2 | cloudpick-instance-ids

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use cloudpick::cli::{self, FilterArgs};
use cloudpick::InstanceIdExtractor;

#[derive(Parser, Debug)]
#[command(name = "cloudpick-instance-ids", version)]
#[command(about = "Print the IDs of newly launched instances from `aws ec2 run-instances` output", long_about = None)]
struct Args {
    #[command(flatten)]
    filter: FilterArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cli::run(&InstanceIdExtractor, args.filter)
}
