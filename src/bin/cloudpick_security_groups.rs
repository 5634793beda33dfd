//! cloudpick-security-groups: print security group IDs from `aws ec2 describe-security-groups`
//!
//! One group ID per security group; a group without an ID prints `unknown`.
//!
//! Usage:
//!   aws ec2 describe-security-groups --group-names default | cloudpick-security-groups

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use cloudpick::cli::{self, FilterArgs};
use cloudpick::SecurityGroupIdExtractor;

#[derive(Parser, Debug)]
#[command(name = "cloudpick-security-groups", version)]
#[command(about = "Print security group IDs from `aws ec2 describe-security-groups` output", long_about = None)]
struct Args {
    #[command(flatten)]
    filter: FilterArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cli::run(&SecurityGroupIdExtractor, args.filter)
}
