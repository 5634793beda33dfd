//! cloudpick-cache-nodes: print cache node endpoint addresses from `aws elasticache describe-cache-clusters --show-cache-node-info`
//!
//! One address per cache node across all clusters; a cluster with no nodes,
//! an empty cluster list, or malformed input prints `unknown`.
//!
//! Usage:
//!   aws elasticache describe-cache-clusters --show-cache-node-info | cloudpick-cache-nodes

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use cloudpick::cli::{self, FilterArgs};
use cloudpick::CacheNodeEndpointExtractor;

#[derive(Parser, Debug)]
#[command(name = "cloudpick-cache-nodes", version)]
#[command(about = "Print cache node endpoint addresses from `aws elasticache describe-cache-clusters --show-cache-node-info` output", long_about = None)]
struct Args {
    #[command(flatten)]
    filter: FilterArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    cli::run(&CacheNodeEndpointExtractor, args.filter)
}
