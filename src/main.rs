use anyhow::Result;
use clap::Parser;

use tureng_cli::cli::Args;
use tureng_cli::cli::commands::lookup::{self, LookupOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let options = LookupOptions {
        query: args.query(),
        count: args.count,
        types: args.type_filters(),
    };

    lookup::run_lookup(options).await
}
