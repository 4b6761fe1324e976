mod args;
mod config;
mod duration;
mod error;
mod fs;
mod handler;
mod header;
mod packet;
mod parser;
mod query_class;
mod query_type;
mod question;
mod record;
mod record_data;
mod resolver;
mod root;
mod writer;

use anyhow::Result;
use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use crate::args::Args;
use crate::config::load_config;
use crate::handler::UdpHandler;
use crate::resolver::IterativeResolver;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to initialize logger");

    let args = Args::parse();

    let settings = load_config(args.config.as_deref())?
        .apply_args(&args)
        .to_settings()?;

    // resolutions carry no shared state, every domain gets its own task
    let mut tasks = Vec::new();
    for domain in args.domains {
        let settings = settings.clone();

        tasks.push(tokio::task::spawn_blocking(move || {
            let resolver = IterativeResolver::new(
                Box::new(UdpHandler::new(settings.timeout)),
                settings,
            );

            let res = resolver.resolve(&domain);

            (domain, res)
        }));
    }

    for task in tasks {
        let (domain, res) = task.await?;

        match res {
            Ok(addr) => println!("{} {}", domain, addr),
            Err(e) => error!("failed to resolve {}: {}", domain, e),
        }
    }

    Ok(())
}
