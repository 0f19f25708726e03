use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{inspect::InspectArgs, route::RouteArgs};

mod algorithms;
mod file_utils;
mod fragments;
mod geojson_export;
mod inspect;
mod parsers;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load map fragments and report what the road graph looks like
    Inspect {
        #[command(flatten)]
        args: InspectArgs,
    },
    /// Snap two points to the road graph and search between them
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// List the available search strategies
    Algorithms,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Inspect { args }) => inspect::run(args)?,
        Some(Commands::Route { args }) => route::run(args)?,
        Some(Commands::Algorithms) => algorithms::run(),
        None => {
            // Nothing to do without a command
        }
    }

    Ok(())
}
