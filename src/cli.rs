//! Parses the command line arguments.
//!
//! Loads a route file into a [`PrefixRouter`] and looks up each address given
//! on the command line. Basic usage, with logging on:
//!
//! ```cargo run -- --routes routes.txt --log 192.168.0.1 10.0.0.1```

use clap::Parser;
use std::{
    io::{self, Write},
    path::PathBuf,
};

use crate::{
    ipv4::Ipv4ParseError,
    logging::{init_events, LoggingError},
    route_parsing::{load_routes, RouteFileError},
    Ipv4Address, PrefixRouter, Router,
};

/// Stores the different command line arguments.
#[derive(Parser, Debug)]
#[command(version, about = "Longest-prefix-match lookups against a route file")]
struct Args {
    /// Logging flag. Used to turn logging on or off.
    #[arg(short, long)]
    log: bool,
    /// Directory the log file is written to
    #[arg(long, default_value = "./logs")]
    log_dir: PathBuf,
    /// File path to the route file to load
    #[arg(short, long)]
    routes: PathBuf,
    /// Print the prefix tree after loading the routes
    #[arg(short, long)]
    dump: bool,
    /// Addresses to look up
    addresses: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Routes(#[from] RouteFileError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Address(#[from] Ipv4ParseError),
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Parses command line arguments and runs the lookups they ask for.
pub fn parse_args() -> Result<(), CliError> {
    let args = Args::parse();
    if args.log {
        init_events(&args.log_dir)?;
    }
    run(&args, &mut io::stdout().lock())
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    // Parse every address before doing any work
    let addresses = args
        .addresses
        .iter()
        .map(|text| Ipv4Address::parse(text))
        .collect::<Result<Vec<_>, _>>()?;

    let router: PrefixRouter = load_routes(&args.routes)?.into_iter().collect();
    tracing::info!(
        "Loaded {} routes from {}",
        router.tree().route_count(),
        args.routes.display()
    );

    if args.dump {
        writeln!(out, "{}", router.tree())?;
    }
    for address in addresses {
        match router.get(address) {
            Some(gateway) => writeln!(out, "{} -> {}", address, gateway)?,
            None => writeln!(out, "{} -> unreachable", address)?,
        }
    }
    Ok(())
}
