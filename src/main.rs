#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # roster
//!
//! Runs the student/grade demonstration, or a single grade fetch, against the
//! simulated grade server.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use roster::{
    config::{self, Settings},
    driver,
    report::format_grades,
    source::{SimulatedServer, fetch_grades},
};
use tokio_util::sync::CancellationToken;
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Run the full demonstration
    Demo {
        /// Print the summary as JSON
        json: bool,
    },
    /// Fetch grades once and print them
    Fetch,
}

/// Command line options shared by all commands.
#[derive(Debug, Clone)]
struct Opts {
    /// Overrides the simulated latency, in milliseconds
    latency_ms: Option<u64>,
    /// Overrides the fetch timeout, in milliseconds
    timeout_ms: Option<u64>,
    /// The command to run
    cmd:        Cmd,
}

/// Parse the command line arguments and return the options
fn options() -> Opts {
    let latency_ms = long("latency-ms")
        .help("Simulated server latency in milliseconds")
        .argument::<u64>("MS")
        .optional();

    let timeout_ms = long("timeout-ms")
        .help("Give up on the fetch after this many milliseconds")
        .argument::<u64>("MS")
        .optional();

    let json = long("json").help("Print the summary as JSON").switch();
    let demo = construct!(Cmd::Demo { json })
        .to_options()
        .command("demo")
        .help("Run the student and grade demonstration");

    let fetch = pure(Cmd::Fetch)
        .to_options()
        .command("fetch")
        .help("Fetch grades from the simulated server once");

    let cmd = construct!([demo, fetch]);

    construct!(Opts {
        latency_ms,
        timeout_ms,
        cmd
    })
    .to_options()
    .descr("Students, groups and a simulated grade server")
    .run()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let opts = options();
    let settings: Settings = config::settings().with_overrides(
        opts.latency_ms.map(Duration::from_millis),
        opts.timeout_ms.map(Duration::from_millis),
    );
    let server = SimulatedServer::new(settings.latency());

    match opts.cmd {
        Cmd::Demo { json } => {
            let summary = driver::run(&settings, Arc::new(server)).await?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).context("Could not serialize summary")?
                );
            } else {
                println!("{}", summary.render());
            }
        }
        Cmd::Fetch => {
            let grades = fetch_grades(&server, settings.timeout(), &CancellationToken::new())
                .await
                .context("Could not fetch grades")?;
            println!("{}", format_grades(&grades));
        }
    };

    Ok(())
}
