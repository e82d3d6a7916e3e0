//! coimbatore — EMS dispatch demo over a four-city hospital network.
//!
//! Seeds 24 hospitals and 17 neighbourhoods, queues a few patients, applies
//! a traffic jam, and runs one priority-ordered dispatch pass.  Set
//! `RUST_LOG=debug` to see every graph mutation and capacity change.

mod network;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ems_core::PlannerConfig;
use ems_dispatch::{DispatchObserver, Outcome, PlannerBuilder, Request};

use network::build_network;

#[derive(Parser)]
#[command(about = "Dispatch patients to the nearest hospital with free beds")]
struct Args {
    /// TOML file with planner settings (`high_cost_cutoff`, `enforce_cutoff`,
    /// `heuristic_estimate`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run a one-off nearest-hospital lookup from this location instead of
    /// the sample dispatch pass.
    #[arg(long)]
    origin: Option<String>,

    /// Print the planner state after the run.
    #[arg(long)]
    show: bool,
}

// (id, location, priority); 1 = most urgent.
const PATIENTS: &[(&str, &str, i64)] = &[
    ("P-101", "Gandhipuram", 2),
    ("P-102", "Perundurai",  1),
    ("P-103", "Ammapet",     3),
    ("P-104", "Rathinapuri", 1),
    ("P-105", "Ooty",        2),
];

struct ConsoleReport;

impl DispatchObserver for ConsoleReport {
    fn on_routed(&mut self, request: &Request, outcome: &Outcome) {
        let path = outcome.path().unwrap_or_default().join(" -> ");
        println!(
            "Dispatching EMS to {} at {} via {} in {:.1} time units.",
            request.id,
            request.origin,
            path,
            outcome.cost()
        );
    }

    fn on_no_route(&mut self, request: &Request) {
        println!("No viable route found for {} at {}.", request.id, request.origin);
    }

    fn on_pass_end(&mut self, routed: usize, failed: usize) {
        println!("{routed} dispatched, {failed} without a route.");
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<PlannerConfig> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;

    let (graph, roads) = build_network()?;
    info!(locations = graph.node_count(), roads, "network loaded");

    let mut planner = PlannerBuilder::from_config(config).graph(graph).build()?;

    if let Some(origin) = args.origin.as_deref() {
        match planner.find_nearest_facility(origin) {
            Outcome::Routed { path, cost } => {
                println!("Nearest hospital: {}", path.last().map_or("", String::as_str));
                println!("Route: {}", path.join(" -> "));
                println!("Total travel time: {cost:.1} time units");
            }
            Outcome::NoRoute => println!("No route found to a hospital from {origin}."),
        }
    } else {
        // Evening jam on the Gandhipuram approach to Royal Care.
        planner.set_traffic("Gandhipuram", "Royal Care Hospital", 2.5)?;

        for &(id, location, priority) in PATIENTS {
            planner.enqueue_request(id, location, priority);
        }
        planner.dispatch_all_with(&mut ConsoleReport);
    }

    if args.show {
        print!("{}", planner.snapshot());
    }
    Ok(())
}
