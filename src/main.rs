mod cuts;
mod generator;
mod navigator;
mod session;
mod visualization;

use anyhow::{anyhow, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::navigator::DisplaySnapshot;
use crate::session::{Direction, Session};
use crate::visualization::ViewerSettings;

/// Step through a single run of Karger's randomized minimum cut contraction.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of nodes of the generated graph
    #[arg(long, default_value_t = 5)]
    nodes: usize,

    /// Number of edges of the generated graph
    #[arg(long, default_value_t = 7)]
    edges: usize,

    /// Seed for graph generation and edge selection, random if not given
    #[arg(long)]
    seed: Option<u64>,

    /// Print every step to stdout instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level_filter = args
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);
    tracing_subscriber::fmt()
        .with_max_level(log_level_filter)
        .with_target(false)
        .init();

    let rng = match args.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    if args.print {
        return print_steps(args.nodes, args.edges, rng);
    }

    let settings = ViewerSettings {
        node_count: args.nodes,
        edge_count: args.edges,
    };
    visualization::run_viewer(settings, rng).map_err(|err| anyhow!("viewer failed: {err}"))
}

fn print_steps(node_count: usize, edge_count: usize, mut rng: StdRng) -> anyhow::Result<()> {
    let mut session = Session::generate(node_count, edge_count, &mut rng)
        .context("cannot compute a cut for this graph")?;

    loop {
        match session.current() {
            DisplaySnapshot::Step { index, graph, edge } => println!(
                "Step {}: contract the edge ({}, {}) of a graph with {} nodes and {} edges",
                index + 1,
                edge.0.index(),
                edge.1.index(),
                graph.node_count(),
                graph.edge_count()
            ),
            DisplaySnapshot::Finished(cut) => println!("{cut}"),
        }

        if !session.navigator().can_advance() {
            break;
        }
        session.navigate(Direction::Forward);
    }

    Ok(())
}
