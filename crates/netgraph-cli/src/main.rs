//! netgraph CLI - build network topologies and compute optimal paths.
//!
//! Graphs travel as JSON documents of node records; the CLI loads one,
//! runs the selected algorithm (or all four side by side), and prints the
//! result as a table or JSON. A small numbered store covers the
//! create/list/get/path surface of the companion persistence service.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use netgraph_common::GraphId;
use netgraph_engine::Algorithm;
use std::path::PathBuf;

/// Network topology path and flow calculator.
///
/// A command-line interface for inspecting topology files and computing
/// shortest paths or maximum flow between two nodes.
#[derive(Parser)]
#[command(name = "netgraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format (default for TTY)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Algorithm selection, including the side-by-side comparison mode.
#[derive(Clone, Copy, ValueEnum, Default)]
enum AlgorithmChoice {
    /// Shortest path, non-negative weights
    #[default]
    Dijkstra,
    /// Heuristic search (positional heuristic, not guaranteed optimal)
    Astar,
    /// Shortest path with negative-cycle detection
    BellmanFord,
    /// Maximum flow
    EdmondsKarp,
    /// Run all four and compare
    All,
}

impl AlgorithmChoice {
    /// Returns the selected algorithm, or `None` for comparison mode.
    fn algorithm(self) -> Option<Algorithm> {
        match self {
            Self::Dijkstra => Some(Algorithm::Dijkstra),
            Self::Astar => Some(Algorithm::Astar),
            Self::BellmanFord => Some(Algorithm::BellmanFord),
            Self::EdmondsKarp => Some(Algorithm::EdmondsKarp),
            Self::All => None,
        }
    }
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Compute a path or maximum flow between two nodes
    Compute {
        /// Path to the graph JSON file
        file: PathBuf,

        /// Source node name
        #[arg(long)]
        from: String,

        /// Target node name
        #[arg(long)]
        to: String,

        /// Algorithm to run, or `all` for a comparison table
        #[arg(long, short, default_value = "dijkstra")]
        algorithm: AlgorithmChoice,
    },

    /// Display graph information (counts, per-node degrees)
    Info {
        /// Path to the graph JSON file
        file: PathBuf,
    },

    /// Check a graph file against the wire-format constraints
    Validate {
        /// Path to the graph JSON file
        file: PathBuf,
    },

    /// Manage a local store of numbered graphs
    #[command(subcommand)]
    Store(StoreCommands),
}

/// Graph store commands.
#[derive(Subcommand)]
enum StoreCommands {
    /// Add a graph file to the store under the next free id
    Create {
        /// Path to the graph JSON file
        file: PathBuf,

        /// Store directory
        #[arg(long, short, default_value = ".netgraph")]
        dir: PathBuf,
    },

    /// List stored graphs
    List {
        /// Store directory
        #[arg(long, short, default_value = ".netgraph")]
        dir: PathBuf,
    },

    /// Print one stored graph
    Show {
        /// Graph id
        id: GraphId,

        /// Store directory
        #[arg(long, short, default_value = ".netgraph")]
        dir: PathBuf,
    },

    /// Shortest path within a stored graph (Dijkstra)
    Path {
        /// Graph id
        id: GraphId,

        /// Source node name
        #[arg(long)]
        from: String,

        /// Target node name
        #[arg(long)]
        to: String,

        /// Store directory
        #[arg(long, short, default_value = ".netgraph")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let result = match cli.command {
        Commands::Compute {
            file,
            from,
            to,
            algorithm,
        } => commands::compute::run(&file, &from, &to, algorithm.algorithm(), cli.format, cli.quiet),
        Commands::Info { file } => commands::info::run(&file, cli.format, cli.quiet),
        Commands::Validate { file } => commands::validate::run(&file, cli.format, cli.quiet),
        Commands::Store(cmd) => commands::store::run(cmd, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
