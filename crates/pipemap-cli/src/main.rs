//! Pipeline graph CLI.
//!
//! Provides the `pipemap` binary. The `build` subcommand loads the JSON
//! descriptors the project tooling writes (scanned modules and contracts,
//! authored metadata, run history), assembles the pipeline graph via
//! `pipemap_core::build()`, and prints it as JSON -- either the graph
//! itself or one of the render payloads the visualization surfaces
//! consume.
//!
//! Descriptor flags are optional; a missing flag means that input is
//! empty, never an error. The same build entry point backs every output
//! format, so all formats agree on the underlying graph.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use pipemap_core::export::{elements, force_graph};
use pipemap_core::load::{load_contracts, load_meta, load_modules, load_runs};
use pipemap_core::{build, Graph, ProjectLayout};

/// Pipeline graph assembly and export.
#[derive(Parser)]
#[command(name = "pipemap", about = "Assemble a project pipeline graph")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Build the pipeline graph from JSON descriptors and emit it as JSON.
    Build {
        /// Scanned module list (JSON array of module specs).
        #[arg(long)]
        modules: Option<PathBuf>,

        /// Scanned contract list (JSON array of contract schemas).
        #[arg(long)]
        contracts: Option<PathBuf>,

        /// Authored metadata bundle (phases, overrides, manual edges).
        #[arg(long)]
        meta: Option<PathBuf>,

        /// Run history.
        #[arg(long)]
        runs: Option<PathBuf>,

        /// Documentation root to scan for Markdown files.
        #[arg(long)]
        docs: Option<PathBuf>,

        /// Output shape.
        #[arg(long, value_enum, default_value = "graph")]
        format: Format,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,

        /// Output file (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output shapes of the build subcommand.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// The assembled graph itself.
    Graph,
    /// The canvas payload (`{nodes: [{data}], edges: [{data}]}`).
    Elements,
    /// The force-layout payload (`{nodes, links}`).
    Force,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Build {
            modules,
            contracts,
            meta,
            runs,
            docs,
            format,
            pretty,
            output,
        } => {
            let exit_code = run_build(modules, contracts, meta, runs, docs, format, pretty, output);
            process::exit(exit_code);
        }
    }
}

/// Execute the build subcommand.
///
/// Returns exit code: 0 = success, 1 = descriptor load failure,
/// 2 = output failure.
#[allow(clippy::too_many_arguments)]
fn run_build(
    modules: Option<PathBuf>,
    contracts: Option<PathBuf>,
    meta: Option<PathBuf>,
    runs: Option<PathBuf>,
    docs: Option<PathBuf>,
    format: Format,
    pretty: bool,
    output: Option<PathBuf>,
) -> i32 {
    let modules = match modules.as_deref().map(load_modules).transpose() {
        Ok(loaded) => loaded.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let contracts = match contracts.as_deref().map(load_contracts).transpose() {
        Ok(loaded) => loaded.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let meta = match meta.as_deref().map(load_meta).transpose() {
        Ok(loaded) => loaded.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let runs = match runs.as_deref().map(load_runs).transpose() {
        Ok(loaded) => loaded.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let layout = ProjectLayout {
        docs_root: docs
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    tracing::info!(
        modules = modules.len(),
        contracts = contracts.len(),
        runs = runs.runs.len(),
        "descriptors loaded"
    );

    let graph = build(&layout, &modules, &contracts, &meta, &runs);
    tracing::info!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        schema_version = %graph.schema_version,
        "graph assembled"
    );

    let json = match render(&graph, format, pretty) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: failed to serialize graph: {}", e);
            return 2;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(&path, json) {
                eprintln!("Error: failed to write {}: {}", path.display(), e);
                return 2;
            }
        }
        None => println!("{}", json),
    }
    0
}

/// Serialize the graph in the requested output shape.
fn render(graph: &Graph, format: Format, pretty: bool) -> serde_json::Result<String> {
    let value = match format {
        Format::Graph => serde_json::to_value(graph)?,
        Format::Elements => serde_json::to_value(elements(graph))?,
        Format::Force => serde_json::to_value(force_graph(graph))?,
    };
    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}
