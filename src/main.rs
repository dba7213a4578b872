// Licensed under the Apache License, Version 2.0 (the "License"); you may
// not use this file except in compliance with the License. You may obtain
// a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.

//! Analyse a graph stored as a Matrix Market file.
//!
//! Usage:
//!   cliquegraph soc-dolphins.mtx
//!   cliquegraph soc-dolphins.mtx.gz --format json --backend hashed -vv

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use cliquegraph::report::DEFAULT_MATRIX_LIMIT;
use cliquegraph::{load_graph, AnalysisOptions, AnalysisReport, SearchConfig, SetBackend, Traversal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Degrees, maximal cliques and clustering coefficients of an undirected graph.
#[derive(Parser, Debug)]
#[command(name = "cliquegraph", version, about)]
struct Cli {
    /// Matrix Market file, optionally gzip-compressed.
    path: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Set container used by the clique search.
    #[arg(long, value_enum, default_value_t = Backend::Auto)]
    backend: Backend,

    /// How the clique search keeps its state.
    #[arg(long, value_enum, default_value_t = TraversalArg::WorkStack)]
    traversal: TraversalArg,

    /// Largest vertex count for which the adjacency matrix is printed.
    #[arg(long, default_value_t = DEFAULT_MATRIX_LIMIT)]
    matrix_limit: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backend {
    Auto,
    Hashed,
    Bitset,
}

impl From<Backend> for SetBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Auto => SetBackend::Auto,
            Backend::Hashed => SetBackend::Hashed,
            Backend::Bitset => SetBackend::Bitset,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TraversalArg {
    WorkStack,
    Recursive,
}

impl From<TraversalArg> for Traversal {
    fn from(traversal: TraversalArg) -> Self {
        match traversal {
            TraversalArg::WorkStack => Traversal::WorkStack,
            TraversalArg::Recursive => Traversal::Recursive,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let graph = load_graph(&cli.path)
        .with_context(|| format!("failed to load graph from {}", cli.path.display()))?;
    info!(
        path = %cli.path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );

    let options = AnalysisOptions {
        search: SearchConfig {
            backend: cli.backend.into(),
            traversal: cli.traversal.into(),
        },
        matrix_limit: cli.matrix_limit,
    };
    let report = AnalysisReport::analyze(&graph, &options).context("analysis failed")?;

    let mut out = io::stdout().lock();
    match cli.format {
        Format::Text => report.render_text(&mut out)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
