use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::ProgressBar;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use packing_coloring::utils::random_graph::random_tree_instance;
use packing_coloring::utils::serialization::{
    load_graph_instance, save_graph_instance, GraphInstance,
};
use packing_coloring::{
    spanning_tree, ColoringConfig, ColoringOutcome, Graph, PackingColorer, PhaseOnePolicy,
    ReuseBound,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(author, version, about = "Approximate packing coloring of random trees", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a random connected graph, reduce it to a spanning tree and
    /// write the instance to disk
    Generate {
        #[arg(long, default_value_t = 128)]
        nodes: u32,
        #[arg(long, help = "Edge probability (default: random near the connectivity threshold)")]
        probability: Option<f64>,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Run the packing-coloring heuristic on a stored or freshly sampled tree
    Color {
        #[arg(short, long, value_name = "FILE", help = "Stored instance; omit to sample a fresh tree")]
        instance: Option<PathBuf>,
        #[arg(long, default_value_t = 128, help = "Nodes to sample when no instance is given")]
        nodes: u32,
        #[arg(long)]
        probability: Option<f64>,
        #[arg(long, help = "Coloring root (default: tree center)")]
        root: Option<u32>,
        #[command(flatten)]
        strategy: StrategyArgs,
        #[arg(long, help = "Emit the report as JSON instead of text")]
        json: bool,
    },
    /// Color a batch of freshly sampled trees and report aggregate statistics
    Benchmark {
        #[arg(long, default_value_t = 128)]
        nodes: u32,
        #[arg(long, default_value_t = 10)]
        samples: u32,
        #[arg(long)]
        probability: Option<f64>,
        #[command(flatten)]
        strategy: StrategyArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Color every odd BFS layer with color 1
    Parity,
    /// Color the largest non-conflicting layers with color 1 first
    LargestLayer,
}

#[derive(Args)]
struct StrategyArgs {
    #[arg(long, value_enum, default_value = "largest-layer")]
    policy: PolicyArg,
    #[arg(long, help = "Derive the reuse bound from the layer count instead of the node count")]
    layer_bound: bool,
    #[arg(long, default_value_t = 10, help = "Divisor for the node-count reuse bound")]
    bound_divisor: u32,
    #[arg(long, help = "Cap on vertices visited across all conflict probes")]
    probe_budget: Option<u64>,
}

impl StrategyArgs {
    fn to_config(&self) -> ColoringConfig {
        ColoringConfig {
            phase_one: match self.policy {
                PolicyArg::Parity => PhaseOnePolicy::Parity,
                PolicyArg::LargestLayer => PhaseOnePolicy::LargestLayerFirst,
            },
            reuse_bound: if self.layer_bound {
                ReuseBound::LayerDerived
            } else {
                ReuseBound::NodeFraction {
                    divisor: self.bound_divisor,
                }
            },
            probe_budget: self.probe_budget,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            nodes,
            probability,
            output,
        } => run_generate(nodes, probability, output)?,
        Commands::Color {
            instance,
            nodes,
            probability,
            root,
            strategy,
            json,
        } => run_color(instance, nodes, probability, root, &strategy, json)?,
        Commands::Benchmark {
            nodes,
            samples,
            probability,
            strategy,
        } => run_benchmark(nodes, samples, probability, &strategy)?,
    }
    Ok(())
}

fn run_generate(nodes: u32, probability: Option<f64>, output: PathBuf) -> CliResult<()> {
    let (tree, params) = random_tree_instance(nodes, probability)?;
    println!(
        "Sampled G(n,p) with n = {}, p = {:.4}: {} edges, {} spanning edges",
        params.nodes, params.edge_probability, params.sampled_edges, params.tree_edges
    );
    let instance = GraphInstance::with_metadata(tree, params);
    save_graph_instance(&output, &instance)?;
    println!("Instance saved to {}", output.display());
    Ok(())
}

#[derive(Serialize)]
struct ColoringReport {
    nodes: u32,
    root: u32,
    elapsed_ms: f64,
    max_reusable_color: u32,
    uniquely_used_colors: u32,
    total_colors: u32,
    color_one_fraction: f64,
    histogram: BTreeMap<u32, u32>,
}

impl ColoringReport {
    fn from_outcome(nodes: u32, elapsed: Duration, outcome: &ColoringOutcome) -> Self {
        ColoringReport {
            nodes,
            root: outcome.root,
            elapsed_ms: duration_ms(elapsed),
            max_reusable_color: outcome.max_reusable_color(),
            uniquely_used_colors: outcome.uniquely_used,
            total_colors: outcome.total_colors(),
            color_one_fraction: outcome.color_one_fraction(),
            histogram: outcome.color_histogram(),
        }
    }
}

fn run_color(
    instance: Option<PathBuf>,
    nodes: u32,
    probability: Option<f64>,
    root: Option<u32>,
    strategy: &StrategyArgs,
    json: bool,
) -> CliResult<()> {
    // Stored instances are re-run through the spanning-tree builder: a no-op
    // for the trees `generate` writes, and it rejects hand-edited files that
    // are no longer connected.
    let tree: Graph = match instance {
        Some(path) => spanning_tree(&load_graph_instance(&path)?.graph)?,
        None => random_tree_instance(nodes, probability)?.0,
    };
    let node_count = tree.nodes;

    let start = Instant::now();
    let outcome = PackingColorer::new(tree, strategy.to_config()).assign(root)?;
    let elapsed = start.elapsed();

    let report = ColoringReport::from_outcome(node_count, elapsed, &outcome);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Selected root: {}", report.root);
    println!("Coloring took {:.2} ms", report.elapsed_ms);
    println!("Maximum reusable color: {}", report.max_reusable_color);
    println!("Uniquely used colors: {}", report.uniquely_used_colors);
    println!("Total colors: {}", report.total_colors);
    println!("Color-1 fraction: {:.4}", report.color_one_fraction);
    for (color, count) in &report.histogram {
        println!("  color {:>4} -> {} vertices", color, count);
    }
    Ok(())
}

#[derive(Default)]
struct AggregateStats {
    elapsed: Duration,
    max_reusable: u64,
    uniquely_used: u64,
    total_colors: u64,
    color_one_fraction: f64,
}

impl AggregateStats {
    fn add_sample(&mut self, elapsed: Duration, outcome: &ColoringOutcome) {
        self.elapsed += elapsed;
        self.max_reusable += outcome.max_reusable_color() as u64;
        self.uniquely_used += outcome.uniquely_used as u64;
        self.total_colors += outcome.total_colors() as u64;
        self.color_one_fraction += outcome.color_one_fraction();
    }
}

fn run_benchmark(
    nodes: u32,
    samples: u32,
    probability: Option<f64>,
    strategy: &StrategyArgs,
) -> CliResult<()> {
    if samples == 0 {
        return Err("samples must be greater than zero".into());
    }

    println!("Coloring {} random trees with {} nodes each", samples, nodes);

    let mut aggregate = AggregateStats::default();
    let progress = ProgressBar::new(samples as u64);

    for _ in 0..samples {
        let (tree, _params) = random_tree_instance(nodes, probability)?;
        let start = Instant::now();
        let outcome = PackingColorer::new(tree, strategy.to_config()).assign(None)?;
        aggregate.add_sample(start.elapsed(), &outcome);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let divisor = samples as f64;
    println!(
        "Average coloring time: {:.2} ms",
        duration_ms(aggregate.elapsed) / divisor
    );
    println!(
        "Average maximum reusable color: {:.2}",
        aggregate.max_reusable as f64 / divisor
    );
    println!(
        "Average uniquely used colors: {:.2}",
        aggregate.uniquely_used as f64 / divisor
    );
    println!(
        "Average total colors: {:.2}",
        aggregate.total_colors as f64 / divisor
    );
    println!(
        "Average color-1 fraction: {:.4}",
        aggregate.color_one_fraction / divisor
    );
    Ok(())
}

fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
