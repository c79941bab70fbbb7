//! Searcher — find least-cost routes through tile-world images.
//!
//! For every input world the three strategies run independently, each on a
//! freshly loaded world (search state is mutated in place, so no graph is
//! ever reused). Solution images are written as `<stem>_a.png` (A*),
//! `<stem>_d.png` (Dijkstra) and `<stem>_g.png` (Greedy Search).

mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tileworld_paths::{Solver, Strategy};

use crate::report::{AlgorithmRun, Experiment};

/// Search tile worlds for least-cost routes with A*, Dijkstra and Greedy.
#[derive(Parser, Debug)]
#[command(name = "searcher", version, about)]
struct Cli {
    /// World file stem to search (reads `<input-dir>/<STEM>.png`).
    #[arg(value_name = "STEM", required_unless_present = "batch")]
    stem: Option<String>,

    /// Search the numbered worlds i1..iN instead of a single stem.
    #[arg(short = 'n', long, value_name = "N", conflicts_with = "stem")]
    batch: Option<u32>,

    /// Directory containing world images.
    #[arg(long, value_name = "DIR", default_value = "input")]
    input_dir: PathBuf,

    /// Directory solution images are written to.
    #[arg(long, value_name = "DIR", default_value = "output")]
    output_dir: PathBuf,

    /// Print results as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

fn output_suffix(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::AStar => "a",
        Strategy::Dijkstra => "d",
        Strategy::Greedy => "g",
    }
}

fn run_experiment(cli: &Cli, stem: &str) -> anyhow::Result<Experiment> {
    let input = cli.input_dir.join(format!("{stem}.png"));
    let mut runs = Vec::new();

    for strategy in Strategy::ALL {
        let mut world = tileworld_png::load_world(&input)
            .with_context(|| format!("loading {}", input.display()))?;
        let solver = Solver::new(&mut world, strategy)
            .with_context(|| format!("preparing {strategy} on {}", input.display()))?;
        let result = solver.solve();

        let output = cli
            .output_dir
            .join(format!("{stem}_{}.png", output_suffix(strategy)));
        tileworld_png::save_world(&world, &output)
            .with_context(|| format!("writing {}", output.display()))?;
        log::info!("{strategy} solution for {stem} written to {}", output.display());

        runs.push(AlgorithmRun {
            algorithm: strategy.to_string(),
            result,
        });
    }

    Ok(Experiment {
        testcase: stem.to_string(),
        runs,
    })
}

fn main() -> anyhow::Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?
        .start()
        .context("initializing logger")?;
    let cli = Cli::parse();

    let stems: Vec<String> = match (cli.batch, &cli.stem) {
        (Some(n), _) => (1..=n).map(|i| format!("i{i}")).collect(),
        (None, Some(stem)) => vec![stem.clone()],
        (None, None) => unreachable!("clap enforces stem or --batch"),
    };

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating {}", cli.output_dir.display()))?;

    for stem in &stems {
        let experiment = run_experiment(&cli, stem)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&experiment)?);
        } else {
            print!("{}", report::render(&experiment));
        }
    }

    Ok(())
}
