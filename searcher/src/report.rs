//! Console reporting of experiment results.

use serde::Serialize;
use tileworld_paths::SearchResult;

/// The three algorithm runs for one searched world.
#[derive(Debug, Serialize)]
pub struct Experiment {
    pub testcase: String,
    pub runs: Vec<AlgorithmRun>,
}

/// One algorithm's outcome on a world.
#[derive(Debug, Serialize)]
pub struct AlgorithmRun {
    pub algorithm: String,
    pub result: SearchResult,
}

/// Render an experiment as the plain-text console report.
pub fn render(experiment: &Experiment) -> String {
    let mut out = String::new();
    out.push_str("#######################\n");
    out.push_str(&format!("Testcase: {}\n", experiment.testcase));
    out.push_str("#######################\n");
    for (i, run) in experiment.runs.iter().enumerate() {
        if i > 0 {
            out.push_str("-------------------------------------\n");
        }
        out.push_str(&render_run(run));
    }
    out
}

fn render_run(run: &AlgorithmRun) -> String {
    format!(
        "{}\n#nodes: {}\n#path cost: {}\n#time: {} nanoseconds\n",
        run.algorithm,
        run.result.nodes_expanded,
        run.result.best_path_cost,
        run.result.time.as_nanos()
    )
}
