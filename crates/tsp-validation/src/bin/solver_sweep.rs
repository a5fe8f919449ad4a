use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tsp_core::{GraphSpec, Node};
use tsp_validation::{run, score_tour, sweep, Algorithm, Report, SuiteConfig, SuiteError, SweepRow};

/// Run the tour solvers on a graph description and print a JSON report.
#[derive(Debug, Parser)]
#[command(name = "solver-sweep", version)]
struct Args {
    /// Graph description: {"nodes": [{"x", "y"}], "edges": [{"u", "v"}], "start"}
    graph: PathBuf,

    /// Solver parameters as JSON; defaults apply to anything omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run a single algorithm instead of all of them
    #[arg(long, short)]
    algorithm: Option<String>,

    /// Seed for the ant colony and genetic solvers
    #[arg(long)]
    seed: Option<u64>,

    /// Run exact solvers even above their size limit
    #[arg(long)]
    force: bool,

    /// Your own tour, complete or partial, e.g. `--tour 0,3,1,2`.
    /// It is scored in the report and seeds 2-opt when complete.
    #[arg(long, value_delimiter = ',')]
    tour: Option<Vec<Node>>,
}

fn main() -> ExitCode {
    env_logger::init();

    match execute(Args::parse()) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<Report, SuiteError> {
    let graph = GraphSpec::from_json(&std::fs::read_to_string(&args.graph)?)?.build()?;

    let mut config = match &args.config {
        Some(path) => SuiteConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SuiteConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.force |= args.force;

    let user_tour = args.tour.as_deref();
    let Some(name) = args.algorithm else {
        return sweep(&graph, &config, user_tour);
    };
    let algorithm = Algorithm::parse(&name).ok_or(SuiteError::UnknownAlgorithm(name))?;
    let you = user_tour.map(|t| score_tour(&graph, t)).transpose()?;
    let outcome = run(&graph, algorithm, &config, user_tour)?;
    Ok(Report {
        nodes: graph.len(),
        start: graph.start_node(),
        you,
        rows: vec![SweepRow { algorithm, outcome: Some(outcome), error: None }],
    })
}
