use clap::{Parser, ValueEnum};
use groundplan::demos::{gift_errand_graph_task, gift_errand_task};
use groundplan::graph::GraphSolver;
use groundplan::strips::{SearchLimits, Solver};
use groundplan::Verbosity;
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
enum Demo {
    /// The gift errand as a STRIPS task: parameterized action schemes
    /// grounded over the symbols of the start state.
    GiftErrand,
    /// The gift errand as an explicit state graph with hand-declared
    /// transition edges.
    GiftErrandGraph,
}

#[derive(Parser)]
#[command(version)]
/// Run one of the bundled planning demos.
struct Cli {
    #[arg(
        value_enum,
        help = "The demo task to solve",
        default_value_t = Demo::GiftErrand
    )]
    demo: Demo,
    #[arg(
        help = "Stop expanding branches longer than this many actions",
        long = "max-depth",
        id = "MAX_DEPTH"
    )]
    max_depth: Option<usize>,
    #[arg(
        help = "Stop expanding after this many search nodes",
        long = "max-nodes",
        id = "MAX_NODES"
    )]
    max_expanded_nodes: Option<usize>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match cli.demo {
        Demo::GiftErrand => run_strips_demo(&cli),
        Demo::GiftErrandGraph => run_graph_demo(),
    }
}

fn run_strips_demo(cli: &Cli) {
    let task = gift_errand_task();
    let solver = Solver::with_limits(SearchLimits {
        max_depth: cli.max_depth,
        max_expanded_nodes: cli.max_expanded_nodes,
    });

    match solver.get_best_solution(&task) {
        Ok(Some(plan)) => {
            info!(plan_length = plan.len(), "plan found");
            println!("Plan found:");
            println!("{}", plan.to_string(&task));
            println!("Plan length: {}", plan.len());
        }
        Ok(None) => {
            info!("no plan found");
            println!("No plan found");
        }
        Err(error) => {
            eprintln!("Planning failed: {}", error);
            std::process::exit(1);
        }
    }
}

fn run_graph_demo() {
    let task = gift_errand_graph_task();

    match GraphSolver::new().get_best_solution(&task) {
        Some(solution) => {
            info!(plan_length = solution.len(), "plan found");
            println!("Plan found:");
            for action in &solution {
                println!("{}", action);
            }
            println!("Plan length: {}", solution.len());
        }
        None => {
            info!("no plan found");
            println!("No plan found");
        }
    }
}
