//! `search` - run the state-space search toolkit from the command line.
//!
//! - `search solve <water-jug|blocks|tiles>` - uninformed / A* search, prints the path
//! - `search climb` - steepest-ascent hill climbing on the sliding-tile instance
//! - `search anneal` - simulated annealing on a one-dimensional objective
//! - `search vacuum` - run a vacuum agent in a random two-room world
//! - `search eval <blocks|tictactoe>` - standalone evaluation functions

mod config;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use search_agents::{run_agent, ModelBasedAgent, ReflexAgent, VacuumAgent, VacuumWorld};
use search_core::{DeterministicRng, Problem, Searcher, SplitMix64, Strategy};
use search_local::{simulated_annealing, HillClimber};
use search_problems::{support_score, Mark, TicTacToe};

use config::RunConfig;

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "State-space search, local optimization and vacuum agents", version)]
struct Cli {
    /// YAML run file with problem instances and engine limits
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a problem instance and print the path to the goal
    Solve {
        #[arg(value_enum)]
        problem: ProblemKind,

        /// bfs, dfs or astar
        #[arg(short, long, default_value = "bfs")]
        strategy: String,

        /// Stop after this many expansions
        #[arg(long)]
        max_expansions: Option<usize>,
    },

    /// Hill-climb the sliding-tile instance by Manhattan distance
    Climb {
        #[arg(long)]
        max_steps: Option<usize>,
    },

    /// Maximize -(x-3)^2 + 10 by simulated annealing
    Anneal {
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Clean a random two-room world
    Vacuum {
        #[arg(long)]
        seed: Option<u64>,

        /// Use the model-based agent instead of the simple reflex agent
        #[arg(long)]
        model: bool,
    },

    /// Score a position with a standalone evaluation function
    Eval {
        #[command(subcommand)]
        target: EvalTarget,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ProblemKind {
    WaterJug,
    Blocks,
    Tiles,
}

#[derive(Subcommand)]
enum EvalTarget {
    /// Support score of the configured initial stacks against the goal stacks
    Blocks,

    /// Line openness of a tic-tac-toe board
    Tictactoe {
        /// Three rows of `X`, `O` or `_`
        #[arg(num_args = 3, default_values = ["XO_", "_X_", "O__"])]
        rows: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt().with_env_filter(filter).with_target(false).init();

    let config = RunConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Solve {
            problem,
            strategy,
            max_expansions,
        } => {
            let strategy: Strategy = strategy.parse()?;
            let mut search_config = config.search;
            if max_expansions.is_some() {
                search_config.max_expansions = max_expansions;
            }
            let searcher = Searcher::new(strategy).with_config(search_config);
            solve(&config, problem, &searcher)
        }
        Commands::Climb { max_steps } => climb(&config, max_steps),
        Commands::Anneal { seed } => anneal(&config, seed),
        Commands::Vacuum { seed, model } => vacuum(&config, seed, model),
        Commands::Eval { target } => eval(&config, target),
    }
}

fn solve(config: &RunConfig, kind: ProblemKind, searcher: &Searcher) -> Result<()> {
    match kind {
        ProblemKind::WaterJug => {
            let problem = config.water_jug.problem()?;
            tracing::info!(strategy = %searcher.strategy(), "Solving water-jug");
            let report = searcher.run(&problem).context("Search failed")?;
            report::print_solution(&report, |a, b| {
                problem.move_between(*a, *b).map(|m| m.to_string())
            });
        }
        ProblemKind::Blocks => {
            let problem = config.blocks.problem()?;
            tracing::info!(strategy = %searcher.strategy(), "Solving blocks");
            let report = searcher.run(&problem).context("Search failed")?;
            report::print_solution(&report, |a, b| {
                problem.move_between(a, b).map(|m| m.to_string())
            });
        }
        ProblemKind::Tiles => {
            let problem = config.sliding_tile.problem()?;
            if !problem.is_solvable() {
                tracing::warn!("Goal board has the wrong parity; search will exhaust the reachable half");
            }
            tracing::info!(strategy = %searcher.strategy(), "Solving sliding tile");
            let report = searcher.run(&problem).context("Search failed")?;
            report::print_solution(&report, |a, b| {
                problem.move_between(a, b).map(|d| d.to_string())
            });
        }
    }
    Ok(())
}

fn climb(config: &RunConfig, max_steps: Option<usize>) -> Result<()> {
    let problem = config.sliding_tile.problem()?;
    let mut climb_config = config.climb;
    if max_steps.is_some() {
        climb_config.max_steps = max_steps;
    }

    let result = HillClimber::new()
        .with_config(climb_config)
        .climb(
            problem.initial(),
            |b| problem.manhattan(b),
            |b| problem.successors(b),
        );

    println!("Initial state:");
    println!("{}", problem.initial());
    println!();
    if problem.is_goal(&result.state) {
        println!("Reached the goal in {} steps:", result.steps);
    } else {
        println!(
            "Stuck at a local optimum after {} steps (Manhattan distance {}):",
            result.steps, result.cost
        );
    }
    println!("{}", result.state);
    Ok(())
}

fn anneal(config: &RunConfig, seed: Option<u64>) -> Result<()> {
    let section = &config.anneal;
    let mut rng = SplitMix64::new(seed.unwrap_or(section.seed));
    let initial = rng.next_f64_range(0.0, 10.0);

    let result = simulated_annealing(
        initial,
        |x: &f64| -((x - 3.0) * (x - 3.0)) + 10.0,
        |x: &f64, rng: &mut SplitMix64| x + rng.next_f64_range(-1.0, 1.0),
        &section.schedule(),
        &section.config(),
        &mut rng,
    );

    println!("Initial state: {initial:.4}");
    println!("Final state: {:.4}", result.state);
    println!("Final value: {:.4}", result.value);
    println!(
        "Iterations: {} ({} moves accepted)",
        result.iterations, result.accepted
    );
    Ok(())
}

fn vacuum(config: &RunConfig, seed: Option<u64>, model: bool) -> Result<()> {
    let mut rng = SplitMix64::new(seed.unwrap_or(config.vacuum.seed));
    let mut world = VacuumWorld::random(&mut rng);
    let mut agent: Box<dyn VacuumAgent> = if model {
        Box::new(ModelBasedAgent::new())
    } else {
        Box::new(ReflexAgent)
    };

    println!("Starting the {} vacuum cleaner", agent.name());
    println!("{world}");
    let run = run_agent(agent.as_mut(), &mut world, config.vacuum.max_steps);
    for (i, action) in run.actions.iter().enumerate() {
        println!("Step {}: {action}", i + 1);
    }
    if run.clean {
        println!("All rooms are clean! Total steps taken: {}", run.steps);
    } else {
        println!("Gave up after {} steps: {world}", run.steps);
    }
    Ok(())
}

fn eval(config: &RunConfig, target: EvalTarget) -> Result<()> {
    match target {
        EvalTarget::Blocks => {
            let state = config.blocks.initial_stacks();
            let goal = config.blocks.goal_stacks();
            println!("State:\n{state}\n");
            println!("Goal:\n{goal}\n");
            println!("Support score: {}", support_score(&state, &goal));
        }
        EvalTarget::Tictactoe { rows } => {
            let board = TicTacToe::parse(&rows).context("Invalid tic-tac-toe board")?;
            println!("{board}\n");
            println!("Openness for X: {}", board.openness(Mark::X));
            println!("Openness for O: {}", board.openness(Mark::O));
        }
    }
    Ok(())
}
