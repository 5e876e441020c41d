#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that loads a maze and sends one robot through it.

mod cli;
mod render;

use std::{
    fs::File,
    io::{self, BufReader},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use maze_robots_core::Robot;
use maze_robots_system_homing::Homing;
use maze_robots_system_left_hand_rule::LeftHandRule;
use maze_robots_system_random_walk::RandomWalk;
use maze_robots_system_runner::{RunOutcome, RunReport, Runner};
use maze_robots_world::Maze;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::cli::{Cli, Format, Metric, Strategy};

const DEFAULT_LOG_FILTER: &str = "warn,maze_robots=info";

/// Exit status used when a run ends without reaching a goal.
const EXIT_GOAL_NOT_REACHED: u8 = 2;

/// Machine-readable summary printed with `--format json`.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    strategy: Strategy,
    metric: Metric,
    seed: Option<u64>,
    #[serde(flatten)]
    report: &'a RunReport,
}

/// Entry point for the maze robots command-line interface.
fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) if report.reached_goal() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_GOAL_NOT_REACHED),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {error}");
    }
}

fn run(cli: &Cli) -> Result<RunReport> {
    let file = File::open(&cli.maze)
        .with_context(|| format!("failed to open maze file {}", cli.maze.display()))?;
    let maze = Maze::from_reader(BufReader::new(file), &cli.parse_options())
        .with_context(|| format!("failed to load maze from {}", cli.maze.display()))?;
    info!(
        rows = maze.rows(),
        columns = maze.columns(),
        goals = maze.goals().len(),
        "maze loaded"
    );

    let seed = match cli.strategy {
        Strategy::Random => Some(cli.seed.unwrap_or_else(rand::random)),
        Strategy::Homing | Strategy::LeftHand => None,
    };
    let mut robot = build_robot(&maze, cli.strategy, seed);
    info!(strategy = ?cli.strategy, ?seed, "robot placed at {}", robot.position());

    let runner = Runner::new(cli.run_config());
    let prints_steps = cli.prints_steps();
    let report = runner.run_with(&mut robot, |_, position| {
        if prints_steps {
            println!("{position}");
        }
    });

    if cli.render {
        print!("{}", render::render(&maze, &report.trace, &cli.symbols()));
    }

    match cli.format {
        Format::Text => println!("{}", describe(&report)),
        Format::Json => {
            let summary = Summary {
                strategy: cli.strategy,
                metric: cli.metric,
                seed,
                report: &report,
            };
            let json =
                serde_json::to_string_pretty(&summary).context("failed to encode run summary")?;
            println!("{json}");
        }
    }

    Ok(report)
}

fn build_robot<'maze>(
    maze: &'maze Maze,
    strategy: Strategy,
    seed: Option<u64>,
) -> Box<dyn Robot + 'maze> {
    match strategy {
        Strategy::Random => Box::new(RandomWalk::new(
            maze,
            ChaCha8Rng::seed_from_u64(seed.unwrap_or_default()),
        )),
        Strategy::Homing => Box::new(Homing::new(maze)),
        Strategy::LeftHand => Box::new(LeftHandRule::new(maze)),
    }
}

fn describe(report: &RunReport) -> String {
    match report.outcome {
        RunOutcome::ReachedGoal => format!("Robot moved {} steps to reach Goal.", report.steps),
        RunOutcome::Stalled => format!(
            "Robot got stuck at {} after {} steps.",
            report.final_position, report.steps
        ),
        RunOutcome::StepLimit => format!(
            "Robot gave up after {} steps without reaching a goal.",
            report.steps
        ),
    }
}
