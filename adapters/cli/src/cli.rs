use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use maze_robots_system_runner::{RunConfig, DEFAULT_MAX_STEPS};
use maze_robots_world::{DistanceMetric, MazeSymbols, ParseOptions, RaggedRows};
use serde::Serialize;

/// Command-line arguments for a single robot run.
#[derive(Debug, Parser)]
#[command(
    name = "maze-robots",
    about = "Sends a robot through a text maze and reports how many steps it took"
)]
pub(crate) struct Cli {
    /// Path to the maze description.
    pub(crate) maze: PathBuf,
    /// Navigation strategy driving the robot.
    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    pub(crate) strategy: Strategy,
    /// Seed for the random walk; drawn at random when omitted.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Abandon the run after this many steps.
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    pub(crate) max_steps: u64,
    /// Metric used for the goal-distance field.
    #[arg(long, value_enum, default_value_t = Metric::Manhattan)]
    pub(crate) metric: Metric,
    /// Reject rows narrower than the first row instead of padding them with walls.
    #[arg(long)]
    pub(crate) strict: bool,
    /// Character marking wall cells.
    #[arg(long, default_value_t = '*')]
    pub(crate) wall: char,
    /// Character marking the start cell.
    #[arg(long, default_value_t = 'S')]
    pub(crate) start: char,
    /// Character marking goal cells.
    #[arg(long, default_value_t = 'G')]
    pub(crate) goal: char,
    /// Suppress the per-step position trace.
    #[arg(long, short)]
    pub(crate) quiet: bool,
    /// Output format of the final summary.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub(crate) format: Format,
    /// Print the maze with the robot's trail after the run.
    #[arg(long)]
    pub(crate) render: bool,
}

impl Cli {
    pub(crate) fn symbols(&self) -> MazeSymbols {
        MazeSymbols {
            wall: self.wall,
            start: self.start,
            goal: self.goal,
        }
    }

    pub(crate) fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            symbols: self.symbols(),
            ragged_rows: if self.strict {
                RaggedRows::Reject
            } else {
                RaggedRows::PadWithWalls
            },
            metric: self.metric.into(),
        }
    }

    pub(crate) fn run_config(&self) -> RunConfig {
        RunConfig {
            max_steps: Some(self.max_steps),
            record_trace: self.render || (self.format == Format::Json && !self.quiet),
        }
    }

    /// Whether each position is printed as the robot moves.
    pub(crate) fn prints_steps(&self) -> bool {
        self.format == Format::Text && !self.quiet
    }
}

/// Navigation strategies selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Strategy {
    /// Random walk that only reverses at dead ends.
    Random,
    /// Depth-first search ordered by goal distance.
    Homing,
    /// Wall following with the left hand.
    LeftHand,
}

/// Goal-distance metrics selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Metric {
    /// Manhattan distance to the nearest goal, ignoring walls.
    Manhattan,
    /// Shortest open path to the nearest goal.
    Walkable,
}

impl From<Metric> for DistanceMetric {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Manhattan => DistanceMetric::Manhattan,
            Metric::Walkable => DistanceMetric::Walkable,
        }
    }
}

/// Formats for the final run summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Human-readable lines.
    Text,
    /// Single JSON document.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_reference_runner() {
        let cli = Cli::try_parse_from(["maze-robots", "maze.txt"]).expect("valid arguments");

        assert_eq!(cli.strategy, Strategy::Random);
        assert_eq!(cli.max_steps, DEFAULT_MAX_STEPS);
        assert_eq!(cli.parse_options(), ParseOptions::default());
        assert!(cli.prints_steps());
        assert!(!cli.run_config().record_trace);
    }

    #[test]
    fn options_flow_into_parse_configuration() {
        let cli = Cli::try_parse_from([
            "maze-robots",
            "maze.txt",
            "--strategy",
            "left-hand",
            "--metric",
            "walkable",
            "--strict",
            "--wall",
            "#",
            "--format",
            "json",
        ])
        .expect("valid arguments");

        let options = cli.parse_options();
        assert_eq!(cli.strategy, Strategy::LeftHand);
        assert_eq!(options.metric, DistanceMetric::Walkable);
        assert_eq!(options.ragged_rows, RaggedRows::Reject);
        assert_eq!(options.symbols.wall, '#');
        assert!(!cli.prints_steps());
        assert!(cli.run_config().record_trace);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(Cli::try_parse_from(["maze-robots", "maze.txt", "--strategy", "teleport"]).is_err());
    }
}
