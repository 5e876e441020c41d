#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Bounded driver loop that steps a robot until it stops making progress.
//!
//! Strategies have no step limit of their own; a wall follower can circle a
//! free-standing loop forever. The [`Runner`] owns that bound and reports why
//! a run ended.

use std::collections::HashSet;

use maze_robots_core::{Position, Robot};
use serde::Serialize;
use tracing::debug;

/// Step cap applied by [`RunConfig::default`].
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Configuration applied to every run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Maximum number of steps before the run is abandoned; `None` runs unbounded.
    pub max_steps: Option<u64>,
    /// Whether every visited position is kept in [`RunReport::trace`].
    pub record_trace: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_steps: Some(DEFAULT_MAX_STEPS),
            record_trace: true,
        }
    }
}

/// Reason a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// The robot stands on a goal cell.
    ReachedGoal,
    /// The robot reported that it can never move again.
    Stalled,
    /// The configured step cap was hit first.
    StepLimit,
}

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Number of calls made to [`Robot::step`].
    pub steps: u64,
    /// Reason the run ended.
    pub outcome: RunOutcome,
    /// Cell the robot occupied when the run ended.
    pub final_position: Position,
    /// Number of distinct cells occupied, including the starting cell.
    pub distinct_cells: usize,
    /// Starting position followed by the position after each step, when recorded.
    pub trace: Vec<Position>,
}

impl RunReport {
    /// Reports whether the run ended on a goal.
    #[must_use]
    pub fn reached_goal(&self) -> bool {
        self.outcome == RunOutcome::ReachedGoal
    }
}

/// Drives a single robot according to a [`RunConfig`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    /// Creates a runner with the provided configuration.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Configuration applied to every run.
    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Steps the robot until it reaches a goal, stalls, or hits the step cap.
    pub fn run<R>(&self, robot: &mut R) -> RunReport
    where
        R: Robot + ?Sized,
    {
        self.run_with(robot, |_, _| {})
    }

    /// Same as [`Runner::run`], invoking `observer` with the step number and
    /// new position after every step.
    pub fn run_with<R, F>(&self, robot: &mut R, mut observer: F) -> RunReport
    where
        R: Robot + ?Sized,
        F: FnMut(u64, Position),
    {
        let start = robot.position();
        let mut trace = Vec::new();
        if self.config.record_trace {
            trace.push(start);
        }
        let mut occupied = HashSet::new();
        let _ = occupied.insert(start);
        let mut steps = 0_u64;

        let outcome = loop {
            if robot.has_reached_goal() {
                break RunOutcome::ReachedGoal;
            }
            if robot.is_stalled() {
                break RunOutcome::Stalled;
            }
            if self.config.max_steps.is_some_and(|limit| steps >= limit) {
                break RunOutcome::StepLimit;
            }

            robot.step();
            steps += 1;

            let position = robot.position();
            let _ = occupied.insert(position);
            if self.config.record_trace {
                trace.push(position);
            }
            observer(steps, position);
        };

        let final_position = robot.position();
        debug!(steps, ?outcome, %final_position, "run finished");

        RunReport {
            steps,
            outcome,
            final_position,
            distinct_cells: occupied.len(),
            trace,
        }
    }
}
