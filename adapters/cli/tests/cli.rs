use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

const BRANCHING: &str = "\
********************
*S       *         *
****** * ***** ****
* *     *   *      *
* * *** ***** *****
* * *         *
* *** ********* *****
*     *             *
***G*****************
";

fn write_maze(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "maze-robots-{}-{name}.txt",
        std::process::id()
    ));
    fs::write(&path, contents).expect("failed to write maze fixture");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_maze-robots"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to launch maze-robots")
}

#[test]
fn homing_run_prints_trace_and_step_count() {
    let maze = write_maze("homing", BRANCHING);

    let output = run(&[maze.to_str().unwrap(), "--strategy", "homing"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(lines.len(), 28);
    assert_eq!(lines[0], "(2,1)");
    assert_eq!(lines[26], "(3,8)");
    assert_eq!(lines[27], "Robot moved 27 steps to reach Goal.");
}

#[test]
fn seeded_random_runs_are_reproducible() {
    let maze = write_maze("random", BRANCHING);
    let args = [maze.to_str().unwrap(), "--seed", "17", "--quiet"];

    let first = run(&args);
    let second = run(&args);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_goal_fails_with_message() {
    let maze = write_maze("no-goal", "*****\n*S  *\n*****\n");

    let output = run(&[maze.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("no goal marker"), "stderr: {stderr}");
}

#[test]
fn step_limit_exits_with_goal_not_reached() {
    let maze = write_maze(
        "room",
        "*******\n*S    *\n*     *\n*  G  *\n*     *\n*******\n",
    );

    let output = run(&[
        maze.to_str().unwrap(),
        "--strategy",
        "left-hand",
        "--max-steps",
        "50",
        "--quiet",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout.trim(), "Robot gave up after 50 steps without reaching a goal.");
}
