//! End-to-end runs of the `gridstar` binary against the maps in `maps/`.

use std::io::Write;
use std::process::{Command, Output};

fn gridstar(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gridstar"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run gridstar")
}

fn map(name: &str) -> String {
    format!("{}/../maps/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn solve_reports_a_path() {
    let out = gridstar(&["solve", &map("partial_wall.txt")]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("18 steps: (0, 0) -> "));
}

#[test]
fn solve_without_a_path_exits_2() {
    let out = gridstar(&["solve", &map("walled.txt")]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).contains("path doesn't exist"));
}

#[test]
fn relax_flag_finds_the_shorter_detour() {
    let kept = gridstar(&["solve", &map("detour.txt")]);
    assert_eq!(kept.status.code(), Some(0));
    assert!(stdout(&kept).contains("10 steps"));

    let relaxed = gridstar(&["solve", "--relax", &map("detour.txt")]);
    assert_eq!(relaxed.status.code(), Some(0));
    assert!(stdout(&relaxed).contains("8 steps"));
}

#[test]
fn flags_override_the_settings_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, r#"{{"search":{{"max_expansions":1}}}}"#).unwrap();
    let config = f.path().to_str().unwrap();

    let limited = gridstar(&["solve", "--config", config, &map("detour.txt")]);
    assert_eq!(limited.status.code(), Some(2));
    assert!(stdout(&limited).contains("search gave up after expanding 1 cells"));

    let raised = gridstar(&[
        "solve",
        "--config",
        config,
        "--max-expansions",
        "1000",
        &map("detour.txt"),
    ]);
    assert_eq!(raised.status.code(), Some(0));
}

#[test]
fn broken_settings_file_is_an_error() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "{{").unwrap();
    let out = gridstar(&[
        "solve",
        "--config",
        f.path().to_str().unwrap(),
        &map("detour.txt"),
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("gridstar: settings "));
}

#[test]
fn missing_map_is_an_error() {
    let out = gridstar(&["solve", &map("no_such_map.txt")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("gridstar: reading "));
}

#[test]
fn replay_opens_the_wall() {
    let out = gridstar(&["replay", &map("walled.txt"), "b 1 2"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("path doesn't exist"));
    assert!(text.contains("> block 1 2"));
    assert!(text.contains("6 steps"));
}

#[test]
fn replay_skips_refused_actions() {
    let out = gridstar(&["replay", &map("walled.txt"), "b 0 0; b 1 2"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("refused: cell (0, 0) is a start/goal cell and can't be blocked"));
    assert!(text.contains("> block 1 2"));
}

#[test]
fn strict_replay_stops_at_the_first_refusal() {
    let out = gridstar(&["replay", "--strict", &map("walled.txt"), "b 0 0; b 1 2"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("gridstar: action 1 (block 0 0): "));
    assert!(!stdout(&out).contains("> block 1 2"));
}

#[test]
fn malformed_script_is_an_error() {
    let out = gridstar(&["replay", &map("walled.txt"), "jump 1 1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("script entry 1"));
}

#[test]
fn random_open_board() {
    let out = gridstar(&["random", "--seed", "5", "--density", "0"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.starts_with("S.........\n"));
    assert!(text.contains("18 steps"));
}

#[test]
fn random_rejects_bad_sizes_and_densities() {
    let out = gridstar(&["random", "--rows", "0"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("invalid argument"));

    let out = gridstar(&["random", "--density", "1.5"]);
    assert_eq!(out.status.code(), Some(1));
}
