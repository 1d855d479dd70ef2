//! Integration tests for the command-line entry point.

use pdf_merger::{MergerError, run_from};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::common::{Workspace, page_widths};

fn args(list: &[&str]) -> Vec<OsString> {
    std::iter::once("pdf-merger")
        .chain(list.iter().copied())
        .map(OsString::from)
        .collect()
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_cli_merges_in_argument_order() {
    let ws = Workspace::new();
    let a = path_arg(&ws.pdf("a.pdf", &[100, 101]));
    let b = path_arg(&ws.pdf("b.pdf", &[200, 201, 202]));
    let out = ws.join("out.pdf");

    run_from(args(&["-q", "-o", &path_arg(&out), &a, &b])).unwrap();

    assert_eq!(page_widths(&out), vec![100, 101, 200, 201, 202]);
}

#[test]
fn test_cli_long_output_flag_after_inputs() {
    let ws = Workspace::new();
    let a = path_arg(&ws.pdf("a.pdf", &[1]));
    let out = ws.join("out.pdf");

    run_from(args(&["--quiet", &a, "--output", &path_arg(&out)])).unwrap();

    assert_eq!(page_widths(&out), vec![1]);
}

#[test]
fn test_cli_skips_missing_input() {
    let ws = Workspace::new();
    let missing = path_arg(&ws.join("missing.pdf"));
    let b = path_arg(&ws.pdf("b.pdf", &[200, 201, 202]));
    let out = ws.join("out.pdf");

    run_from(args(&["-q", "-o", &path_arg(&out), &missing, &b])).unwrap();

    assert_eq!(page_widths(&out), vec![200, 201, 202]);
}

#[test]
fn test_cli_expands_glob_patterns() {
    let ws = Workspace::new();
    ws.pdf("part2.pdf", &[2]);
    ws.pdf("part1.pdf", &[1]);
    ws.pdf("part3.pdf", &[3]);
    let pattern = format!("{}/part*.pdf", ws.path().display());
    let out = ws.join("merged.pdf");

    run_from(args(&["-q", "-o", &path_arg(&out), &pattern])).unwrap();

    assert_eq!(page_widths(&out), vec![1, 2, 3]);
}

#[test]
fn test_cli_missing_output_flag_is_usage_error() {
    let ws = Workspace::new();
    let a = path_arg(&ws.pdf("a.pdf", &[1]));

    let err = run_from(args(&[&a])).unwrap_err();

    assert!(matches!(err, MergerError::Usage { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("--output"));
    assert_eq!(ws.file_names(), ["a.pdf"]);
}

#[test]
fn test_cli_help_merges_nothing() {
    let ws = Workspace::new();
    let a = path_arg(&ws.pdf("a.pdf", &[1]));
    let out = ws.join("out.pdf");

    run_from(args(&["-h", "-o", &path_arg(&out), &a])).unwrap();

    assert!(!out.exists());
}

#[test]
fn test_cli_dry_run_writes_nothing() {
    let ws = Workspace::new();
    let a = path_arg(&ws.pdf("a.pdf", &[1]));
    let out = ws.join("out.pdf");

    run_from(args(&["-n", "-o", &path_arg(&out), &a])).unwrap();

    assert!(!out.exists());
}

#[test]
fn test_cli_json_run() {
    let ws = Workspace::new();
    let a = path_arg(&ws.pdf("a.pdf", &[1, 2]));
    let out = ws.join("out.pdf");

    run_from(args(&["--json", "-o", &path_arg(&out), &a])).unwrap();

    assert_eq!(page_widths(&out), vec![1, 2]);
}

#[test]
fn test_cli_nothing_readable_exits_with_one() {
    let ws = Workspace::new();
    let bad = path_arg(&ws.garbage("bad.pdf"));
    let out = ws.join("out.pdf");

    let err = run_from(args(&["-q", "-o", &path_arg(&out), &bad])).unwrap_err();

    assert_eq!(err.exit_code(), 1);
    assert!(!out.exists());
}

#[test]
fn test_cli_output_may_replace_an_input() {
    let ws = Workspace::new();
    let a = path_arg(&ws.pdf("a.pdf", &[1]));
    let b = path_arg(&ws.pdf("b.pdf", &[2, 3]));

    run_from(args(&["-q", "-o", &a, &a, &b])).unwrap();

    assert_eq!(page_widths(Path::new(&a)), vec![1, 2, 3]);
    assert_eq!(ws.file_names(), ["a.pdf", "b.pdf"]);
}

#[test]
fn test_cli_unparsable_pattern_is_skipped() {
    let ws = Workspace::new();
    let a = path_arg(&ws.pdf("a.pdf", &[1, 2]));
    let odd = path_arg(&ws.join("missing[.pdf"));
    let out = ws.join("out.pdf");

    run_from(args(&["-q", "-o", &path_arg(&out), &a, &odd])).unwrap();

    assert_eq!(page_widths(&out), vec![1, 2]);
}

#[test]
fn test_binary_output_starting_with_dash() {
    let ws = Workspace::new();
    ws.pdf("a.pdf", &[1]);

    let status = Command::new(env!("CARGO_BIN_EXE_pdf-merger"))
        .current_dir(ws.path())
        .args(["-q", "-o", "-x.pdf", "a.pdf"])
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(page_widths(&ws.join("-x.pdf")), vec![1]);
}

#[test]
fn test_binary_json_stdout_is_only_the_report() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &[1, 2]);
    let missing = ws.join("missing.pdf");
    let out = ws.join("out.pdf");

    let result = Command::new(env!("CARGO_BIN_EXE_pdf-merger"))
        .arg("--json")
        .arg("-o")
        .arg(&out)
        .arg(&a)
        .arg(&missing)
        .output()
        .unwrap();

    assert!(result.status.success());
    let report: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(report["success"], true);
    assert_eq!(report["filesMerged"], 1);
    assert_eq!(report["filesSkipped"], 1);
    assert_eq!(report["totalPages"], 2);
}

#[test]
fn test_binary_json_with_verbose_is_rejected() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &[1]);
    let out = ws.join("out.pdf");

    let result = Command::new(env!("CARGO_BIN_EXE_pdf-merger"))
        .args(["--json", "-v", "-o"])
        .arg(&out)
        .arg(&a)
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(2));
    assert!(result.stdout.is_empty());
    assert!(!out.exists());
}
