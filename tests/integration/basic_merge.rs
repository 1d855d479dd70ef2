//! Integration tests for basic PDF merging operations.

use pdf_merger::MergerError;
use pdf_merger::io::{PdfWriter, WriteOptions};
use pdf_merger::merge::Merger;
use pdf_merger::output::OutputFormatter;

use crate::common::{Workspace, page_widths};

fn merger() -> Merger {
    Merger::new().with_formatter(OutputFormatter::silent())
}

#[test]
fn test_merge_two_pdfs_in_order() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &[100, 101]);
    let b = ws.pdf("b.pdf", &[200, 201, 202]);
    let output = ws.join("out.pdf");

    assert!(merger().merge_cli(&[a, b], &output));
    assert_eq!(page_widths(&output), vec![100, 101, 200, 201, 202]);
}

#[test]
fn test_merge_reversed_order() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &[100, 101]);
    let b = ws.pdf("b.pdf", &[200, 201, 202]);
    let output = ws.join("out.pdf");

    assert!(merger().merge_cli(&[b, a], &output));
    assert_eq!(page_widths(&output), vec![200, 201, 202, 100, 101]);
}

#[test]
fn test_merge_same_file_twice() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &[100, 101]);
    let output = ws.join("out.pdf");

    let outcome = merger().merge_paths(&[a.clone(), a], &output);

    assert!(outcome.is_success());
    assert_eq!(page_widths(&output), vec![100, 101, 100, 101]);
}

#[test]
fn test_missing_first_input_is_skipped() {
    let ws = Workspace::new();
    let missing = ws.join("missing.pdf");
    let b = ws.pdf("b.pdf", &[200, 201, 202]);
    let output = ws.join("out.pdf");

    let outcome = merger().merge_paths(&[missing.clone(), b], &output);

    assert!(outcome.is_success());
    assert_eq!(outcome.skipped_count(), 1);
    assert_eq!(outcome.skipped[0].path, missing);
    assert!(matches!(
        outcome.skipped[0].error,
        MergerError::InputSkipped { .. }
    ));
    assert_eq!(page_widths(&output), vec![200, 201, 202]);
}

#[test]
fn test_corrupt_input_in_the_middle() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &[1, 2]);
    let bad = ws.garbage("bad.pdf");
    let c = ws.pdf("c.pdf", &[3]);
    let output = ws.join("out.pdf");

    let outcome = merger().merge_paths(&[a, bad, c], &output);

    assert!(outcome.is_success());
    assert_eq!(outcome.processed_count(), 2);
    assert!(matches!(
        outcome.skipped[0].error,
        MergerError::InputUnreadable { .. }
    ));
    assert_eq!(page_widths(&output), vec![1, 2, 3]);
}

#[test]
fn test_existing_output_is_overwritten() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &[1]);
    let output = ws.pdf("out.pdf", &[9, 9, 9]);

    assert!(merger().merge_cli(&[a], &output));
    assert_eq!(page_widths(&output), vec![1]);
}

#[test]
fn test_merge_without_compression_or_atomic_write() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &[1]);
    let b = ws.pdf("b.pdf", &[2]);
    let output = ws.join("out.pdf");

    let writer = PdfWriter::with_options(WriteOptions {
        atomic: false,
        compress: false,
    });
    let outcome = merger().with_writer(writer).merge_paths(&[a, b], &output);

    let stats = outcome.result.unwrap();
    assert!(!stats.compressed);
    assert_eq!(page_widths(&output), vec![1, 2]);
}

#[test]
fn test_no_temporary_files_left_behind() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &[1]);
    let output = ws.join("out.pdf");

    assert!(merger().merge_cli(&[a], &output));
    assert_eq!(ws.file_names(), ["a.pdf", "out.pdf"]);
}

#[test]
fn test_many_inputs() {
    let ws = Workspace::new();
    let inputs: Vec<_> = (0..12)
        .map(|i| ws.pdf(&format!("part{i:02}.pdf"), &[100 + i]))
        .collect();
    let output = ws.join("out.pdf");

    let outcome = merger().merge_paths(&inputs, &output);

    assert_eq!(outcome.total_pages(), 12);
    assert_eq!(page_widths(&output), (100..112).collect::<Vec<i64>>());
}
