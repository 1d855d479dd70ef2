//! Integration tests for the interactive session and shell.

use pdf_merger::interactive::{Command, Notification, NotificationLevel, Session, Shell};
use std::collections::BTreeSet;
use std::io::Cursor;

use crate::common::{Workspace, page_widths};

#[test]
fn test_session_add_reorder_remove_merge() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &[1]);
    let b = ws.pdf("b.pdf", &[2, 2]);
    let c = ws.pdf("c.pdf", &[3]);
    let output = ws.join("out.pdf");

    let mut session = Session::new();
    let mut notes: Vec<Notification> = Vec::new();

    session.dispatch(Command::Add(vec![a, b, c]), &mut notes);
    session.dispatch(Command::Select(BTreeSet::from([1, 2])), &mut notes);
    session.dispatch(Command::MoveUp, &mut notes);
    assert_eq!(session.files().display_names(), ["b.pdf", "c.pdf", "a.pdf"]);
    assert_eq!(session.selection(), &BTreeSet::from([0, 1]));

    session.dispatch(Command::MoveUp, &mut notes);
    assert_eq!(session.files().display_names(), ["b.pdf", "c.pdf", "a.pdf"]);

    session.dispatch(Command::Select(BTreeSet::from([1])), &mut notes);
    session.dispatch(Command::RemoveSelected, &mut notes);
    assert_eq!(session.files().display_names(), ["b.pdf", "a.pdf"]);

    session.dispatch(Command::Merge(Some(output.clone())), &mut notes);

    let last = notes.last().unwrap();
    assert_eq!(last.level, NotificationLevel::Success);
    assert_eq!(page_widths(&output), vec![2, 2, 1]);
}

#[test]
fn test_session_drop_and_duplicates() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &[1]);
    let uri = format!("file://{}", a.display());

    let mut session = Session::new();
    let mut notes: Vec<Notification> = Vec::new();

    assert!(Session::accepts_drop(&[uri.as_str()]));
    session.dispatch(Command::Drop(vec![uri.clone()]), &mut notes);
    session.dispatch(Command::Drop(vec![uri]), &mut notes);

    assert_eq!(session.files().len(), 1);
    assert_eq!(notes[0].content, "Added 1 file(s), 1 in list");
    assert_eq!(notes[1].content, "No valid PDF files found or already present");
}

#[test]
fn test_session_merge_with_empty_list() {
    let ws = Workspace::new();
    let output = ws.join("out.pdf");
    let mut session = Session::new();
    let mut notes: Vec<Notification> = Vec::new();

    session.dispatch(Command::Merge(Some(output.clone())), &mut notes);

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "Add PDF files first");
    assert!(!output.exists());
}

#[test]
fn test_shell_script() {
    let ws = Workspace::new();
    ws.pdf("one.pdf", &[1]);
    ws.pdf("two.pdf", &[2]);
    let output = ws.join("merged.pdf");

    let script = format!(
        "add {dir}/one.pdf {dir}/two.pdf\nselect 2\nup\nlist\nmerge {out}\nquit\n",
        dir = ws.path().display(),
        out = output.display()
    );
    let mut shell = Shell::new(Cursor::new(script), Vec::new());
    shell.run().unwrap();

    assert_eq!(shell.session().files().display_names(), ["two.pdf", "one.pdf"]);
    let transcript = String::from_utf8(shell.into_output()).unwrap();
    assert!(transcript.contains("* 1. two.pdf"));
    assert!(transcript.contains("Merge complete"));
    assert_eq!(page_widths(&output), vec![2, 1]);
}
