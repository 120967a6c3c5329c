//! Integration tests for the shell session
//!
//! These drive full command sequences through the dispatcher the way the
//! interactive loop would, asserting on the rendered status lines and on
//! the session's position in the tree.

use cli_console::{SessionReply, ShellSession};

fn transcript(session: &mut ShellSession, lines: &[&str]) -> Vec<String> {
    let mut printed = Vec::new();
    for line in lines {
        match session.execute_line(line) {
            SessionReply::Output(text) => printed.push(text),
            SessionReply::Empty => {}
            SessionReply::Exit => break,
        }
    }
    printed
}

#[test]
fn test_scripted_session_end_to_end() {
    let mut session = ShellSession::new();

    let printed = transcript(
        &mut session,
        &[
            "mkdir docs",
            "touch readme.txt",
            "cd docs",
            "touch todo.txt",
            "pwd",
            "ls",
            "cd ..",
            "pwd",
            "ls",
        ],
    );

    assert_eq!(
        printed,
        vec![
            "directory 'docs' created",
            "file 'readme.txt' created",
            "file 'todo.txt' created",
            "/docs/",
            "todo.txt",
            "/",
            "docs/\nreadme.txt",
        ]
    );
}

#[test]
fn test_error_paths_leave_session_usable() {
    let mut session = ShellSession::new();

    let printed = transcript(
        &mut session,
        &[
            "touch a",
            "touch a",
            "rm ghost",
            "cd nowhere",
            "mv a b",
            "ls",
        ],
    );

    assert_eq!(
        printed,
        vec![
            "file 'a' created",
            "file 'a' already exists",
            "no such file",
            "no such directory",
            "file 'a' renamed to 'b'",
            "b",
        ]
    );
    session.service().tree().verify().unwrap();
}

#[test]
fn test_navigation_sequence_returns_home() {
    let mut session = ShellSession::new();
    let home = session.current();

    transcript(
        &mut session,
        &["mkdir a", "cd a", "mkdir b", "cd b", "cd /", "mkdir c", "cd c", "cd .."],
    );

    assert_eq!(session.current(), home);
    assert_eq!(session.prompt(), "nsim:/> ");
}

#[test]
fn test_exit_stops_processing() {
    let mut session = ShellSession::new();
    let printed = transcript(&mut session, &["touch a", "exit", "touch b"]);

    // Only the first command ran; nothing after exit is executed.
    assert_eq!(printed, vec!["file 'a' created"]);
}

#[test]
fn test_session_teardown_after_deep_activity() {
    let mut session = ShellSession::new();
    transcript(
        &mut session,
        &[
            "mkdir a",
            "cd a",
            "mkdir b",
            "cd b",
            "mkdir c",
            "touch leaf.txt",
            "cd /",
        ],
    );

    let report = session.shutdown();
    assert_eq!(report.nodes_created, 4);
    assert!(report.is_balanced());
}
