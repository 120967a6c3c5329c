//! Example walking through the namespace simulator
//!
//! This example drives a shell session the way an interactive user would
//! and prints each exchange.

use cli_console::{SessionReply, ShellSession};

fn run(session: &mut ShellSession, line: &str) {
    println!("{}{}", session.prompt(), line);
    match session.execute_line(line) {
        SessionReply::Output(text) => println!("{}", text),
        SessionReply::Empty => {}
        SessionReply::Exit => {}
    }
}

fn main() {
    println!("=== nsim Namespace Simulator Demo ===\n");

    let mut session = ShellSession::new();

    println!("1. Building a directory structure...");
    run(&mut session, "mkdir docs");
    run(&mut session, "mkdir projects");
    run(&mut session, "touch readme.txt");
    println!();

    println!("2. Working inside a subdirectory...");
    run(&mut session, "cd docs");
    run(&mut session, "touch notes.txt");
    run(&mut session, "chmod r-- notes.txt");
    run(&mut session, "pwd");
    run(&mut session, "ls -l");
    println!();

    println!("3. Renaming and deleting files...");
    run(&mut session, "mv notes.txt journal.txt");
    run(&mut session, "rm journal.txt");
    run(&mut session, "ls");
    println!();

    println!("4. Error reporting without state changes...");
    run(&mut session, "cd nowhere");
    run(&mut session, "cd ..");
    run(&mut session, "touch readme.txt");
    run(&mut session, "mkdir readme.txt");
    println!();

    println!("5. Tearing down...");
    let report = session.shutdown();
    println!(
        "   released {} nodes ({} created, balanced: {})",
        report.released.len(),
        report.nodes_created,
        report.is_balanced()
    );

    println!("\n=== Demo Complete ===");
}
