//! # nsim
//!
//! Interactive entry point for the namespace simulator. Runs a prompt loop
//! over stdin, or executes a script file line by line, and tears the tree
//! down exactly once on the way out.

use cli_console::{SessionReply, ShellSession};
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

#[derive(Default)]
struct CliConfig {
    script: Option<String>,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    if let Err(e) = run(config) {
        eprintln!("I/O error: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, String> {
    let mut config = CliConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--script" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --script".to_string());
                }
                let script_text = fs::read_to_string(&args[i])
                    .map_err(|e| format!("Failed to read script file: {}", e))?;
                config.script = Some(script_text);
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --script <FILE>      Execute commands from a file, then exit");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("With no options an interactive prompt is started; type 'help'");
    eprintln!("at the prompt for the command set.");
}

fn run(config: CliConfig) -> io::Result<()> {
    let mut session = ShellSession::new();

    match config.script {
        Some(script) => run_script(&mut session, &script),
        None => run_interactive(&mut session)?,
    }

    session.shutdown();
    Ok(())
}

fn run_script(session: &mut ShellSession, script: &str) {
    for line in script.lines() {
        match session.execute_line(line) {
            SessionReply::Output(text) => println!("{}", text),
            SessionReply::Empty => {}
            SessionReply::Exit => break,
        }
    }
}

fn run_interactive(session: &mut ShellSession) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{}", session.prompt())?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF ends the session like an explicit exit.
            break;
        }

        match session.execute_line(&line) {
            SessionReply::Output(text) => println!("{}", text),
            SessionReply::Empty => {}
            SessionReply::Exit => break,
        }
    }
    Ok(())
}
