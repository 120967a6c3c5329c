//! Shell command parsing
//!
//! Turns a raw input line into a typed command. Tokenization is a plain
//! whitespace split: the first token selects the command, the rest are
//! positional arguments. Missing required arguments are usage errors and
//! never reach the engine.
//!
//! ## Command Set
//!
//! - `touch <name>` - create an empty file
//! - `ls [-l]` - list the current directory
//! - `rm <name>` - delete a file
//! - `mv <old_name> <new_name>` - rename a file in place
//! - `mkdir <name>` - create a subdirectory
//! - `chmod <mode> <filename>` - overwrite a file's permission tag
//! - `cd <dir>` - navigate (`/`, `..`, `.`, or a child name)
//! - `pwd` - print the absolute path
//! - `help` - print this summary
//! - `exit` - end the session

use thiserror::Error;

/// Shell command parse error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellCommandError {
    /// A required argument was not supplied
    #[error("usage: {0}")]
    MissingArgument(&'static str),

    /// The line was empty or whitespace
    #[error("empty command")]
    EmptyCommand,

    /// The command name is not known
    #[error("command not found")]
    UnknownCommand(String),
}

/// Shell commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Create an empty file in the current directory
    Touch { name: String },

    /// List the current directory, optionally in long form
    List { long: bool },

    /// Delete a file from the current directory
    Remove { name: String },

    /// Rename a file within the current directory
    Rename { from: String, to: String },

    /// Create a subdirectory of the current directory
    MakeDirectory { name: String },

    /// Overwrite a file's permission tag
    ChangePermission { mode: String, file: String },

    /// Navigate to another directory
    ChangeDirectory { target: String },

    /// Print the absolute path of the current directory
    PrintWorkingDirectory,

    /// Print the command summary
    Help,

    /// End the session
    Exit,
}

/// Shell command parser
pub struct ShellCommandParser;

impl ShellCommandParser {
    /// Parses a raw input line
    pub fn parse(input: &str) -> Result<ShellCommand, ShellCommandError> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            return Err(ShellCommandError::EmptyCommand);
        }

        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "touch" => Self::parse_touch(args),
            "ls" => Ok(ShellCommand::List {
                long: args.first() == Some(&"-l"),
            }),
            "rm" => Self::parse_remove(args),
            "mv" => Self::parse_rename(args),
            "mkdir" => Self::parse_mkdir(args),
            "chmod" => Self::parse_chmod(args),
            "cd" => Self::parse_cd(args),
            "pwd" => Ok(ShellCommand::PrintWorkingDirectory),
            "help" => Ok(ShellCommand::Help),
            "exit" | "quit" => Ok(ShellCommand::Exit),
            _ => Err(ShellCommandError::UnknownCommand(cmd)),
        }
    }

    fn parse_touch(args: &[&str]) -> Result<ShellCommand, ShellCommandError> {
        match args.first() {
            Some(name) => Ok(ShellCommand::Touch {
                name: (*name).to_string(),
            }),
            None => Err(ShellCommandError::MissingArgument("touch <name>")),
        }
    }

    fn parse_remove(args: &[&str]) -> Result<ShellCommand, ShellCommandError> {
        match args.first() {
            Some(name) => Ok(ShellCommand::Remove {
                name: (*name).to_string(),
            }),
            None => Err(ShellCommandError::MissingArgument("rm <name>")),
        }
    }

    fn parse_rename(args: &[&str]) -> Result<ShellCommand, ShellCommandError> {
        match args {
            [from, to, ..] => Ok(ShellCommand::Rename {
                from: (*from).to_string(),
                to: (*to).to_string(),
            }),
            _ => Err(ShellCommandError::MissingArgument("mv <old_name> <new_name>")),
        }
    }

    fn parse_mkdir(args: &[&str]) -> Result<ShellCommand, ShellCommandError> {
        match args.first() {
            Some(name) => Ok(ShellCommand::MakeDirectory {
                name: (*name).to_string(),
            }),
            None => Err(ShellCommandError::MissingArgument("mkdir <name>")),
        }
    }

    fn parse_chmod(args: &[&str]) -> Result<ShellCommand, ShellCommandError> {
        match args {
            [mode, file, ..] => Ok(ShellCommand::ChangePermission {
                mode: (*mode).to_string(),
                file: (*file).to_string(),
            }),
            _ => Err(ShellCommandError::MissingArgument("chmod <mode> <filename>")),
        }
    }

    fn parse_cd(args: &[&str]) -> Result<ShellCommand, ShellCommandError> {
        match args.first() {
            Some(target) => Ok(ShellCommand::ChangeDirectory {
                target: (*target).to_string(),
            }),
            None => Err(ShellCommandError::MissingArgument("cd <dir>")),
        }
    }
}
