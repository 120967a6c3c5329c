//! Interactive shell session
//!
//! The session is the engine's single caller: it owns the service, holds
//! the current-node id, and renders every result as the status line the
//! user sees. The current node moves only when a navigation succeeds.

use crate::commands::{ShellCommand, ShellCommandError, ShellCommandParser};
use ns_tree::{NodeId, ROOT_NAME};
use services_namespace::{
    EntryKind, NamespaceOperations, NamespaceService, OperationError, TeardownReport,
};

const HELP_TEXT: &str = "available commands:
  touch <name>         - create an empty file
  ls [-l]              - list the current directory
  rm <name>            - delete a file
  mv <old> <new>       - rename a file
  mkdir <name>         - create a subdirectory
  chmod <mode> <file>  - change a file's permission tag
  cd <dir>             - change directory (/, .., ., or a subdirectory name)
  pwd                  - print the current path
  help                 - show this message
  exit                 - end the session";

/// What a dispatched line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionReply {
    /// A status line (possibly multi-line) to print
    Output(String),
    /// Nothing to print
    Empty,
    /// The session should end
    Exit,
}

/// A shell session over one namespace tree
pub struct ShellSession {
    service: NamespaceService,
    current: NodeId,
}

impl ShellSession {
    /// Creates a session positioned at the root of a fresh tree
    pub fn new() -> Self {
        let service = NamespaceService::new();
        let current = service.root();
        Self { service, current }
    }

    /// Returns the current node id
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Returns the engine, for inspection
    pub fn service(&self) -> &NamespaceService {
        &self.service
    }

    /// Renders the prompt for the current position
    pub fn prompt(&self) -> String {
        let name = self
            .service
            .node_name(self.current)
            .unwrap_or_else(|_| ROOT_NAME.to_string());
        format!("nsim:{}> ", name)
    }

    /// Parses and executes one input line
    pub fn execute_line(&mut self, line: &str) -> SessionReply {
        match ShellCommandParser::parse(line) {
            Ok(command) => self.execute(command),
            Err(ShellCommandError::EmptyCommand) => SessionReply::Empty,
            Err(e) => SessionReply::Output(e.to_string()),
        }
    }

    /// Executes a parsed command
    pub fn execute(&mut self, command: ShellCommand) -> SessionReply {
        match command {
            ShellCommand::Touch { name } => self.touch(&name),
            ShellCommand::List { long } => self.list(long),
            ShellCommand::Remove { name } => self.remove(&name),
            ShellCommand::Rename { from, to } => self.rename(&from, &to),
            ShellCommand::MakeDirectory { name } => self.mkdir(&name),
            ShellCommand::ChangePermission { mode, file } => self.chmod(&mode, &file),
            ShellCommand::ChangeDirectory { target } => self.cd(&target),
            ShellCommand::PrintWorkingDirectory => self.pwd(),
            ShellCommand::Help => SessionReply::Output(HELP_TEXT.to_string()),
            ShellCommand::Exit => SessionReply::Exit,
        }
    }

    /// Tears the tree down; the session ends here
    pub fn shutdown(self) -> TeardownReport {
        self.service.teardown()
    }

    fn touch(&mut self, name: &str) -> SessionReply {
        let message = match self.service.create_file(self.current, name) {
            Ok(()) => format!("file '{}' created", name),
            Err(e) => e.to_string(),
        };
        SessionReply::Output(message)
    }

    fn remove(&mut self, name: &str) -> SessionReply {
        let message = match self.service.remove_file(self.current, name) {
            Ok(()) => format!("file '{}' removed", name),
            Err(OperationError::EntryNotFound(_)) => "no such file".to_string(),
            Err(e) => e.to_string(),
        };
        SessionReply::Output(message)
    }

    fn rename(&mut self, from: &str, to: &str) -> SessionReply {
        let message = match self.service.rename_file(self.current, from, to) {
            Ok(()) => format!("file '{}' renamed to '{}'", from, to),
            Err(e) => format!("mv: {}", e),
        };
        SessionReply::Output(message)
    }

    fn chmod(&mut self, mode: &str, file: &str) -> SessionReply {
        let message = match self.service.change_permission(self.current, mode, file) {
            Ok(()) => format!("permissions of '{}' changed to '{}'", file, mode),
            Err(e) => format!("chmod: {}", e),
        };
        SessionReply::Output(message)
    }

    fn mkdir(&mut self, name: &str) -> SessionReply {
        let message = match self.service.create_directory(self.current, name) {
            Ok(_) => format!("directory '{}' created", name),
            Err(e @ OperationError::AllocationFailed) => format!("mkdir: {}", e),
            Err(e) => e.to_string(),
        };
        SessionReply::Output(message)
    }

    fn cd(&mut self, target: &str) -> SessionReply {
        match self.service.change_directory(self.current, target) {
            Ok(node) => {
                self.current = node;
                SessionReply::Empty
            }
            Err(e) => SessionReply::Output(e.to_string()),
        }
    }

    fn pwd(&self) -> SessionReply {
        match self.service.absolute_path(self.current) {
            Ok(path) => SessionReply::Output(path),
            Err(e) => SessionReply::Output(e.to_string()),
        }
    }

    fn list(&self, long: bool) -> SessionReply {
        let rows = match self.service.list(self.current) {
            Ok(rows) => rows,
            Err(e) => return SessionReply::Output(e.to_string()),
        };
        if rows.is_empty() {
            return SessionReply::Output("ls: no entries".to_string());
        }

        let lines: Vec<String> = rows
            .iter()
            .map(|row| match row.kind {
                EntryKind::Directory => {
                    if long {
                        format!("drwx {:>4} {}/", "-", row.name)
                    } else {
                        format!("{}/", row.name)
                    }
                }
                EntryKind::File => {
                    if long {
                        format!(
                            "-{} {:>4} {}",
                            row.permission.as_deref().unwrap_or_default(),
                            row.size.unwrap_or(0),
                            row.name
                        )
                    } else {
                        row.name.clone()
                    }
                }
            })
            .collect();
        SessionReply::Output(lines.join("\n"))
    }
}

impl Default for ShellSession {
    fn default() -> Self {
        Self::new()
    }
}
