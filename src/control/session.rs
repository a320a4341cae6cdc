//! Interactive session: command execution, macros, undo.
//!
//! A `Session` drives one engine on behalf of one player. Before each
//! command line it pushes a snapshot onto the undo stack, so a line
//! that fails partway through can always be rolled back with `undo`.
//! Macro expansion is recursive with a depth cap - the table is user
//! editable and a self-referential macro must not hang the session.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::control::command::{Step, BUILTIN_COMMANDS};
use crate::engine::{CubeEngine, Snapshot};

/// Macro expansions deeper than this are assumed to be cyclic.
const MAX_EXPANSION_DEPTH: usize = 64;

/// Errors reported by the control layer.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Token that is neither a primitive move nor a known macro.
    #[error("`{0}` is not a move or a known command")]
    UnknownCommand(String),

    /// Undo with an empty history.
    #[error("no moves to undo")]
    EmptyHistory,

    /// Macro expansion exceeded the depth cap.
    #[error("command `{0}` expands into itself")]
    RecursionLimit(String),

    /// A command-file line without an expansion.
    #[error("command file line is missing an expansion: `{0}`")]
    MalformedLine(String),

    /// Reading or writing a command file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One interactive play session: engine, undo history, macro table.
pub struct Session {
    engine: CubeEngine,
    history: Vec<Snapshot>,
    commands: FxHashMap<String, String>,
}

impl Session {
    /// Wrap an engine with the built-in macro vocabulary.
    #[must_use]
    pub fn new(engine: CubeEngine) -> Self {
        let commands = BUILTIN_COMMANDS
            .iter()
            .map(|&(name, expansion)| (name.to_string(), expansion.to_string()))
            .collect();
        Self {
            engine,
            history: Vec::new(),
            commands,
        }
    }

    /// The engine being played.
    #[must_use]
    pub fn engine(&self) -> &CubeEngine {
        &self.engine
    }

    /// How many undo steps are available.
    #[must_use]
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Execute a whitespace-separated line of move tokens.
    ///
    /// A snapshot is pushed before anything runs. On error the engine
    /// keeps the steps that already applied, as the original game did;
    /// `undo` restores the pre-line state.
    pub fn run_line(&mut self, line: &str) -> Result<(), CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(());
        }

        self.history.push(self.engine.get_state());
        for token in tokens {
            self.exec_token(token, 0)?;
        }
        Ok(())
    }

    fn exec_token(&mut self, token: &str, depth: usize) -> Result<(), CommandError> {
        if depth > MAX_EXPANSION_DEPTH {
            return Err(CommandError::RecursionLimit(token.to_string()));
        }

        let token = token.to_ascii_lowercase();
        if let Some(step) = Step::parse(&token) {
            match step {
                Step::Face(face, direction) => self.engine.move_face(face, direction),
                Step::Whole(axis, direction) => self.engine.reorient(axis, direction),
            }
            return Ok(());
        }

        if let Some(expansion) = self.commands.get(&token).cloned() {
            for sub in expansion.split_whitespace() {
                self.exec_token(sub, depth + 1)?;
            }
            return Ok(());
        }

        Err(CommandError::UnknownCommand(token))
    }

    /// Restore the state from before the most recent command line.
    pub fn undo(&mut self) -> Result<(), CommandError> {
        let snapshot = self.history.pop().ok_or(CommandError::EmptyHistory)?;
        self.engine.put_state(snapshot);
        Ok(())
    }

    // === Macro table ===

    /// Add or replace a macro. Names are stored lowercase.
    pub fn define(&mut self, name: &str, expansion: &str) {
        self.commands
            .insert(name.to_ascii_lowercase(), expansion.to_string());
    }

    /// The macro table, sorted by name for stable listing.
    #[must_use]
    pub fn commands(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .commands
            .iter()
            .map(|(name, expansion)| (name.as_str(), expansion.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Write the macro table to a file, one `name expansion` per line.
    pub fn save_commands(&self, path: impl AsRef<Path>) -> Result<(), CommandError> {
        let mut out = String::new();
        for (name, expansion) in self.commands() {
            out.push_str(name);
            out.push(' ');
            out.push_str(expansion);
            out.push('\n');
        }
        fs::write(path, out)?;
        Ok(())
    }

    /// Replace the macro table with the contents of a file.
    pub fn load_commands(&mut self, path: impl AsRef<Path>) -> Result<(), CommandError> {
        let contents = fs::read_to_string(path)?;
        let mut commands = FxHashMap::default();
        for line in contents.lines() {
            let mut words = line.split_whitespace();
            let Some(name) = words.next() else {
                continue;
            };
            let expansion = words.collect::<Vec<_>>().join(" ");
            if expansion.is_empty() {
                return Err(CommandError::MalformedLine(line.to_string()));
            }
            commands.insert(name.to_ascii_lowercase(), expansion);
        }
        self.commands = commands;
        Ok(())
    }
}
