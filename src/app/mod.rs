//! Application state types and entry glue.
//!
//! Defines the closed command-token enum, the loop control flow enum, and
//! the `AppState` owning the store, plus the loop entry (re-exported as
//! `run`).
pub mod update;

use crate::store::UserStore;

/// Recognized top-level command tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Edit,
    Remove,
    Quit,
}

impl Command {
    /// Exact, case-sensitive token match. No aliases; anything else is an
    /// unknown command.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "list" => Some(Self::List),
            "add" => Some(Self::Add),
            "edit" => Some(Self::Edit),
            "remove" => Some(Self::Remove),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Whether the loop re-issues the command prompt after a branch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Mutable state shared across loop iterations: just the user store.
pub struct AppState {
    pub store: UserStore,
}

impl AppState {
    /// Create a new `AppState` with an empty store.
    pub fn new() -> Self {
        Self {
            store: UserStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-export the command loop entry function.
pub use update::run_app as run;
