//! Prompt layer: collects typed answers from the operator.
//!
//! The command loop talks to a [`Prompter`] rather than to the terminal, so
//! tests can drive it with scripted answers. The production implementation
//! wraps `dialoguer` inputs; numeric parsing and re-prompting on malformed
//! input happen here, never in the store.

use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;

use crate::error::{Context, Result};

/// Source of operator answers for the command loop.
pub trait Prompter {
    /// Read the next top-level command token.
    fn read_command(&mut self) -> Result<String>;

    /// Read a free-text field. With a default, empty input yields the
    /// default; without one, empty input is returned as-is (validation is
    /// the store's job).
    fn read_text(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Read an integer field. Non-numeric input never escapes the prompt
    /// layer; the operator is re-asked until the value parses.
    fn read_number(&mut self, prompt: &str, default: Option<i64>) -> Result<i64>;
}

/// Interactive prompter backed by `dialoguer`.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn read_command(&mut self) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt("How can I help you?")
            .allow_empty(true)
            .interact_text()
            .with_ctx(|| "read command".to_string())
    }

    fn read_text(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
        let input = match default {
            Some(d) => input.default(d.to_string()),
            None => input.allow_empty(true),
        };
        input
            .interact_text()
            .with_ctx(|| format!("read text field '{prompt}'"))
    }

    fn read_number(&mut self, prompt: &str, default: Option<i64>) -> Result<i64> {
        let input = Input::<i64>::with_theme(&self.theme).with_prompt(prompt);
        let input = match default {
            Some(d) => input.default(d),
            None => input,
        };
        input
            .interact_text()
            .with_ctx(|| format!("read numeric field '{prompt}'"))
    }
}
