//! Interactive input behind a small trait so the menu can be driven by a
//! script in tests.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::error::{Result, TodoError};

pub trait Prompter {
    /// Single choice; returns the zero-based index of the picked item.
    fn select(&mut self, label: &str, items: &[String]) -> Result<usize>;

    /// Free text; empty input is allowed.
    fn text(&mut self, label: &str) -> Result<String>;

    /// Positive integer, re-prompting until the input parses.
    fn number(&mut self, label: &str) -> Result<i32>;

    /// Yes/no, defaulting to no.
    fn confirm(&mut self, label: &str) -> Result<bool>;
}

/// Accepts a positive integer, ignoring surrounding whitespace.
pub fn parse_positive(input: &str) -> std::result::Result<i32, &'static str> {
    match input.trim().parse::<i32>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err("must be a positive number"),
        Err(_) => Err("must be a number"),
    }
}

/// Terminal prompts rendered with dialoguer's colorful theme.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, label: &str, items: &[String]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .default(0)
            .max_length(12)
            .interact_opt()?
            .ok_or(TodoError::Aborted)
    }

    fn text(&mut self, label: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn number(&mut self, label: &str) -> Result<i32> {
        let raw: String = Input::with_theme(&self.theme)
            .with_prompt(label)
            .validate_with(|input: &String| parse_positive(input).map(|_| ()))
            .interact_text()?;
        parse_positive(&raw).map_err(|e| TodoError::Prompt(e.to_string()))
    }

    fn confirm(&mut self, label: &str) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(label)
            .default(false)
            .interact_opt()?
            .ok_or(TodoError::Aborted)
    }
}
