//! Interactive questions.
//! The [`Prompter`] trait is the seam between answer collection and the terminal;
//! [`DialoguerPrompter`] is the implementation used by the binary.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Asks the operator for input.
pub trait Prompter {
    /// Free text, re-asked until `validate` accepts it.
    fn text(&self, prompt: &str, validate: fn(&str) -> Result<()>) -> Result<String>;

    /// One of `items`; returns the selected index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Any subset of `items`; returns the selected indices in ascending order.
    fn multi_select(&self, prompt: &str, items: &[&str], defaults: &[bool]) -> Result<Vec<usize>>;

    /// Yes/no question. When `skip` is set the answer is `true` without asking.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

/// [`Prompter`] backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, validate: fn(&str) -> Result<()>) -> Result<String> {
        let input = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                validate(input.trim()).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(Error::PromptError)?;

        Ok(input.trim().to_string())
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(items)
            .interact()
            .map_err(Error::PromptError)
    }

    fn multi_select(&self, prompt: &str, items: &[&str], defaults: &[bool]) -> Result<Vec<usize>> {
        MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact()
            .map_err(Error::PromptError)
    }

    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new().with_prompt(prompt).default(true).interact().map_err(Error::PromptError)
    }
}
