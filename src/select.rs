use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::errors::{AppError, Result};

/// Picks one of several search candidates.
pub trait Selector {
    /// Index into `candidates` of the chosen entry.
    fn select(&self, candidates: &[String]) -> Result<usize>;
}

/// Arrow-key prompt on the terminal.
pub struct DialoguerSelector;

impl Selector for DialoguerSelector {
    fn select(&self, candidates: &[String]) -> Result<usize> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Multiple locations found, pick one")
            .items(candidates)
            .default(0)
            .interact_opt()
            .map_err(|e| AppError::Prompt(e.to_string()))?
            .ok_or(AppError::SelectionCancelled)
    }
}
