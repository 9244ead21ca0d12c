//! Custom prompt implementation for the typeahead REPL

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

use crate::widget::LoadStatus;

/// Prompt showing the label and the candidate load status
pub struct TypeaheadPrompt {
    /// Label, e.g. "country"
    label: String,
    /// Load status at the time the prompt was built
    status: LoadStatus,
}

impl TypeaheadPrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `label` - Label shown before the input
    /// * `status` - Current load status
    pub fn new(label: impl Into<String>, status: LoadStatus) -> Self {
        Self {
            label: label.into(),
            status,
        }
    }
}

impl Prompt for TypeaheadPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        match self.status {
            LoadStatus::Ready(_) => format!("{}> ", self.label).into(),
            LoadStatus::Pending => format!("{} (loading)> ", self.label).into(),
            LoadStatus::Failed(_) => format!("{} (load failed)> ", self.label).into(),
        }
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    /// The indicator is part of the left prompt
    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_prompt() {
        let prompt = TypeaheadPrompt::new("country", LoadStatus::Ready(3));
        assert_eq!(prompt.render_prompt_left(), "country> ");
    }

    #[test]
    fn test_loading_prompt() {
        let prompt = TypeaheadPrompt::new("country", LoadStatus::Pending);
        assert_eq!(prompt.render_prompt_left(), "country (loading)> ");
    }

    #[test]
    fn test_failed_prompt() {
        let prompt = TypeaheadPrompt::new("country", LoadStatus::Failed("boom".to_string()));
        assert_eq!(prompt.render_prompt_left(), "country (load failed)> ");
    }

    #[test]
    fn test_indicator_empty() {
        let prompt = TypeaheadPrompt::new("country", LoadStatus::Pending);
        assert_eq!(prompt.render_prompt_right(), "");
        assert_eq!(prompt.render_prompt_indicator(PromptEditMode::Default), "");
    }
}
