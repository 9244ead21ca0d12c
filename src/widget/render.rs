//! View model and terminal rendering for the widget

use nu_ansi_term::{Color, Style};

use super::state::WidgetState;
use crate::candidate::Candidate;

/// One entry of the suggestion list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionEntry<'a> {
    /// The candidate this entry selects
    pub candidate: &'a Candidate,
    /// Part of the name matched by the typed text
    pub prefix: &'a str,
    /// Remainder of the name
    pub rest: &'a str,
}

impl SuggestionEntry<'_> {
    /// Character indices of the highlighted prefix within the name
    pub fn match_indices(&self) -> Vec<usize> {
        (0..self.prefix.chars().count()).collect()
    }
}

/// What the widget shows for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    /// Text field content
    pub input: &'a str,
    /// Suggestion list (empty when idle, in which case it is not shown)
    pub suggestions: Vec<SuggestionEntry<'a>>,
}

/// Build the view for a state
pub fn render(state: &WidgetState) -> View<'_> {
    let suggestions = state
        .matches
        .iter()
        .map(|candidate| {
            let split = candidate.matched_prefix_end(&state.input_text);
            let (prefix, rest) = candidate.name.split_at(split);
            SuggestionEntry {
                candidate,
                prefix,
                rest,
            }
        })
        .collect();

    View {
        input: &state.input_text,
        suggestions,
    }
}

impl View<'_> {
    /// Whether the suggestion list is shown
    pub fn shows_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Render the suggestion list, one entry per line.
    ///
    /// With colour the typed prefix is bold green and the code dimmed;
    /// without colour the prefix is wrapped in brackets.
    pub fn to_styled_string(&self, color: bool) -> String {
        let prefix_style = Style::new().bold().fg(Color::Green);
        let code_style = Style::new().fg(Color::DarkGray);

        self.suggestions
            .iter()
            .map(|entry| {
                if color {
                    format!(
                        "  {}{} {}",
                        prefix_style.paint(entry.prefix),
                        entry.rest,
                        code_style.paint(format!("({})", entry.candidate.code))
                    )
                } else {
                    format!("  [{}]{} ({})", entry.prefix, entry.rest, entry.candidate.code)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
