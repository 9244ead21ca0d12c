//! Widget state and its pure transition function
//!
//! Every change to the widget goes through [`reduce`], so filtering and
//! selection can be tested without any rendering surface.

use crate::candidate::{Candidate, filter_by_prefix};

/// State owned by one autocomplete widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    /// Live content of the text field
    pub input_text: String,

    /// Full candidate set (empty until the load resolves)
    pub candidates: Vec<Candidate>,

    /// Candidates whose name starts with `input_text`, in candidate order
    pub matches: Vec<Candidate>,
}

/// Events the widget reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The text field changed to the given raw string
    TextChanged(String),

    /// An entry of the suggestion list was picked
    OptionSelected(Candidate),

    /// The one-shot load resolved with the full candidate set
    CandidatesLoaded(Vec<Candidate>),
}

/// Whether a suggestion list is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No matches: nothing to show
    Idle,
    /// At least one match is listed
    Suggesting,
}

impl WidgetState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase, derived from `matches`
    pub fn phase(&self) -> Phase {
        if self.matches.is_empty() {
            Phase::Idle
        } else {
            Phase::Suggesting
        }
    }
}

/// Apply one event to a state, returning the next state.
pub fn reduce(mut state: WidgetState, event: Event) -> WidgetState {
    match event {
        Event::TextChanged(text) => {
            state.matches = filter_by_prefix(&state.candidates, &text);
            state.input_text = text;
        }
        Event::OptionSelected(candidate) => {
            state.input_text = candidate.name;
            state.matches.clear();
        }
        Event::CandidatesLoaded(candidates) => {
            state.candidates = candidates;
            state.matches = filter_by_prefix(&state.candidates, &state.input_text);
        }
    }
    state
}
