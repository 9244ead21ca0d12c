//! Completer for reedline - feeds the line to the widget and lists its matches

use reedline::{Completer, Span, Suggestion};

use super::shared_state::SharedState;

/// Completer backed by the autocomplete widget
pub struct CandidateCompleter {
    shared_state: SharedState,
}

impl CandidateCompleter {
    /// Create a new completer
    ///
    /// # Arguments
    /// * `shared_state` - Shared state holding the widget
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl Completer for CandidateCompleter {
    /// Treat the whole line as the text field and offer the widget's matches
    ///
    /// Each suggestion replaces the entire line with the candidate name and
    /// marks the typed prefix through `match_indices`.
    fn complete(&mut self, line: &str, _pos: usize) -> Vec<Suggestion> {
        let mut widget = self.shared_state.widget();
        widget.on_text_change(line);

        let view = widget.view();
        view.suggestions
            .iter()
            .map(|entry| Suggestion {
                value: entry.candidate.name.clone(),
                description: Some(entry.candidate.code.clone()),
                span: Span::new(0, line.len()),
                append_whitespace: false,
                match_indices: Some(entry.match_indices()),
                ..Default::default()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use crate::config::DisplayConfig;
    use crate::loader::StaticLoader;
    use crate::widget::Autocomplete;
    use std::sync::Arc;
    use std::time::Duration;

    async fn create_test_completer() -> (CandidateCompleter, SharedState) {
        let mut widget = Autocomplete::mount(Arc::new(StaticLoader::new(
            vec![
                Candidate::new("Afghanistan", "AF"),
                Candidate::new("Albania", "AL"),
                Candidate::new("Algeria", "AG"),
            ],
            Duration::ZERO,
        )));
        widget.wait_for_load().await;
        let shared_state = SharedState::new(widget, &DisplayConfig::default());
        (CandidateCompleter::new(shared_state.clone()), shared_state)
    }

    #[tokio::test]
    async fn test_complete_with_prefix() {
        let (mut completer, _) = create_test_completer().await;
        let suggestions = completer.complete("al", 2);

        let values: Vec<_> = suggestions.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["Albania", "Algeria"]);
        assert_eq!(suggestions[0].description.as_deref(), Some("AL"));
        assert_eq!(suggestions[0].match_indices, Some(vec![0, 1]));
    }

    #[tokio::test]
    async fn test_span_covers_whole_line() {
        let (mut completer, _) = create_test_completer().await;
        for suggestion in completer.complete("Alb", 1) {
            assert_eq!(suggestion.span.start, 0);
            assert_eq!(suggestion.span.end, 3);
        }
    }

    #[tokio::test]
    async fn test_complete_updates_widget() {
        let (mut completer, shared_state) = create_test_completer().await;
        assert!(completer.complete("", 0).is_empty());
        assert!(completer.complete("z", 1).is_empty());

        completer.complete("af", 2);
        let widget = shared_state.widget();
        assert_eq!(widget.state().input_text, "af");
        assert_eq!(widget.state().matches.len(), 1);
    }
}
