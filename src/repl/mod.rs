//! REPL host for the autocomplete widget
//!
//! The reedline line is the widget's text field:
//! - Tab opens a suggestion menu fed by the widget's matches
//! - Enter on a candidate name selects it
//! - Enter on any other text lists the matches below the prompt
//! - The prompt shows whether candidates are still loading

mod command;
mod completer;
mod engine;
mod prompt;
mod shared_state;

pub use command::{HELP_TEXT, ReplCommand};
pub use completer::CandidateCompleter;
pub use engine::{ReplEngine, Response, handle_input};
pub use prompt::TypeaheadPrompt;
pub use shared_state::SharedState;
