use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use tracing::debug;

use crate::error::{Result, TypeaheadError};
use crate::widget::LoadStatus;

use super::command::{HELP_TEXT, ReplCommand};
use super::completer::CandidateCompleter;
use super::prompt::TypeaheadPrompt;
use super::shared_state::SharedState;

/// Name of the suggestion menu registered with reedline
const COMPLETION_MENU: &str = "completion_menu";

/// In-memory history capacity
const HISTORY_SIZE: usize = 200;

/// What the REPL loop should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print this message and continue
    Message(String),
    /// Continue without output
    Nothing,
    /// Leave the REPL
    Exit,
}

/// REPL engine hosting the autocomplete widget in a line editor
pub struct ReplEngine {
    /// Line editor acting as the text field
    line_editor: Reedline,

    /// Shared state holding the widget
    shared_state: SharedState,

    /// Whether to continue running
    running: bool,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `shared_state` - Shared state holding the mounted widget
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(shared_state: SharedState) -> Result<Self> {
        let completion_menu = Box::new(ColumnarMenu::default().with_name(COMPLETION_MENU));

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let history = FileBackedHistory::new(HISTORY_SIZE)
            .map_err(|e| TypeaheadError::Generic(format!("History error: {e}")))?;

        let line_editor = Reedline::create()
            .with_completer(Box::new(CandidateCompleter::new(shared_state.clone())))
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_edit_mode(Box::new(Emacs::new(keybindings)))
            .with_history(Box::new(history))
            .with_ansi_colors(shared_state.get_color_enabled());

        Ok(Self {
            line_editor,
            shared_state,
            running: true,
        })
    }

    /// Read a single line of input
    ///
    /// Ctrl-C yields an empty line, which clears the text field.
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line or None on EOF
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let prompt = TypeaheadPrompt::new(
            &*self.shared_state.prompt_label,
            self.shared_state.load_status(),
        );

        match self.line_editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => Ok(Some(line)),
            Ok(Signal::CtrlC) => Ok(Some(String::new())),
            Ok(Signal::CtrlD) => Ok(None),
            #[allow(unreachable_patterns)]
            Ok(_) => Ok(Some(String::new())),
            Err(err) => Err(TypeaheadError::Generic(format!("Read error: {err}"))),
        }
    }

    /// Handle a submitted line
    pub fn handle_line(&mut self, line: &str) -> Response {
        let response = handle_input(&self.shared_state, line);
        if response == Response::Exit {
            self.stop();
        }
        response
    }

    /// Stop the REPL
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Check if REPL is still running
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Apply a submitted line to the widget.
///
/// A line naming an entry of the shown suggestion list (ignoring case)
/// selects it. Any other text is a text change, answered with the rendered
/// suggestion list.
pub fn handle_input(shared_state: &SharedState, line: &str) -> Response {
    let command = ReplCommand::parse(line);
    debug!(?command, "Handling input");

    let mut widget = shared_state.widget();
    match command {
        ReplCommand::Exit => Response::Exit,
        ReplCommand::Help => Response::Message(HELP_TEXT.to_string()),
        ReplCommand::Clear => {
            widget.on_text_change("");
            Response::Nothing
        }
        ReplCommand::Retry => {
            if widget.retry_load() {
                Response::Message("Retrying candidate load...".to_string())
            } else {
                let reason = match widget.status() {
                    LoadStatus::Pending => "candidates are still loading",
                    _ => "candidates are already loaded",
                };
                Response::Message(format!("Nothing to retry: {reason}"))
            }
        }
        ReplCommand::Unknown(cmd) => {
            Response::Message(format!("Unknown command: {cmd} (try .help)"))
        }
        ReplCommand::Input(text) if text.is_empty() => {
            widget.on_text_change(text);
            Response::Nothing
        }
        ReplCommand::Input(text) => {
            if let Some(picked) = widget.select_by_name(&text) {
                return Response::Message(format!("Selected: {picked}"));
            }

            widget.on_text_change(text);
            let view = widget.view();
            if view.shows_suggestions() {
                Response::Message(view.to_styled_string(shared_state.get_color_enabled()))
            } else {
                match widget.status() {
                    LoadStatus::Pending => {
                        Response::Message("No matches (candidates still loading)".to_string())
                    }
                    LoadStatus::Failed(reason) => Response::Message(format!(
                        "No matches (candidate load failed: {reason}; type .retry)"
                    )),
                    LoadStatus::Ready(_) => Response::Message("No matches".to_string()),
                }
            }
        }
    }
}
