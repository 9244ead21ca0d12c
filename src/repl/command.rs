//! Input classification for the REPL
//!
//! A line starting with `.` is a REPL command; anything else is text for
//! the widget.

/// What a submitted line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Leave the REPL
    Exit,
    /// Show the command list
    Help,
    /// Empty the text field
    Clear,
    /// Re-run a failed candidate load
    Retry,
    /// Unrecognised dot command
    Unknown(String),
    /// Text for the widget (a selection or a text change)
    Input(String),
}

/// Help text listing the REPL commands
pub const HELP_TEXT: &str = "\
Type part of a country name and press Enter to list matches.
Press Enter again on a listed name, or pick it from the Tab menu, to select it.
Matches are refreshed on Tab and Enter, not on every keystroke.

Commands:
  .help          Show this help
  .clear         Clear the text field
  .retry         Retry a failed candidate load
  .exit, .quit   Leave (also Ctrl-D)";

impl ReplCommand {
    /// Classify a submitted line
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            ".exit" | ".quit" => ReplCommand::Exit,
            ".help" => ReplCommand::Help,
            ".clear" => ReplCommand::Clear,
            ".retry" => ReplCommand::Retry,
            cmd if cmd.starts_with('.') => ReplCommand::Unknown(cmd.to_string()),
            _ => ReplCommand::Input(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse(".exit"), ReplCommand::Exit);
        assert_eq!(ReplCommand::parse(" .quit "), ReplCommand::Exit);
        assert_eq!(ReplCommand::parse(".help"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse(".clear"), ReplCommand::Clear);
        assert_eq!(ReplCommand::parse(".retry"), ReplCommand::Retry);
        assert_eq!(
            ReplCommand::parse(".reload"),
            ReplCommand::Unknown(".reload".to_string())
        );
    }

    #[test]
    fn test_help_mentions_refresh_keys() {
        assert!(HELP_TEXT.contains("not on every keystroke"));
        assert!(HELP_TEXT.contains(".retry"));
    }

    #[test]
    fn test_input_is_kept_raw() {
        assert_eq!(
            ReplCommand::parse("Al "),
            ReplCommand::Input("Al ".to_string())
        );
        assert_eq!(ReplCommand::parse(""), ReplCommand::Input(String::new()));
    }
}
