//! typeahead library
//!
//! An autocomplete widget over a one-shot, asynchronously loaded candidate
//! set, plus the terminal host that drives it.
//!
//! # Modules
//!
//! - `candidate`: Candidate model and prefix matching
//! - `loader`: Candidate sources
//! - `widget`: Reducer, renderer and widget runtime
//! - `repl`: Interactive line-editor host
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use typeahead::{Autocomplete, StaticLoader};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut widget = Autocomplete::mount(Arc::new(StaticLoader::countries(Duration::ZERO)));
//!     widget.wait_for_load().await;
//!
//!     widget.on_text_change("Al");
//!     println!("{}", widget.view().to_styled_string(false));
//! }
//! ```

pub mod candidate;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod repl;
pub mod widget;

// Re-export commonly used types
pub use candidate::Candidate;
pub use config::Config;
pub use error::{Result, TypeaheadError};
pub use loader::{CandidateLoader, FileLoader, StaticLoader};
pub use widget::{Autocomplete, LoadStatus, WidgetState, reduce};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
