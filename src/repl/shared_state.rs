use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use crate::config::DisplayConfig;
use crate::widget::{Autocomplete, LoadStatus};

/// Shared state between the line editor's completer and the REPL loop.
///
/// The widget sits behind a mutex so that every access, from either side,
/// is serialized.
#[derive(Clone)]
pub struct SharedState {
    /// The mounted autocomplete widget
    widget: Arc<Mutex<Autocomplete>>,

    /// Color output setting
    pub color_enabled: Arc<RwLock<bool>>,

    /// Label shown in the prompt
    pub prompt_label: Arc<str>,
}

impl SharedState {
    /// Create a new shared state around a mounted widget.
    ///
    /// * `widget` - Mounted widget
    /// * `display_config` - Display configuration settings
    pub fn new(widget: Autocomplete, display_config: &DisplayConfig) -> Self {
        Self {
            widget: Arc::new(Mutex::new(widget)),
            color_enabled: Arc::new(RwLock::new(display_config.color_output)),
            prompt_label: Arc::from(display_config.prompt_label.as_str()),
        }
    }

    /// Lock the widget, applying any load outcome that already arrived.
    pub fn widget(&self) -> MutexGuard<'_, Autocomplete> {
        let mut widget = self.widget.lock().unwrap_or_else(|e| e.into_inner());
        widget.poll();
        widget
    }

    /// Current load status.
    pub fn load_status(&self) -> LoadStatus {
        self.widget().status().clone()
    }

    /// Get current color setting.
    pub fn get_color_enabled(&self) -> bool {
        *self.color_enabled.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Set color output.
    pub fn set_color_enabled(&self, enabled: bool) {
        *self.color_enabled.write().unwrap_or_else(|e| e.into_inner()) = enabled;
    }

    /// Tear the widget down.
    pub fn teardown(&self) {
        self.widget
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .teardown();
    }
}
