//! Autocomplete widget runtime
//!
//! [`Autocomplete`] owns a [`WidgetState`] and drives it through
//! [`reduce`](state::reduce). On mount it starts the one-shot candidate
//! load as a tokio task; the task reports back over a channel, tagged with
//! the generation it was started for. The owner applies the outcome on the
//! next [`poll`](Autocomplete::poll) or
//! [`wait_for_load`](Autocomplete::wait_for_load).
//!
//! Teardown cancels the task and closes the channel, so a late result never
//! reaches the state.

pub mod render;
pub mod state;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::candidate::{self, Candidate};
use crate::error::Result;
use crate::loader::{CandidateLoader, load_validated};

pub use render::{SuggestionEntry, View, render};
pub use state::{Event, Phase, WidgetState, reduce};

/// Progress of the one-shot candidate load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The load has not resolved yet
    Pending,
    /// The load succeeded with this many candidates
    Ready(usize),
    /// The load failed; candidates stay empty
    Failed(String),
}

/// Result of one load attempt, as sent by the load task
#[derive(Debug)]
struct LoadOutcome {
    generation: u64,
    result: Result<Vec<Candidate>>,
}

/// An autocomplete widget bound to a candidate loader
pub struct Autocomplete {
    state: WidgetState,
    status: LoadStatus,
    loader: Arc<dyn CandidateLoader>,
    /// Identifies the load attempt whose outcome is accepted
    generation: u64,
    load_token: CancellationToken,
    outcome_tx: mpsc::UnboundedSender<LoadOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<LoadOutcome>,
    torn_down: bool,
}

impl Autocomplete {
    /// Create the widget and start loading its candidates.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Arguments
    /// * `loader` - Source of the candidate set, invoked once
    pub fn mount(loader: Arc<dyn CandidateLoader>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let mut widget = Self {
            state: WidgetState::new(),
            status: LoadStatus::Pending,
            loader,
            generation: 0,
            load_token: CancellationToken::new(),
            outcome_tx,
            outcome_rx,
            torn_down: false,
        };
        widget.start_load();
        widget
    }

    /// Spawn the load task for a new generation
    fn start_load(&mut self) {
        self.load_token.cancel();
        self.load_token = CancellationToken::new();
        self.generation += 1;
        self.status = LoadStatus::Pending;

        let generation = self.generation;
        let loader = Arc::clone(&self.loader);
        let token = self.load_token.clone();
        let tx = self.outcome_tx.clone();

        debug!(generation, "Starting candidate load");
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(generation, "Candidate load cancelled");
                }
                result = load_validated(loader.as_ref()) => {
                    if tx.send(LoadOutcome { generation, result }).is_err() {
                        debug!(generation, "Widget gone, dropping load result");
                    }
                }
            }
        });
    }

    /// Handle a change of the text field
    pub fn on_text_change(&mut self, text: impl Into<String>) {
        self.dispatch(Event::TextChanged(text.into()));
    }

    /// Handle the selection of a suggestion entry
    pub fn on_option_selected(&mut self, candidate: &Candidate) {
        self.dispatch(Event::OptionSelected(candidate.clone()));
    }

    /// Select the shown entry named `name` (ignoring case), if there is one
    ///
    /// Only entries of the current suggestion list can be picked.
    ///
    /// # Returns
    /// * `Option<Candidate>` - The selected candidate
    pub fn select_by_name(&mut self, name: &str) -> Option<Candidate> {
        let picked = candidate::find_by_name(&self.state.matches, name)?.clone();
        self.on_option_selected(&picked);
        Some(picked)
    }

    /// Apply an event through the reducer
    fn dispatch(&mut self, event: Event) {
        if self.torn_down {
            debug!("Ignoring event after teardown");
            return;
        }
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }

    /// Apply load outcomes that have already arrived.
    ///
    /// # Returns
    /// * `bool` - True if an outcome changed the widget
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            changed |= self.apply_outcome(outcome);
        }
        changed
    }

    /// Wait until the current load resolves and apply it
    ///
    /// Returns immediately if the load already resolved or the widget was
    /// torn down.
    pub async fn wait_for_load(&mut self) -> &LoadStatus {
        while !self.torn_down && self.status == LoadStatus::Pending {
            match self.outcome_rx.recv().await {
                Some(outcome) => {
                    self.apply_outcome(outcome);
                }
                None => break,
            }
        }
        &self.status
    }

    fn apply_outcome(&mut self, outcome: LoadOutcome) -> bool {
        if self.torn_down || outcome.generation != self.generation {
            debug!(
                generation = outcome.generation,
                current = self.generation,
                "Discarding stale load outcome"
            );
            return false;
        }

        match outcome.result {
            Ok(candidates) => {
                info!("Loaded {} candidates", candidates.len());
                self.status = LoadStatus::Ready(candidates.len());
                self.dispatch(Event::CandidatesLoaded(candidates));
            }
            Err(e) => {
                warn!("Candidate load failed: {}", e);
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    /// Start a new load after a failed one.
    ///
    /// # Returns
    /// * `bool` - False if the last load did not fail (nothing to retry)
    pub fn retry_load(&mut self) -> bool {
        if self.torn_down || !matches!(self.status, LoadStatus::Failed(_)) {
            return false;
        }
        info!("Retrying candidate load");
        self.start_load();
        true
    }

    /// Tear the widget down: cancel the load and stop accepting results
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        debug!(generation = self.generation, "Tearing down widget");
        self.torn_down = true;
        self.load_token.cancel();
        self.outcome_rx.close();
    }

    /// Whether the widget is still mounted
    pub fn is_mounted(&self) -> bool {
        !self.torn_down
    }

    /// Current state
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Current load status
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Current view
    pub fn view(&self) -> View<'_> {
        render(&self.state)
    }
}

impl Drop for Autocomplete {
    fn drop(&mut self) {
        self.teardown();
    }
}
