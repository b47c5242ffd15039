//! The single-choice state selector.

use tracing::debug;

use crate::error::SelectionError;
use crate::index::WeeklyTable;

/// Distinct states on offer and the one currently chosen.
///
/// States are kept in lexical order regardless of how the input file was
/// ordered, so the default selection is the same on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSelector {
    states: Vec<String>,
    selected: usize,
}

impl StateSelector {
    /// Builds a selector from any list of state names; duplicates are removed.
    pub fn new<I, S>(states: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut states: Vec<String> = states.into_iter().map(Into::into).collect();
        states.sort();
        states.dedup();

        if states.is_empty() {
            return Err(SelectionError::NoStates);
        }
        Ok(Self { states, selected: 0 })
    }

    /// Offers every state present in `table`.
    pub fn from_table(table: &WeeklyTable) -> Result<Self, SelectionError> {
        Self::new(table.states())
    }

    /// All choices in display order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// The current selection.
    pub fn selected(&self) -> &str {
        &self.states[self.selected]
    }

    pub fn select(&mut self, state: &str) -> Result<(), SelectionError> {
        let idx = self
            .states
            .binary_search_by(|s| s.as_str().cmp(state))
            .map_err(|_| SelectionError::UnknownState(state.to_string()))?;
        self.selected = idx;
        Ok(())
    }

    /// Selects `state` when it is offered, otherwise falls back to the first state.
    ///
    /// Used when restoring a remembered selection against a different file.
    pub fn select_or_default(&mut self, state: &str) {
        if self.select(state).is_err() {
            debug!(state, "remembered state not in dataset, using default");
            self.selected = 0;
        }
    }
}
