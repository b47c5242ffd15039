//! Per-state week numbering.
//!
//! Rows are ordered by `(state, epiweek)` and every state gets its own running
//! counter starting at 0. The counter is what the time-series chart uses as its
//! x axis, so gaps in the epiweek sequence never produce gaps on the chart.

use std::ops::Range;
use std::sync::Arc;

use crate::dataset::{IliDataset, Observation};

/// An observation with its position inside its state's history.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedRow {
    pub state: Arc<str>,
    pub epiweek: u32,
    pub ili: Option<f64>,
    /// 0-based week number within `state`.
    pub weeks: u32,
}

/// All observations sorted by `(state, epiweek)` with `weeks` assigned.
///
/// Invariant: rows of one state are contiguous and their `weeks` values are
/// exactly `0..count` in ascending epiweek order.
#[derive(Debug, Clone, Default)]
pub struct WeeklyTable {
    rows: Vec<IndexedRow>,
    /// State name and the row range it occupies, in sorted order.
    spans: Vec<(Arc<str>, Range<usize>)>,
}

impl WeeklyTable {
    /// Sorts `observations` and numbers each state's weeks.
    ///
    /// The sort is stable: rows sharing a state and epiweek keep their input order.
    pub fn from_observations(observations: &[Observation]) -> Self {
        let mut sorted: Vec<&Observation> = observations.iter().collect();
        sorted.sort_by(|a, b| a.state.cmp(&b.state).then(a.epiweek.cmp(&b.epiweek)));

        let mut rows = Vec::with_capacity(sorted.len());
        let mut spans: Vec<(Arc<str>, Range<usize>)> = Vec::new();
        let mut week = 0u32;

        for (i, obs) in sorted.into_iter().enumerate() {
            match spans.last_mut() {
                Some((state, span)) if *state == obs.state => {
                    week += 1;
                    span.end = i + 1;
                }
                _ => {
                    week = 0;
                    spans.push((Arc::clone(&obs.state), i..i + 1));
                }
            }

            rows.push(IndexedRow {
                state: Arc::clone(&obs.state),
                epiweek: obs.epiweek,
                ili: obs.ili,
                weeks: week,
            });
        }

        Self { rows, spans }
    }

    pub fn rows(&self) -> &[IndexedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct states in sorted order.
    pub fn states(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(|(state, _)| &**state)
    }

    /// The contiguous rows belonging to `state`; empty if the state is absent.
    pub fn rows_for(&self, state: &str) -> &[IndexedRow] {
        self.spans
            .binary_search_by(|(s, _)| (**s).cmp(state))
            .map(|i| &self.rows[self.spans[i].1.clone()])
            .unwrap_or(&[])
    }
}

/// Derives the weekly table for a loaded dataset.
pub fn derive_weeks(dataset: &IliDataset) -> WeeklyTable {
    WeeklyTable::from_observations(dataset.observations())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(state: &str, epiweek: u32, ili: Option<f64>) -> Observation {
        Observation { state: Arc::from(state), epiweek, ili }
    }

    #[test]
    fn test_weeks_restart_per_state() {
        let table = WeeklyTable::from_observations(&[
            obs("TX", 201703, Some(3.0)),
            obs("AK", 201702, Some(2.0)),
            obs("TX", 201701, Some(1.0)),
            obs("AK", 201701, Some(1.0)),
            obs("TX", 201702, None),
        ]);

        let labels: Vec<(&str, u32, u32)> = table
            .rows()
            .iter()
            .map(|r| (&*r.state, r.epiweek, r.weeks))
            .collect();

        assert_eq!(
            labels,
            vec![
                ("AK", 201701, 0),
                ("AK", 201702, 1),
                ("TX", 201701, 0),
                ("TX", 201702, 1),
                ("TX", 201703, 2),
            ]
        );
    }

    #[test]
    fn test_single_row_state_gets_week_zero() {
        let table = WeeklyTable::from_observations(&[obs("VT", 201852, Some(0.4))]);
        assert_eq!(table.rows()[0].weeks, 0);
        assert_eq!(table.rows_for("VT").len(), 1);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let table = WeeklyTable::from_observations(&[
            obs("ME", 201710, Some(1.0)),
            obs("ME", 201710, Some(2.0)),
            obs("ME", 201709, Some(3.0)),
        ]);

        let values: Vec<Option<f64>> = table.rows().iter().map(|r| r.ili).collect();
        assert_eq!(values, vec![Some(3.0), Some(1.0), Some(2.0)]);
        let weeks: Vec<u32> = table.rows().iter().map(|r| r.weeks).collect();
        assert_eq!(weeks, vec![0, 1, 2]);
    }

    #[test]
    fn test_rows_for_unknown_state_is_empty() {
        let table = WeeklyTable::from_observations(&[obs("OR", 201701, Some(1.0))]);
        assert!(table.rows_for("WA").is_empty());
        assert_eq!(table.states().collect::<Vec<_>>(), vec!["OR"]);
    }
}
