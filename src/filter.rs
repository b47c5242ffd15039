//! Restricting the weekly table to the selected state.

use crate::error::FilterError;
use crate::index::WeeklyTable;

/// One point of a state's time series; `ili` is `None` for a missing week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub weeks: u32,
    pub epiweek: u32,
    pub ili: Option<f64>,
}

/// Every week of one state, in week order, missing values included.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSeries {
    state: String,
    points: Vec<SeriesPoint>,
}

impl StateSeries {
    pub fn state(&self) -> &str {
        &self.state
    }

    /// All weeks, missing measurements kept as gaps.
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Observed `ili` values with missing weeks dropped.
    pub fn clean_sample(&self) -> Vec<f64> {
        self.points.iter().filter_map(|p| p.ili).collect()
    }

    /// Runs of consecutive observed weeks as `[weeks, ili]` pairs.
    ///
    /// Drawing each run as its own line leaves a visible gap wherever a week
    /// is missing instead of joining its neighbours.
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();

        for point in &self.points {
            match point.ili {
                Some(value) => current.push([point.weeks as f64, value]),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// Selects the rows of `state` from `table`.
pub fn filter_state(table: &WeeklyTable, state: &str) -> Result<StateSeries, FilterError> {
    let rows = table.rows_for(state);
    if rows.is_empty() {
        return Err(FilterError::NoRows(state.to_string()));
    }

    let points = rows
        .iter()
        .map(|r| SeriesPoint {
            weeks: r.weeks,
            epiweek: r.epiweek,
            ili: r.ili,
        })
        .collect();

    Ok(StateSeries {
        state: state.to_string(),
        points,
    })
}
