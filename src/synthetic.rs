//! Seeded generator of realistic-looking weekly ILI data.
//!
//! Each state gets a low baseline plus one flu season per year peaking in
//! winter, with multiplicative noise and a configurable share of missing
//! weeks. The same config always yields the same rows.

use std::sync::Arc;

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dataset::{IliDataset, Observation};
use crate::writer::IliWriter;

const STATE_NAMES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado",
    "Connecticut", "Delaware", "Florida", "Georgia", "Hawaii", "Idaho",
    "Illinois", "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana", "Maine",
    "Maryland", "Massachusetts", "Michigan", "Minnesota", "Mississippi",
    "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio",
    "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina",
    "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia",
    "Washington", "West Virginia", "Wisconsin", "Wyoming",
];

/// Week of the year at which the synthetic season peaks (early February).
const SEASON_PEAK_WEEK: f64 = 6.0;
const WEEKS_PER_YEAR: u32 = 52;

#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticConfig {
    pub states: usize,
    pub weeks: usize,
    /// First epiweek as `YYYYWW`.
    pub start_epiweek: u32,
    /// Probability that a week's `ili` is left empty.
    pub missing_rate: f64,
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            states: 10,
            weeks: 260,
            start_epiweek: 201540,
            missing_rate: 0.02,
            seed: 42,
        }
    }
}

impl SyntheticConfig {
    pub fn validate(&self) -> Result<()> {
        if self.states == 0 || self.states > STATE_NAMES.len() {
            bail!("states must be between 1 and {}", STATE_NAMES.len());
        }
        if self.weeks == 0 {
            bail!("weeks must be positive");
        }
        let week = self.start_epiweek % 100;
        if !(1..=WEEKS_PER_YEAR).contains(&week) {
            bail!("start epiweek {} has week {} outside 1..=52", self.start_epiweek, week);
        }
        if !(0.0..=1.0).contains(&self.missing_rate) {
            bail!("missing rate must be within [0, 1]");
        }
        Ok(())
    }
}

/// Epiweek following `epiweek`, wrapping to week 1 of the next year after week 52.
pub fn next_epiweek(epiweek: u32) -> u32 {
    let (year, week) = (epiweek / 100, epiweek % 100);
    if week >= WEEKS_PER_YEAR {
        (year + 1) * 100 + 1
    } else {
        epiweek + 1
    }
}

/// Generates observations in state-major order.
pub fn generate_observations(config: &SyntheticConfig) -> Result<Vec<Observation>> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut observations = Vec::with_capacity(config.states * config.weeks);

    for name in &STATE_NAMES[..config.states] {
        let state: Arc<str> = Arc::from(*name);
        let baseline = rng.gen_range(0.6..1.6);
        let amplitude = rng.gen_range(2.0..7.0);
        let spread = rng.gen_range(3.0..6.0);

        let mut epiweek = config.start_epiweek;
        for _ in 0..config.weeks {
            let ili = if rng.gen_bool(config.missing_rate) {
                None
            } else {
                let distance = season_distance(epiweek % 100);
                let season = amplitude * (-(distance * distance) / (2.0 * spread * spread)).exp();
                let noise: f64 = rng.gen_range(0.85..1.15);
                Some(round_to(((baseline + season) * noise).max(0.0), 5))
            };

            observations.push(Observation {
                state: Arc::clone(&state),
                epiweek,
                ili,
            });
            epiweek = next_epiweek(epiweek);
        }
    }

    Ok(observations)
}

/// Generates an in-memory dataset.
pub fn generate_dataset(config: &SyntheticConfig) -> Result<IliDataset> {
    Ok(IliDataset::from_observations(generate_observations(config)?))
}

/// Writes a generated dataset through `writer`; returns the row count.
pub fn write_dataset(config: &SyntheticConfig, writer: &mut IliWriter) -> Result<usize> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    let observations = generate_observations(config)?;
    for obs in &observations {
        let patients = rng.gen_range(2_000..40_000);
        writer.write_row(&obs.state, obs.epiweek, obs.ili, patients)?;
    }
    Ok(observations.len())
}

/// Circular distance in weeks from the seasonal peak.
fn season_distance(week: u32) -> f64 {
    let raw = (week as f64 - SEASON_PEAK_WEEK).abs();
    raw.min(WEEKS_PER_YEAR as f64 - raw)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epiweek_wraps_after_week_52() {
        assert_eq!(next_epiweek(201751), 201752);
        assert_eq!(next_epiweek(201752), 201801);
    }

    #[test]
    fn test_same_seed_same_rows() {
        let config = SyntheticConfig { states: 3, weeks: 20, ..Default::default() };
        let a = generate_observations(&config).unwrap();
        let b = generate_observations(&config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 60);
    }

    #[test]
    fn test_values_are_valid_percentages() {
        let config = SyntheticConfig { missing_rate: 0.1, ..Default::default() };
        let rows = generate_observations(&config).unwrap();

        assert!(rows.iter().filter_map(|r| r.ili).all(|v| v.is_finite() && v >= 0.0));
        assert!(rows.iter().any(|r| r.ili.is_none()));
    }

    #[test]
    fn test_invalid_config() {
        assert!(SyntheticConfig { states: 0, ..Default::default() }.validate().is_err());
        assert!(SyntheticConfig { start_epiweek: 201760, ..Default::default() }.validate().is_err());
        assert!(SyntheticConfig { missing_rate: 1.5, ..Default::default() }.validate().is_err());
    }
}
