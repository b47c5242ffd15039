//! Loading of weekly ILI observations from CSV.
//!
//! The loader only needs three columns, `state`, `epiweek` and `ili`; they are
//! located by header name so column order and any extra columns don't matter.
//! Files ending in `.br` are decompressed with Brotli on the fly.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use brotli::Decompressor;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::DatasetError;
use crate::intern::StateInterner;

/// Default dataset file, resolved relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "ilidata.csv";

pub const STATE_COLUMN: &str = "state";
pub const EPIWEEK_COLUMN: &str = "epiweek";
pub const ILI_COLUMN: &str = "ili";

/// Cell contents treated as a missing `ili` measurement (compared case-insensitively).
const MISSING_MARKERS: &[&str] = &["", "na", "nan", "null"];

/// One weekly observation for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub state: Arc<str>,
    /// Epidemiological week as `YYYYWW`.
    pub epiweek: u32,
    /// Percentage of outpatient visits for influenza-like illness.
    pub ili: Option<f64>,
}

/// A loaded dataset, in file order.
#[derive(Debug, Clone, Default)]
pub struct IliDataset {
    observations: Vec<Observation>,
    source: Option<PathBuf>,
    missing_ili: usize,
    state_count: usize,
}

impl IliDataset {
    /// Builds a dataset from already-parsed observations.
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        let missing_ili = observations.iter().filter(|o| o.ili.is_none()).count();
        let mut names = StateInterner::new();
        let observations: Vec<Observation> = observations
            .into_iter()
            .map(|o| Observation { state: names.intern(&o.state), ..o })
            .collect();

        Self {
            observations,
            source: None,
            missing_ili,
            state_count: names.len(),
        }
    }

    /// Parses CSV text from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let columns = ColumnIndex::locate(rdr.headers()?)?;

        let mut names = StateInterner::new();
        let mut observations = Vec::new();
        let mut missing_ili = 0;

        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let observation = columns.parse_row(&record, line, &mut names)?;
            if observation.ili.is_none() {
                missing_ili += 1;
            }
            observations.push(observation);
        }

        if observations.is_empty() {
            return Err(DatasetError::Empty);
        }

        debug!(
            rows = observations.len(),
            states = names.len(),
            missing_ili,
            "parsed ILI dataset"
        );

        Ok(Self {
            observations,
            source: None,
            missing_ili,
            state_count: names.len(),
        })
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Path the dataset was read from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of rows whose `ili` cell was empty or a missing marker.
    pub fn missing_ili(&self) -> usize {
        self.missing_ili
    }

    /// Number of distinct states.
    pub fn state_count(&self) -> usize {
        self.state_count
    }
}

/// Reads and validates the dataset at `path`.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> anyhow::Result<()> {
/// let dataset = ilidash::load_dataset("ilidata.csv")?;
/// // Brotli-compressed files are decompressed automatically
/// let dataset = ilidash::load_dataset("ilidata.csv.br")?;
/// # Ok(())
/// # }
/// ```
pub fn load_dataset(path: impl AsRef<Path>) -> Result<IliDataset, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let reader: Box<dyn Read> = if is_brotli(path) {
        Box::new(Decompressor::new(file, 4096))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut dataset = IliDataset::from_reader(reader)?;
    dataset.source = Some(path.to_path_buf());

    info!(
        path = %path.display(),
        rows = dataset.len(),
        states = dataset.state_count(),
        "loaded ILI dataset"
    );
    Ok(dataset)
}

fn is_brotli(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("br"))
}

/// Positions of the required columns within a header row.
struct ColumnIndex {
    state: usize,
    epiweek: usize,
    ili: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(DatasetError::MissingColumn(name))
        };

        Ok(Self {
            state: find(STATE_COLUMN)?,
            epiweek: find(EPIWEEK_COLUMN)?,
            ili: find(ILI_COLUMN)?,
        })
    }

    fn parse_row(
        &self,
        record: &StringRecord,
        line: u64,
        names: &mut StateInterner,
    ) -> Result<Observation, DatasetError> {
        let malformed = |message: String| DatasetError::Malformed { line, message };
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let state = field(self.state);
        if state.is_empty() {
            return Err(malformed("empty state".to_string()));
        }

        let raw_week = field(self.epiweek);
        let epiweek = raw_week
            .parse::<u32>()
            .map_err(|_| malformed(format!("epiweek '{}' is not an integer", raw_week)))?;

        let ili = parse_ili(field(self.ili)).map_err(malformed)?;

        Ok(Observation {
            state: names.intern(state),
            epiweek,
            ili,
        })
    }
}

/// Parses an `ili` cell; missing markers become `None`.
fn parse_ili(raw: &str) -> Result<Option<f64>, String> {
    if MISSING_MARKERS.iter().any(|m| raw.eq_ignore_ascii_case(m)) {
        return Ok(None);
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| format!("ili '{}' is not a number", raw))?;

    if !value.is_finite() || value < 0.0 {
        return Err(format!("ili '{}' must be a finite non-negative percentage", raw));
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<IliDataset, DatasetError> {
        IliDataset::from_reader(text.as_bytes())
    }

    #[test]
    fn test_columns_found_by_name() {
        let data = parse("epiweek,region,ili,state\n201740,x,1.5,TX\n201741,x,2.0,TX\n").unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data.observations()[0].epiweek, 201740);
        assert_eq!(data.observations()[1].ili, Some(2.0));
        assert_eq!(&*data.observations()[0].state, "TX");
    }

    #[test]
    fn test_missing_markers() {
        let data = parse("state,epiweek,ili\nCA,201701,\nCA,201702,NA\nCA,201703,NaN\nCA,201704,0.7\n").unwrap();

        assert_eq!(data.missing_ili(), 3);
        assert_eq!(data.observations()[3].ili, Some(0.7));
    }

    #[test]
    fn test_missing_column_is_reported() {
        let err = parse("state,week,ili\nCA,1,1.0\n").unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("epiweek")));
    }

    #[test]
    fn test_bad_epiweek_reports_line() {
        let err = parse("state,epiweek,ili\nCA,201701,1.0\nCA,later,1.0\n").unwrap_err();
        match err {
            DatasetError::Malformed { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_ili_rejected() {
        let err = parse("state,epiweek,ili\nCA,201701,-1\n").unwrap_err();
        assert!(matches!(err, DatasetError::Malformed { .. }));
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(matches!(parse("state,epiweek,ili\n"), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_state_names_are_shared() {
        let data = parse("state,epiweek,ili\nNY,201701,1\nNY,201702,2\nNJ,201701,3\n").unwrap();
        let rows = data.observations();

        assert!(Arc::ptr_eq(&rows[0].state, &rows[1].state));
        assert_eq!(data.state_count(), 2);
    }
}
