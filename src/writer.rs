use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use serde::Serialize;

/// One CSV row as written to disk. `num_ili` and `num_patients` are extra
/// columns the dashboard ignores; they make generated files look like real
/// surveillance exports.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    state: &'a str,
    epiweek: u32,
    ili: Option<f64>,
    num_ili: Option<u32>,
    num_patients: u32,
}

pub struct IliWriter {
    writer: csv::Writer<Box<dyn Write>>,
    row_count: usize,
}

impl IliWriter {
    /// Creates a writer for `file_path`.
    ///
    /// Output is Brotli-compressed when the path ends with `.br`
    /// (e.g. `ilidata.csv.br`), which the loader decompresses transparently.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use ilidash::IliWriter;
    /// # fn main() -> anyhow::Result<()> {
    /// let mut writer = IliWriter::new("ilidata.csv")?;
    /// writer.write_row("Texas", 201740, Some(1.25), 1000)?;
    /// writer.finish()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let sink: Box<dyn Write> = if file_path.ends_with(".br") {
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(BufWriter::new(file), 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(Self::from_writer(sink))
    }

    /// Writes CSV into an arbitrary sink.
    pub fn from_writer(sink: Box<dyn Write>) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            row_count: 0,
        }
    }

    /// Appends one weekly observation. `None` leaves the `ili` cell empty.
    pub fn write_row(
        &mut self,
        state: &str,
        epiweek: u32,
        ili: Option<f64>,
        num_patients: u32,
    ) -> Result<()> {
        let num_ili = ili.map(|pct| (pct / 100.0 * num_patients as f64).round() as u32);
        self.writer
            .serialize(CsvRow { state, epiweek, ili, num_ili, num_patients })
            .with_context(|| format!("Failed to write row {}", self.row_count + 1))?;
        self.row_count += 1;
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Flushes everything and closes the compressed stream, if any.
    pub fn finish(self) -> Result<usize> {
        let rows = self.row_count;
        let mut sink = self
            .writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))?;
        sink.flush().context("Failed to flush output")?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::load_dataset;

    #[test]
    fn test_written_file_loads_back() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.csv");
        let path_str = path.to_string_lossy().into_owned();

        let mut writer = IliWriter::new(&path_str)?;
        writer.write_row("Ohio", 201801, Some(2.5), 1000)?;
        writer.write_row("Ohio", 201802, None, 1200)?;
        assert_eq!(writer.row_count(), 2);
        assert_eq!(writer.finish()?, 2);

        let text = std::fs::read_to_string(&path)?;
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("state,epiweek,ili,num_ili,num_patients"));
        assert_eq!(lines.next(), Some("Ohio,201801,2.5,25,1000"));
        assert_eq!(lines.next(), Some("Ohio,201802,,,1200"));

        let dataset = load_dataset(&path)?;
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.missing_ili(), 1);
        Ok(())
    }
}
