//! Ranked screening report and its output formats.

use crate::{
    error::ScreenError,
    row::{ScreeningRow, sort_rows},
};
use chrono::NaiveDate;
use polars::prelude::*;
use serde::Serialize;
use std::{
    fmt::Write as _,
    fs::File,
    path::{Path, PathBuf},
};
use tracing::info;

/// The ranked result of a screening run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningReport {
    run_date: NaiveDate,
    rows: Vec<ScreeningRow>,
}

impl ScreeningReport {
    /// Build a report; rows are ranked on construction.
    #[must_use]
    pub fn new(mut rows: Vec<ScreeningRow>, run_date: NaiveDate) -> Self {
        sort_rows(&mut rows);
        Self { run_date, rows }
    }

    /// Date of the run.
    #[must_use]
    pub const fn run_date(&self) -> NaiveDate {
        self.run_date
    }

    /// Ranked rows.
    #[must_use]
    pub fn rows(&self) -> &[ScreeningRow] {
        &self.rows
    }

    /// Rows whose ROIC aggregate was computed, in rank order.
    pub fn successful(&self) -> impl Iterator<Item = &ScreeningRow> {
        self.rows.iter().filter(|r| r.is_success())
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the report has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows as a DataFrame.
    ///
    /// # Errors
    ///
    /// Returns an error if the DataFrame cannot be built.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        rows_to_dataframe(self.rows.iter())
    }

    /// File name of the CSV export for this run, e.g.
    /// `roic_pb_screen_20240131.csv`.
    #[must_use]
    pub fn csv_file_name(&self) -> String {
        format!("roic_pb_screen_{}.csv", self.run_date.format("%Y%m%d"))
    }

    /// Write the successful rows to a dated CSV file in `dir`.
    ///
    /// The directory is created if needed. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn write_csv(&self, dir: &Path) -> Result<PathBuf, ScreenError> {
        let mut df = rows_to_dataframe(self.successful())?;

        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.csv_file_name());
        let mut file = File::create(&path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;

        info!(path = %path.display(), rows = df.height(), "wrote screening CSV");
        Ok(path)
    }

    /// Render the ranked rows as a fixed-width text table.
    #[must_use]
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<8} {:>10} {:>8} {:>6}  {}",
            "Symbol", "ROIC", "P/B", "Years", "Status"
        );
        let _ = writeln!(out, "{}", "─".repeat(60));

        for row in &self.rows {
            let pb = row
                .pb_ratio
                .map_or_else(|| "N/A".to_string(), |pb| format!("{pb:.2}"));
            let _ = writeln!(
                out,
                "{:<8} {:>10} {:>8} {:>6}  {}",
                row.symbol, row.roic_percent, pb, row.years_available, row.status
            );
        }

        let _ = writeln!(
            out,
            "\n{} of {} tickers analyzed successfully",
            self.successful().count(),
            self.len()
        );
        out
    }
}

fn rows_to_dataframe<'a>(rows: impl Iterator<Item = &'a ScreeningRow>) -> PolarsResult<DataFrame> {
    let mut symbols = Vec::new();
    let mut roic = Vec::new();
    let mut roic_percent = Vec::new();
    let mut pb_ratio = Vec::new();
    let mut pb_source = Vec::new();
    let mut years = Vec::new();
    let mut status = Vec::new();

    for row in rows {
        symbols.push(row.symbol.clone());
        roic.push(row.roic);
        roic_percent.push(row.roic_percent.clone());
        pb_ratio.push(row.pb_ratio);
        pb_source.push(row.pb_source.to_string());
        years.push(row.years_available as u32);
        status.push(row.status.to_string());
    }

    df! {
        "Symbol" => symbols,
        "ROIC" => roic,
        "ROIC_Percent" => roic_percent,
        "PB_Ratio" => pb_ratio,
        "PB_Source" => pb_source,
        "Years_Available" => years,
        "Status" => status,
    }
}
