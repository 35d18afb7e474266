//! Screening rows and the ranking order.

use serde::{Serialize, Serializer};
use siegfried_metrics::{MultiYearRoic, PbResult, PbSource, RoicStatus};
use std::{cmp::Ordering, fmt::Display};

/// One ticker's line in the screening report.
///
/// Values are copied out of the ROIC and P/B results; the row owns them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningRow {
    /// Ticker symbol.
    #[serde(rename = "Symbol")]
    pub symbol: String,
    /// Geometric-mean ROIC.
    #[serde(rename = "ROIC")]
    pub roic: Option<f64>,
    /// ROIC as a percentage string, `"N/A"` when missing.
    #[serde(rename = "ROIC_Percent")]
    pub roic_percent: String,
    /// Price-to-book ratio.
    #[serde(rename = "PB_Ratio")]
    pub pb_ratio: Option<f64>,
    /// Source of the P/B ratio.
    #[serde(rename = "PB_Source")]
    pub pb_source: PbSource,
    /// Periods used for the ROIC aggregate.
    #[serde(rename = "Years_Available")]
    pub years_available: usize,
    /// ROIC aggregation status.
    #[serde(rename = "Status", serialize_with = "serialize_display")]
    pub status: RoicStatus,
}

impl ScreeningRow {
    /// Join a ticker's ROIC and P/B results.
    #[must_use]
    pub fn new(roic: &MultiYearRoic, pb: &PbResult) -> Self {
        Self {
            symbol: roic.ticker().to_string(),
            roic: roic.aggregate(),
            roic_percent: format_roic_percent(roic.aggregate()),
            pb_ratio: pb.ratio,
            pb_source: pb.source,
            years_available: roic.years_available(),
            status: roic.status().clone(),
        }
    }

    /// Whether the ROIC aggregate was computed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

fn serialize_display<T: Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Format a ROIC as `"12.34%"`, or `"N/A"`.
#[must_use]
pub fn format_roic_percent(roic: Option<f64>) -> String {
    roic.map_or_else(|| "N/A".to_string(), |r| format!("{:.2}%", r * 100.0))
}

/// Sort rows by ascending P/B, then descending ROIC; missing values last.
///
/// The sort is stable, so rows that tie on both keys keep their input order.
pub fn sort_rows(rows: &mut [ScreeningRow]) {
    rows.sort_by(|a, b| {
        nulls_last(a.pb_ratio, b.pb_ratio, |x, y| x.total_cmp(&y))
            .then_with(|| nulls_last(a.roic, b.roic, |x, y| y.total_cmp(&x)))
    });
}

fn nulls_last(a: Option<f64>, b: Option<f64>, cmp: impl Fn(f64, f64) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str, pb: Option<f64>, roic: Option<f64>) -> ScreeningRow {
        ScreeningRow {
            symbol: symbol.to_string(),
            roic,
            roic_percent: format_roic_percent(roic),
            pb_ratio: pb,
            pb_source: if pb.is_some() {
                PbSource::ReportedRatio
            } else {
                PbSource::Unavailable
            },
            years_available: 4,
            status: RoicStatus::Success,
        }
    }

    fn symbols(rows: &[ScreeningRow]) -> Vec<&str> {
        rows.iter().map(|r| r.symbol.as_str()).collect()
    }

    #[test]
    fn test_format_roic_percent() {
        assert_eq!(format_roic_percent(Some(0.1489)), "14.89%");
        assert_eq!(format_roic_percent(Some(-0.05)), "-5.00%");
        assert_eq!(format_roic_percent(None), "N/A");
    }

    #[test]
    fn test_sort_pb_then_roic() {
        let mut rows = vec![
            row("A", Some(1.0), Some(0.10)),
            row("B", Some(1.0), Some(0.20)),
            row("C", None, Some(0.30)),
        ];
        sort_rows(&mut rows);
        assert_eq!(symbols(&rows), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_sort_nulls_last_on_both_keys() {
        let mut rows = vec![
            row("NONE", None, None),
            row("HIGH_PB", Some(3.0), Some(0.50)),
            row("NO_ROIC", Some(0.8), None),
            row("LOW_PB", Some(0.8), Some(0.05)),
            row("NO_PB", None, Some(0.40)),
        ];
        sort_rows(&mut rows);
        assert_eq!(
            symbols(&rows),
            vec!["LOW_PB", "NO_ROIC", "HIGH_PB", "NO_PB", "NONE"]
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let mut r = row("ACME", None, None);
        r.status = RoicStatus::InsufficientData { periods: 1 };
        let json = serde_json::to_value(&r).unwrap();

        assert_eq!(json["Symbol"], "ACME");
        assert_eq!(json["ROIC_Percent"], "N/A");
        assert!(json["PB_Ratio"].is_null());
        assert_eq!(json["PB_Source"], "unavailable");
        assert_eq!(json["Status"], "Insufficient Data (1 periods with ROIC)");
    }
}
