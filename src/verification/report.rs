//! Verification results and their CSV export

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::reconciliation::ReconciliationOutcome;
use crate::types::*;

/// Header of the exported mismatch report
pub const REPORT_HEADERS: [&str; 6] = [
    "Row",
    "Column",
    "Source BGN",
    "Calculated EUR",
    "File EUR",
    "Diff",
];

/// Counts describing a verification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Data rows visited
    pub rows_checked: usize,
    /// Distinct columns the caller asked for
    pub columns_requested: usize,
    /// Columns found in both tables
    pub columns_checked: usize,
    /// Cell pairs compared
    pub comparisons: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub not_applicable: usize,
    /// Requested columns missing from at least one table
    pub missing_columns: Vec<String>,
}

/// Full result of verifying one pair of tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Mismatches in row order, then requested column order
    pub mismatches: Vec<MismatchRecord>,
    pub summary: VerificationSummary,
    /// When the report was produced
    pub generated_at: NaiveDateTime,
}

#[derive(Serialize)]
struct ReportRow<'a> {
    row: usize,
    column: &'a str,
    source_bgn: String,
    calculated_eur: String,
    file_eur: String,
    diff: String,
}

impl<'a> From<&'a MismatchRecord> for ReportRow<'a> {
    fn from(record: &'a MismatchRecord) -> Self {
        Self {
            row: record.sheet_row(),
            column: &record.column,
            source_bgn: record.source_bgn.to_string(),
            calculated_eur: record.calculated_eur.to_string(),
            file_eur: record.given_eur.to_string(),
            diff: record.difference.to_string(),
        }
    }
}

impl VerificationReport {
    /// Build a report from a reconciliation pass
    pub fn from_outcome(outcome: ReconciliationOutcome, columns_requested: usize) -> Self {
        let summary = VerificationSummary {
            rows_checked: outcome.rows_checked,
            columns_requested,
            columns_checked: outcome.columns_checked,
            comparisons: outcome.tally.comparisons(),
            matches: outcome.tally.matches,
            mismatches: outcome.tally.mismatches,
            not_applicable: outcome.tally.not_applicable,
            missing_columns: outcome.missing_columns,
        };

        Self {
            mismatches: outcome.mismatches,
            summary,
            generated_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Whether every comparable pair matched
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// One-line outcome suitable for showing to the user
    pub fn message(&self) -> String {
        if self.is_clean() {
            format!(
                "Verification Complete. No mismatches found in {} rows across {} columns.",
                self.summary.rows_checked, self.summary.columns_requested
            )
        } else {
            format!("Found {} mismatches.", self.mismatches.len())
        }
    }

    /// Write the mismatch report as CSV
    ///
    /// The `Row` column uses spreadsheet numbering, where the header is row 1.
    pub fn write_csv<W: Write>(&self, writer: W) -> VerifierResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        writer.write_record(REPORT_HEADERS)?;
        for record in &self.mismatches {
            writer.serialize(ReportRow::from(record))?;
        }
        writer
            .flush()
            .map_err(|e| VerifierError::Export(e.to_string()))?;
        Ok(())
    }

    /// The CSV report as UTF-8 bytes
    pub fn to_csv_bytes(&self) -> VerifierResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconciliation::ComparisonTally;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn outcome(mismatches: Vec<MismatchRecord>) -> ReconciliationOutcome {
        let tally = ComparisonTally {
            matches: 3,
            mismatches: mismatches.len(),
            not_applicable: 1,
        };
        ReconciliationOutcome {
            mismatches,
            rows_checked: 4,
            columns_checked: 1,
            missing_columns: vec!["Promo".to_string()],
            tally,
        }
    }

    #[test]
    fn test_clean_report_message() {
        let report = VerificationReport::from_outcome(outcome(Vec::new()), 2);

        assert!(report.is_clean());
        assert_eq!(report.summary.comparisons, 4);
        assert_eq!(report.summary.missing_columns, vec!["Promo"]);
        assert_eq!(
            report.message(),
            "Verification Complete. No mismatches found in 4 rows across 2 columns."
        );
    }

    #[test]
    fn test_csv_export() {
        let record = MismatchRecord::new(
            2,
            "Price".to_string(),
            dec("100"),
            dec("51.13"),
            dec("51.00"),
        );
        let report = VerificationReport::from_outcome(outcome(vec![record]), 1);

        assert_eq!(report.message(), "Found 1 mismatches.");

        let csv = String::from_utf8(report.to_csv_bytes().unwrap()).unwrap();
        assert_eq!(
            csv,
            "Row,Column,Source BGN,Calculated EUR,File EUR,Diff\n3,Price,100,51.13,51.00,0.13\n"
        );
    }

    #[test]
    fn test_empty_csv_export_keeps_header() {
        let report = VerificationReport::from_outcome(outcome(Vec::new()), 1);
        let csv = String::from_utf8(report.to_csv_bytes().unwrap()).unwrap();
        assert_eq!(csv, "Row,Column,Source BGN,Calculated EUR,File EUR,Diff\n");
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = VerificationReport::from_outcome(outcome(Vec::new()), 1);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["rows_checked"], 4);
        assert_eq!(json["summary"]["missing_columns"][0], "Promo");
    }
}
