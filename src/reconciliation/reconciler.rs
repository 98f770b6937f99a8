//! Drives parsing and comparison across two tables

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::VerifierConfig;
use crate::conversion::{parse, CurrencyComparator};
use crate::reconciliation::column_map::ColumnMapping;
use crate::traits::*;
use crate::types::*;

static EMPTY_CELL: RawCell = RawCell::Empty;

/// Counts of each comparison outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTally {
    pub matches: usize,
    pub mismatches: usize,
    pub not_applicable: usize,
}

impl ComparisonTally {
    /// Count one comparison outcome
    pub fn record(&mut self, result: &ComparisonResult) {
        match result {
            ComparisonResult::Match { .. } => self.matches += 1,
            ComparisonResult::Mismatch { .. } => self.mismatches += 1,
            ComparisonResult::NotApplicable { .. } => self.not_applicable += 1,
        }
    }

    /// Total cell pairs compared
    pub fn comparisons(&self) -> usize {
        self.matches + self.mismatches + self.not_applicable
    }
}

/// Everything a reconciliation pass produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationOutcome {
    /// Mismatches in row order, then requested column order
    pub mismatches: Vec<MismatchRecord>,
    /// Data rows visited
    pub rows_checked: usize,
    /// Columns found in both tables
    pub columns_checked: usize,
    /// Requested columns missing from at least one table
    pub missing_columns: Vec<String>,
    pub tally: ComparisonTally,
}

/// Reconciles a BGN table against an EUR table
#[derive(Debug, Clone)]
pub struct TableReconciler {
    comparator: CurrencyComparator,
    progress_interval: usize,
}

impl TableReconciler {
    /// Create a reconciler from a configuration
    pub fn new(config: &VerifierConfig) -> Self {
        Self::with_comparator(
            CurrencyComparator::new(config.rate.clone()),
            config.progress_interval,
        )
    }

    /// Create a reconciler around an existing comparator
    pub fn with_comparator(comparator: CurrencyComparator, progress_interval: usize) -> Self {
        Self {
            comparator,
            progress_interval: progress_interval.max(1),
        }
    }

    /// Comparator applied to every cell pair
    pub fn comparator(&self) -> &CurrencyComparator {
        &self.comparator
    }

    /// Find every cell pair whose EUR amount disagrees with its BGN amount
    pub fn reconcile<A, B, S>(&self, source: &A, target: &B, columns: &[S]) -> Vec<MismatchRecord>
    where
        A: TableSource + ?Sized,
        B: TableSource + ?Sized,
        S: AsRef<str>,
    {
        self.run(source, target, columns, None).mismatches
    }

    /// Same as [`TableReconciler::reconcile`], notifying `observer` as rows are done
    pub fn reconcile_with_progress<A, B, S>(
        &self,
        source: &A,
        target: &B,
        columns: &[S],
        observer: &mut dyn ProgressObserver,
    ) -> Vec<MismatchRecord>
    where
        A: TableSource + ?Sized,
        B: TableSource + ?Sized,
        S: AsRef<str>,
    {
        self.run(source, target, columns, Some(observer)).mismatches
    }

    /// Single pass over every row and resolved column
    ///
    /// Rows run up to the longer of the two tables; cells past the end of the
    /// shorter one count as empty.
    pub fn run<A, B, S>(
        &self,
        source: &A,
        target: &B,
        columns: &[S],
        mut observer: Option<&mut dyn ProgressObserver>,
    ) -> ReconciliationOutcome
    where
        A: TableSource + ?Sized,
        B: TableSource + ?Sized,
        S: AsRef<str>,
    {
        let mapping = ColumnMapping::build(source, target, columns);
        for name in mapping.missing() {
            warn!("Column '{}' is missing from one or both tables, skipping", name);
        }

        let rows_total = source.data_row_count().max(target.data_row_count());
        debug!(
            "Reconciling {} rows across {} columns at {}",
            rows_total,
            mapping.len(),
            self.comparator.rate()
        );

        let mut mismatches = Vec::new();
        let mut tally = ComparisonTally::default();

        for row in 0..rows_total {
            for column in mapping.columns() {
                let bgn = parse(cell_at(source, row, column.source_index));
                let eur = parse(cell_at(target, row, column.target_index));

                let result = self.comparator.compare(&bgn, &eur);
                tally.record(&result);

                if let (
                    ParsedAmount::Value(source_bgn),
                    ComparisonResult::Mismatch {
                        expected_eur,
                        given_eur,
                    },
                ) = (bgn, result)
                {
                    mismatches.push(MismatchRecord::new(
                        row + 1,
                        column.name.clone(),
                        source_bgn,
                        expected_eur,
                        given_eur,
                    ));
                }
            }

            let rows_done = row + 1;
            if rows_done % self.progress_interval == 0 && rows_done < rows_total {
                if let Some(observer) = observer.as_deref_mut() {
                    observer.on_progress(rows_done, rows_total);
                }
            }
        }

        if let Some(observer) = observer {
            observer.on_progress(rows_total, rows_total);
        }

        ReconciliationOutcome {
            mismatches,
            rows_checked: rows_total,
            columns_checked: mapping.len(),
            missing_columns: mapping.missing().to_vec(),
            tally,
        }
    }
}

impl Default for TableReconciler {
    fn default() -> Self {
        Self::new(&VerifierConfig::default())
    }
}

fn cell_at<T: TableSource + ?Sized>(table: &T, row: usize, column: usize) -> &RawCell {
    table.cell(row, column).unwrap_or(&EMPTY_CELL)
}
