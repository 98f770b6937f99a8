//! Traits for table abstraction and progress reporting

use crate::types::*;

/// A table of raw cells with a single header row
///
/// This trait lets the verifier work with any spreadsheet or export reader
/// (xlsx, ods, CSV, in-memory, etc.) by exposing headers and cells by position.
pub trait TableSource {
    /// Header row, in column order
    fn headers(&self) -> &[String];

    /// Number of data rows, not counting the header
    fn data_row_count(&self) -> usize;

    /// Cell at a 0-based data row and column
    ///
    /// Returns `None` for positions outside the table, which the verifier
    /// treats the same as an empty cell.
    fn cell(&self, row: usize, column: usize) -> Option<&RawCell>;
}

/// Receives progress while tables are being reconciled
///
/// Calls are made synchronously from inside the reconciliation pass and have
/// no effect on its result.
pub trait ProgressObserver {
    fn on_progress(&mut self, rows_done: usize, rows_total: usize);
}

impl<F> ProgressObserver for F
where
    F: FnMut(usize, usize),
{
    fn on_progress(&mut self, rows_done: usize, rows_total: usize) {
        self(rows_done, rows_total)
    }
}
