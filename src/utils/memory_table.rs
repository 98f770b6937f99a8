//! In-memory table implementation

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::traits::*;
use crate::types::*;

/// A table held entirely in memory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<RawCell>>,
}

impl Table {
    /// Create an empty table with the given header row
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a data row; rows may be shorter than the header
    pub fn push_row(&mut self, cells: Vec<RawCell>) {
        self.rows.push(cells);
    }

    /// Builder form of [`Table::push_row`]
    pub fn with_row(mut self, cells: Vec<RawCell>) -> Self {
        self.push_row(cells);
        self
    }

    /// Data rows, without the header
    pub fn rows(&self) -> &[Vec<RawCell>] {
        &self.rows
    }

    /// Read a delimited export whose first record is the header row
    ///
    /// Empty fields become [`RawCell::Empty`], everything else is kept as text
    /// for the parser to interpret.
    pub fn from_csv_reader<R: Read>(reader: R) -> VerifierResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut table = Self::new(headers);

        for record in reader.records() {
            let record = record?;
            let cells = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        RawCell::Empty
                    } else {
                        RawCell::Text(field.to_string())
                    }
                })
                .collect();
            table.push_row(cells);
        }

        Ok(table)
    }
}

impl TableSource for Table {
    fn headers(&self) -> &[String] {
        &self.headers
    }

    fn data_row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, column: usize) -> Option<&RawCell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_outside_table_are_none() {
        let table = Table::new(["Name", "Price"])
            .with_row(vec![RawCell::from("Bread"), RawCell::from(1.5)])
            .with_row(vec![RawCell::from("Milk")]);

        assert_eq!(table.data_row_count(), 2);
        assert_eq!(table.cell(0, 1), Some(&RawCell::Number(1.5)));
        assert_eq!(table.cell(1, 1), None);
        assert_eq!(table.cell(5, 0), None);
    }

    #[test]
    fn test_from_csv_reader() {
        let data = "Name,Price,Old Price\nBread,\"1,50\",\nMilk,2.30,2.50\nEggs\n";
        let table = Table::from_csv_reader(data.as_bytes()).unwrap();

        assert_eq!(table.headers(), &["Name", "Price", "Old Price"]);
        assert_eq!(table.data_row_count(), 3);
        assert_eq!(table.cell(0, 1), Some(&RawCell::from("1,50")));
        assert_eq!(table.cell(0, 2), Some(&RawCell::Empty));
        assert_eq!(table.cell(1, 2), Some(&RawCell::from("2.50")));
        assert_eq!(table.cell(2, 1), None);
    }
}
