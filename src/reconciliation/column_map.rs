//! Aligns the columns of two tables by header name

use serde::{Deserialize, Serialize};

use crate::traits::*;

/// A requested column found in both tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedColumn {
    /// Name as requested by the caller
    pub name: String,
    /// Position in the BGN table
    pub source_index: usize,
    /// Position in the EUR table
    pub target_index: usize,
}

/// Requested columns resolved against both header rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    columns: Vec<MappedColumn>,
    missing: Vec<String>,
}

impl ColumnMapping {
    /// Resolve each requested name in both tables
    ///
    /// Names are resolved in request order and only once each, comparing them
    /// without surrounding whitespace. A name missing from either header is
    /// recorded in [`ColumnMapping::missing`] instead.
    pub fn build<A, B, S>(source: &A, target: &B, requested: &[S]) -> Self
    where
        A: TableSource + ?Sized,
        B: TableSource + ?Sized,
        S: AsRef<str>,
    {
        let mut mapping = Self::default();

        for name in requested.iter().map(AsRef::as_ref) {
            if mapping.contains(name) {
                continue;
            }

            match (
                find_column(source.headers(), name),
                find_column(target.headers(), name),
            ) {
                (Some(source_index), Some(target_index)) => mapping.columns.push(MappedColumn {
                    name: name.to_string(),
                    source_index,
                    target_index,
                }),
                _ => mapping.missing.push(name.to_string()),
            }
        }

        mapping
    }

    /// Columns found in both tables, in request order
    pub fn columns(&self) -> &[MappedColumn] {
        &self.columns
    }

    /// Requested names missing from at least one table
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Number of columns found in both tables
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no requested column was found in both tables
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn contains(&self, name: &str) -> bool {
        let name = name.trim();
        self.columns.iter().any(|c| c.name.trim() == name)
            || self.missing.iter().any(|m| m.trim() == name)
    }
}

/// Position of the first header equal to `name`, ignoring surrounding whitespace
///
/// Matching is case-sensitive. Blank headers never match.
pub fn find_column(headers: &[String], name: &str) -> Option<usize> {
    let target = name.trim();
    if target.is_empty() {
        return None;
    }
    headers.iter().position(|header| header.trim() == target)
}

/// Headers present in both tables, in the BGN table's order
///
/// This is the natural default selection of columns to verify.
pub fn common_headers<A, B>(source: &A, target: &B) -> Vec<String>
where
    A: TableSource + ?Sized,
    B: TableSource + ?Sized,
{
    let mut common: Vec<String> = Vec::new();
    for header in source.headers() {
        let name = header.trim();
        if name.is_empty() || common.iter().any(|c| c == name) {
            continue;
        }
        if find_column(target.headers(), name).is_some() {
            common.push(name.to_string());
        }
    }
    common
}
