//! Reconciliation module aligning a BGN table with an EUR table
//!
//! Columns are matched by header name and rows by position; every cell pair
//! is parsed and compared exactly once.

pub mod column_map;
pub mod reconciler;

pub use column_map::*;
pub use reconciler::*;
