//! # BGN/EUR Verifier
//!
//! Checks that a price list converted from Bulgarian lev to euro matches its
//! original at the fixed rate of 1 EUR = 1.95583 BGN, rounded half-up to cents.
//!
//! ## Features
//!
//! - **Cell parsing**: numbers, empty cells and locale-formatted text such as `"1 234,56"`
//! - **Exact conversion**: decimal arithmetic with round-half-up to two places
//! - **Table reconciliation**: columns matched by header name, rows by position
//! - **Reporting**: summary counts and a CSV mismatch report
//! - **Table abstraction**: any reader can feed the verifier through [`TableSource`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bgn_eur_verifier::{RawCell, Table, Verifier};
//!
//! let bgn = Table::new(["Code", "Price"])
//!     .with_row(vec![RawCell::from("A1"), RawCell::from(100.0)]);
//! let eur = Table::new(["Code", "Price"])
//!     .with_row(vec![RawCell::from("A1"), RawCell::from("51,00")]);
//!
//! let report = Verifier::default().verify(&bgn, &eur, &["Price"]).unwrap();
//! assert_eq!(report.mismatches.len(), 1);
//! assert_eq!(report.mismatches[0].calculated_eur.to_string(), "51.13");
//! ```

pub mod config;
pub mod conversion;
pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;
pub mod verification;

// Re-export commonly used types
pub use config::*;
pub use conversion::*;
pub use reconciliation::*;
pub use traits::*;
pub use types::*;
pub use utils::Table;
pub use verification::*;
