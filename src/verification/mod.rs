//! Verification module containing the verifier and its reports

pub mod report;
pub mod verifier;

pub use report::*;
pub use verifier::*;
