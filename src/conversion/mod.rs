//! Conversion module containing cell parsing, the fixed rate and pair comparison

pub mod comparator;
pub mod parser;
pub mod rate;

pub use comparator::*;
pub use parser::*;
pub use rate::*;
