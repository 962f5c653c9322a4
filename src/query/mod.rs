//! # Query Model
//!
//! Structured filters over analyzed records, and the natural-language
//! interpreter that produces them.

mod filter;
pub mod natural;

pub use filter::StringFilter;
pub use natural::interpret;
