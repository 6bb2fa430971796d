//! Aggregation engine
//!
//! Turns a raw project list into dashboard statistics:
//! raw records → Filter Stage → filtered records → Stats Stage → summary.
//! Every operation here is a pure, synchronous function; the engine holds no
//! state across calls and never fails on well-formed input.

pub mod filter;
pub mod growth;
pub mod stats;
pub mod trends;

pub use filter::filter;
pub use growth::{format_growth, growth_percent};
pub use stats::summarize;
pub use trends::{stage_series, year_series, StagePoint, YearPoint};
