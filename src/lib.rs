//! Funds Dashboard Backend
//!
//! A funding-dashboard backend that:
//! - Serves a read-only project record set behind token authentication
//! - Derives aggregate statistics (counts, budget sums, donor sets, per-year
//!   breakdowns) with a pure aggregation engine
//! - Supports server-side filtering and sorting through an immutable
//!   view-state with reducer-style transitions
//!
//! DATA FLOW:
//! raw records → Filter Stage → filtered records → Stats Stage → summary → API

pub mod api;
pub mod auth;
pub mod engine;
pub mod error;
pub mod models;
pub mod source;
pub mod view;

pub use error::Result;

// Re-export common types
pub use engine::{filter, summarize};
pub use models::*;
