//! Exports the complexity model shared by the estimator and by charting callers. See:
//!   - [types]
//!   - [growth]
//!   - [comparison]
//!   - [performance]
//!
//! Everything in here is a pure function of its inputs -- no state, no I/O, no locks.

pub mod types;
mod types_impl;
pub mod growth;
pub mod comparison;
pub mod performance;
