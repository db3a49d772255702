//! Exports the pattern-based static estimator: text normalization, pattern detection and the
//! time & space classification built on top of them. See:
//!   - [normalization]
//!   - [pattern_detection]
//!   - [time_analysis]
//!   - [space_analysis]
//!   - [estimator]
//!
//! This is a deliberately approximate pattern matcher over text, not a parser: it trades
//! correctness guarantees for totality -- every input, however degenerate, yields an estimate.

pub mod normalization;
pub mod pattern_detection;
pub mod time_analysis;
pub mod space_analysis;
pub(crate) mod suggestions;
pub mod estimator;
