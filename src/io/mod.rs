//! File output for layout data.

/// CSV export of the final turbine table.
pub mod export;
