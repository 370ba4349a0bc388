//! Discounted cash flow valuation under base, optimistic and pessimistic scenarios.

pub mod chart_data;
pub mod finance;
pub mod scenarios;
pub mod strategy;

pub use chart_data::chart_dataset;
pub use scenarios::run_valuation;
