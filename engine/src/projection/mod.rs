//! Revenue Projection
//!
//! This module provides:
//! - The fully-derived output figures (`Metrics` and friends)
//! - The pure derivation pass (`compute`)
//!
//! Everything downstream of the UI reads from here; nothing here reads from
//! anywhere but the input [`crate::params::ParameterSet`].

pub mod engine;
pub mod metrics;

// Re-exports
pub use engine::{compute, AUCTIONS_PER_MONTH, FREE_TRIAL_MESSAGES, MONTHS_PER_YEAR};
pub use metrics::{
    AnnualProjection, CostBreakdown, FounderRevenue, GoalAnalysis, MessageVolumes, Metrics,
    RecipientRevenue, RevenueLines, TokenFigures, UserSegments,
};
