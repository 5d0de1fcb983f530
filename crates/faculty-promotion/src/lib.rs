//! Faculty promotion tracking: profile scoring, rank-aware eligibility, promotion
//! transitions, and the administrative override path, plus the configuration, error,
//! and telemetry plumbing shared with the HTTP service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
