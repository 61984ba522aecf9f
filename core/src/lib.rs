//! Sea-level policy simulator core.
//!
//! A pure pipeline from a widget snapshot to everything the dashboard
//! draws: projected 2050 rise, adaptation score, grade, chart trajectory
//! and improvement suggestions. See `engine` for the execution order.

pub mod checklist;
pub mod config;
pub mod datasets;
pub mod engine;
pub mod error;
pub mod grade;
pub mod policy;
pub mod scoring;
pub mod suggestion;
pub mod trajectory;
pub mod types;
