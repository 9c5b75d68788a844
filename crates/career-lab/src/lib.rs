//! Roster core for the Career & Adulting Lab.
//!
//! Applicants are screened against configurable thresholds, enrolled as
//! students, and associated with projects from the program catalog. A
//! separate directory tracks mentors. Everything is held in memory and
//! mutated by a single logical actor per roster.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
