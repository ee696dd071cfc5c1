//! CareerPulse match service: deterministic resume-to-job scoring behind an HTTP API.

pub mod config;
pub mod errors;
pub mod matching;
pub mod routes;
pub mod state;
