// src/lib.rs
//! LinkedIn job crawler: polls a job-search proxy on an interval, filters
//! postings for visa-sponsorship language, persists matches to a flat JSON
//! store and exposes a small control/status API.

pub mod agent;
pub mod config;
pub mod store;
pub mod web;

pub use agent::{AgentController, AgentState};
pub use config::AppConfig;
pub use store::{JobRecord, JobStore};
pub use web::start_web_server;
