// src/agent/mod.rs
use chrono::{DateTime, Utc};
use std::fmt;

pub mod client;
pub mod controller;
pub mod crawler;
pub mod filter;
pub mod types;

pub use client::LinkedInClient;
pub use controller::AgentController;
pub use crawler::Crawler;
pub use filter::has_visa_sponsorship;

/// Lifecycle state of the crawl agent.
///
/// Transitions happen only inside the controller's background loop, except
/// `Stopped -> Running` (start) which happens on the caller's context.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentState {
    Stopped,
    Running,
    Searching,
    Waiting,
    Error(String),
}

impl AgentState {
    /// True while the background loop is alive (running, searching or waiting).
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            AgentState::Running | AgentState::Searching | AgentState::Waiting
        )
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentState::Stopped => write!(f, "stopped"),
            AgentState::Running => write!(f, "running"),
            AgentState::Searching => write!(f, "searching"),
            AgentState::Waiting => write!(f, "waiting"),
            AgentState::Error(msg) => write!(f, "error: {}", msg),
        }
    }
}

/// Point-in-time snapshot of the agent, as reported by the status endpoint.
#[derive(Debug, Clone)]
pub struct AgentStatus {
    pub state: AgentState,
    pub job_count: usize,
    pub total_jobs_searched: usize,
    pub running_time: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
}

/// A visa-flagged posting produced by one crawl cycle.
///
/// Not yet a persisted record: `date_found` is stamped by the job store at
/// first insertion, not here.
#[derive(Debug, Clone)]
pub struct CrawledJob {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub date_posted: String,
}
