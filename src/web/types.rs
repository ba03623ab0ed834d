// src/web/types.rs
use crate::agent::AgentStatus;
use rocket::serde::Serialize;

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body in the `{"detail": ...}` shape the frontend expects.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CredentialsStatusResponse {
    pub set: bool,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AgentStatusResponse {
    pub status: String,
    pub job_count: usize,
    pub total_jobs_searched: usize,
    pub running_time: Option<String>,
    pub start_time: Option<String>,
}

impl From<AgentStatus> for AgentStatusResponse {
    fn from(status: AgentStatus) -> Self {
        Self {
            status: status.state.to_string(),
            job_count: status.job_count,
            total_jobs_searched: status.total_jobs_searched,
            running_time: status.running_time,
            start_time: status.start_time.map(|t| t.to_rfc3339()),
        }
    }
}
