// src/web/handlers.rs
use crate::agent::AgentController;
use crate::store::{Credentials, CredentialsStore, JobRecord, JobStore};
use crate::web::types::{
    AgentStatusResponse, CredentialsStatusResponse, ErrorDetail, MessageResponse,
};

use rocket::http::Status;
use rocket::response::status::{BadRequest, Custom};
use rocket::serde::json::Json;
use rocket::State;
use tracing::error;

pub async fn index_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("LinkedIn Job Crawler API"))
}

/// Best-effort snapshot of the store; readers tolerate staleness while the
/// loop is mid-cycle.
pub async fn get_jobs_handler(jobs: &State<JobStore>) -> Json<Vec<JobRecord>> {
    Json(jobs.load().await)
}

pub async fn start_agent_handler(
    controller: &State<AgentController>,
) -> Result<Json<MessageResponse>, BadRequest<Json<ErrorDetail>>> {
    match controller.start() {
        Ok(()) => Ok(Json(MessageResponse::new("Agent started successfully"))),
        Err(e) => Err(BadRequest(Json(ErrorDetail::new(e.to_string())))),
    }
}

pub async fn stop_agent_handler(
    controller: &State<AgentController>,
) -> Result<Json<MessageResponse>, BadRequest<Json<ErrorDetail>>> {
    match controller.stop() {
        Ok(()) => Ok(Json(MessageResponse::new("Agent is stopping"))),
        Err(e) => Err(BadRequest(Json(ErrorDetail::new(e.to_string())))),
    }
}

pub async fn agent_status_handler(
    controller: &State<AgentController>,
) -> Json<AgentStatusResponse> {
    Json(controller.status().into())
}

pub async fn set_credentials_handler(
    request: Json<Credentials>,
    credentials: &State<CredentialsStore>,
) -> Result<Json<MessageResponse>, Custom<Json<ErrorDetail>>> {
    match credentials.save(&request.into_inner()).await {
        Ok(()) => Ok(Json(MessageResponse::new(
            "LinkedIn credentials saved successfully",
        ))),
        Err(e) => {
            error!("Failed to save credentials: {:#}", e);
            Err(Custom(
                Status::InternalServerError,
                Json(ErrorDetail::new("Failed to save credentials")),
            ))
        }
    }
}

pub async fn credentials_status_handler(
    credentials: &State<CredentialsStore>,
) -> Json<CredentialsStatusResponse> {
    Json(CredentialsStatusResponse {
        set: credentials.load().await.is_set(),
    })
}
