// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::agent::AgentController;
use crate::config::AppConfig;
use crate::store::{Credentials, CredentialsStore, JobRecord, JobStore};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status::{BadRequest, Custom};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[get("/")]
pub async fn index() -> Json<MessageResponse> {
    handlers::index_handler().await
}

#[get("/jobs")]
pub async fn get_jobs(jobs: &State<JobStore>) -> Json<Vec<JobRecord>> {
    handlers::get_jobs_handler(jobs).await
}

#[post("/agent/start")]
pub async fn start_agent(
    controller: &State<AgentController>,
) -> Result<Json<MessageResponse>, BadRequest<Json<ErrorDetail>>> {
    handlers::start_agent_handler(controller).await
}

#[post("/agent/stop")]
pub async fn stop_agent(
    controller: &State<AgentController>,
) -> Result<Json<MessageResponse>, BadRequest<Json<ErrorDetail>>> {
    handlers::stop_agent_handler(controller).await
}

#[get("/agent/status")]
pub async fn agent_status(controller: &State<AgentController>) -> Json<AgentStatusResponse> {
    handlers::agent_status_handler(controller).await
}

#[post("/api/linkedin/credentials", data = "<request>")]
pub async fn set_credentials(
    request: Json<Credentials>,
    credentials: &State<CredentialsStore>,
) -> Result<Json<MessageResponse>, Custom<Json<ErrorDetail>>> {
    handlers::set_credentials_handler(request, credentials).await
}

#[get("/api/linkedin/credentials/status")]
pub async fn credentials_status(
    credentials: &State<CredentialsStore>,
) -> Json<CredentialsStatusResponse> {
    handlers::credentials_status_handler(credentials).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorDetail> {
    Json(ErrorDetail::new("Not Found"))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorDetail> {
    Json(ErrorDetail::new("Internal server error"))
}

/// Build the Rocket instance with stores and the agent controller managed as
/// shared state. Split out from the launch path so tests can drive it with a
/// local client.
pub fn rocket(config: &AppConfig) -> Result<Rocket<Build>> {
    let jobs = JobStore::new(config.jobs_path());
    let credentials = CredentialsStore::new(config.credentials_path());
    let controller = AgentController::new(config, jobs.clone(), credentials.clone())?;

    Ok(rocket::build()
        .attach(Cors)
        .manage(jobs)
        .manage(credentials)
        .manage(controller)
        .register("/", catchers![not_found, internal_error])
        .mount(
            "/",
            routes![
                index,
                get_jobs,
                start_agent,
                stop_agent,
                agent_status,
                set_credentials,
                credentials_status,
                options,
            ],
        ))
}

// Main server start function
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    config.ensure_directories().await?;

    info!("Starting LinkedIn Job Crawler API server");
    info!("Jobs file: {}", config.jobs_path().display());
    info!("Credentials file: {}", config.credentials_path().display());

    let _rocket = rocket(&config)?.launch().await?;

    Ok(())
}
