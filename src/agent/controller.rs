// src/agent/controller.rs
use super::crawler::Crawler;
use super::{AgentState, AgentStatus};
use crate::config::AppConfig;
use crate::store::{CredentialsStore, JobStore};
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::Notify;
use tracing::{error, info};

/// Controller for the background crawl loop.
///
/// All lifecycle state lives behind one mutex inside this controller and is
/// only touched through its methods; request handlers and the loop task share
/// the controller by cloning it. Cancellation is cooperative: `stop()` sets a
/// flag and wakes the sleeper, and the loop observes it at cycle boundaries
/// only. An in-flight HTTP call is never interrupted and may complete after a
/// stop request.
#[derive(Debug, Clone)]
pub struct AgentController {
    inner: Arc<Mutex<AgentInner>>,
    crawler: Crawler,
    jobs: JobStore,
    credentials: CredentialsStore,
    interval: Duration,
}

#[derive(Debug)]
struct AgentInner {
    state: AgentState,
    last_job_count: usize,
    total_jobs_searched: usize,
    start_time: Option<DateTime<Utc>>,
    cancelled: bool,
    notify: Arc<Notify>,
}

impl AgentController {
    pub fn new(config: &AppConfig, jobs: JobStore, credentials: CredentialsStore) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(Mutex::new(AgentInner {
                state: AgentState::Stopped,
                last_job_count: 0,
                total_jobs_searched: 0,
                start_time: None,
                cancelled: false,
                notify: Arc::new(Notify::new()),
            })),
            crawler: Crawler::new(config)?,
            jobs,
            credentials,
            interval: config.crawl_interval,
        })
    }

    /// Launch the background loop and return immediately.
    ///
    /// Allowed from `Stopped` and from `Error` (an errored loop does not
    /// auto-restart; this is the external restart path).
    pub fn start(&self) -> Result<()> {
        {
            let mut inner = self.lock();
            if inner.state.is_active() {
                anyhow::bail!("Agent is already running");
            }
            inner.state = AgentState::Running;
            inner.start_time = Some(Utc::now());
            inner.total_jobs_searched = 0;
            inner.cancelled = false;
            // Fresh signal: a wakeup stored by a stop request that raced a
            // previous run cannot leak into this one.
            inner.notify = Arc::new(Notify::new());
        }

        let worker = self.clone();
        tokio::spawn(async move { worker.run_loop().await });
        info!("Agent started");
        Ok(())
    }

    /// Signal the loop to stop and return immediately; does not wait for the
    /// loop to exit.
    pub fn stop(&self) -> Result<()> {
        let mut inner = self.lock();
        if !inner.state.is_active() {
            anyhow::bail!("Agent is not running");
        }
        inner.cancelled = true;
        let notify = inner.notify.clone();
        drop(inner);

        notify.notify_one();
        info!("Agent stop requested");
        Ok(())
    }

    pub fn status(&self) -> AgentStatus {
        let inner = self.lock();
        let running_time = match inner.start_time {
            Some(start) if inner.state.is_active() => Some(format_running_time(start)),
            _ => None,
        };

        AgentStatus {
            state: inner.state.clone(),
            job_count: inner.last_job_count,
            total_jobs_searched: inner.total_jobs_searched,
            running_time,
            start_time: inner.start_time,
        }
    }

    async fn run_loop(&self) {
        info!("Agent loop started");

        loop {
            if self.is_cancelled() {
                break;
            }

            self.set_state(AgentState::Searching);

            let existing = self.jobs.load().await;
            {
                let mut inner = self.lock();
                inner.last_job_count = existing.len();
            }

            let credentials = self.credentials.load().await;
            let outcome = self.crawler.run_cycle(&credentials).await;

            {
                let mut inner = self.lock();
                inner.total_jobs_searched += outcome.searched;
            }

            let (merged, inserted) = JobStore::merge(existing, outcome.found);
            if inserted > 0 {
                if let Err(e) = self.jobs.save(&merged).await {
                    error!("Agent loop failed: {:#}", e);
                    let mut inner = self.lock();
                    inner.state = AgentState::Error(format!("{:#}", e));
                    inner.start_time = None;
                    return;
                }
                info!(
                    "Inserted {} new job records ({} total)",
                    inserted,
                    merged.len()
                );
            }

            {
                let mut inner = self.lock();
                inner.last_job_count = merged.len();
            }

            self.set_state(AgentState::Waiting);
            let notify = self.lock().notify.clone();
            tokio::select! {
                _ = notify.notified() => {}
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        let mut inner = self.lock();
        inner.state = AgentState::Stopped;
        inner.start_time = None;
        info!("Agent loop stopped");
    }

    fn set_state(&self, state: AgentState) {
        self.lock().state = state;
    }

    fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    fn lock(&self) -> MutexGuard<'_, AgentInner> {
        self.inner.lock().expect("agent state lock poisoned")
    }
}

fn format_running_time(start: DateTime<Utc>) -> String {
    let secs = (Utc::now() - start).num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
