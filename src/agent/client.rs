// src/agent/client.rs
use super::types::{DataEnvelope, JobDetail, JobSummary};
use crate::store::Credentials;
use anyhow::{Context, Result};
use reqwest::Client;
use tracing::warn;

const EMAIL_HEADER: &str = "x-linkedin-email";
const PASSWORD_HEADER: &str = "x-linkedin-password";

/// Client for the MCP-LinkedIn proxy service.
///
/// Credentials are passed explicitly on every call and forwarded as request
/// headers, so a credential update never races an in-flight search. Failures
/// are non-fatal by contract: the public methods log and return an empty
/// result, and a crawl cycle treats that as "no jobs". No retries.
#[derive(Debug, Clone)]
pub struct LinkedInClient {
    client: Client,
    base_url: String,
}

impl LinkedInClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Search for jobs; empty on unset credentials or any upstream failure.
    pub async fn search_jobs(
        &self,
        credentials: &Credentials,
        keywords: &str,
        location: &str,
        limit: u32,
    ) -> Vec<JobSummary> {
        if !credentials.is_set() {
            warn!("LinkedIn credentials not set, skipping job search");
            return Vec::new();
        }

        match self
            .try_search(credentials, keywords, location, limit)
            .await
        {
            Ok(summaries) => summaries,
            Err(e) => {
                warn!("Job search failed: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Fetch one job's details; `None` on unset credentials or any failure.
    pub async fn get_job_details(
        &self,
        credentials: &Credentials,
        job_id: &str,
    ) -> Option<JobDetail> {
        if !credentials.is_set() {
            warn!("LinkedIn credentials not set, skipping job details");
            return None;
        }

        match self.try_details(credentials, job_id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!("Failed to get details for job {}: {:#}", job_id, e);
                None
            }
        }
    }

    async fn try_search(
        &self,
        credentials: &Credentials,
        keywords: &str,
        location: &str,
        limit: u32,
    ) -> Result<Vec<JobSummary>> {
        let url = format!("{}/api/v1/jobs/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .header(EMAIL_HEADER, &credentials.email)
            .header(PASSWORD_HEADER, &credentials.password)
            .query(&[
                ("keywords", keywords),
                ("location", location),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await
            .context("Failed to call job search endpoint")?;

        if !response.status().is_success() {
            anyhow::bail!("Job search returned HTTP {}", response.status());
        }

        let envelope: DataEnvelope<Vec<JobSummary>> = response
            .json()
            .await
            .context("Failed to parse job search response")?;

        Ok(envelope.data)
    }

    async fn try_details(&self, credentials: &Credentials, job_id: &str) -> Result<JobDetail> {
        let url = format!("{}/api/v1/jobs/{}", self.base_url, job_id);

        let response = self
            .client
            .get(&url)
            .header(EMAIL_HEADER, &credentials.email)
            .header(PASSWORD_HEADER, &credentials.password)
            .send()
            .await
            .context("Failed to call job details endpoint")?;

        if !response.status().is_success() {
            anyhow::bail!("Job details returned HTTP {}", response.status());
        }

        let envelope: DataEnvelope<JobDetail> = response
            .json()
            .await
            .context("Failed to parse job details response")?;

        Ok(envelope.data)
    }
}
