// src/agent/crawler.rs
use super::client::LinkedInClient;
use super::filter::has_visa_sponsorship;
use super::types::JobDetail;
use super::CrawledJob;
use crate::config::{AppConfig, SearchConfig};
use crate::store::Credentials;
use anyhow::Result;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// One search-then-detail-then-filter pass over the upstream API.
#[derive(Debug, Clone)]
pub struct Crawler {
    client: LinkedInClient,
    search: SearchConfig,
}

/// What a single cycle produced: the visa-flagged postings plus how many
/// listings were examined (for the status counters).
#[derive(Debug, Default)]
pub struct CycleOutcome {
    pub found: Vec<CrawledJob>,
    pub searched: usize,
}

impl Crawler {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: LinkedInClient::new(config.proxy_url.clone())?,
            search: config.search.clone(),
        })
    }

    /// Run one crawl cycle. Upstream failures have already been downgraded to
    /// empty results by the client, so a cycle itself cannot fail; dedup
    /// against the store is the store's responsibility, not done here.
    pub async fn run_cycle(&self, credentials: &Credentials) -> CycleOutcome {
        info!(
            "Searching for {} jobs in {}",
            self.search.keywords, self.search.location
        );

        let summaries = self
            .client
            .search_jobs(
                credentials,
                &self.search.keywords,
                &self.search.location,
                self.search.limit,
            )
            .await;

        if summaries.is_empty() {
            info!("No job listings found");
            return CycleOutcome::default();
        }

        info!("Found {} job listings", summaries.len());

        let mut outcome = CycleOutcome::default();
        for summary in summaries {
            let Some(job_id) = summary.job_id else {
                continue;
            };
            outcome.searched += 1;

            let Some(detail) = self.client.get_job_details(credentials, &job_id).await else {
                continue;
            };

            let Some(job) = build_job(detail) else {
                continue;
            };

            info!(
                "Found job with visa sponsorship: {} at {}",
                job.title, job.company
            );
            outcome.found.push(job);
        }

        info!("Found {} jobs with visa sponsorship", outcome.found.len());
        outcome
    }
}

/// Filter one fetched detail and shape it for insertion.
///
/// `None` when the description carries no sponsorship signal; an absent
/// description counts as empty and is excluded. A detail without an id falls
/// back to a fresh UUID, a detail without a posting date to now.
fn build_job(detail: JobDetail) -> Option<CrawledJob> {
    let description = detail.description.unwrap_or_default();
    if !has_visa_sponsorship(&description) {
        return None;
    }

    Some(CrawledJob {
        id: detail
            .job_id
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        title: detail.title.unwrap_or_default(),
        company: detail.company_name.unwrap_or_default(),
        location: detail.location.unwrap_or_default(),
        description,
        url: detail.url.unwrap_or_default(),
        date_posted: detail.posted_at.unwrap_or_else(|| Utc::now().to_rfc3339()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_description_is_excluded() {
        let detail = JobDetail {
            job_id: Some("1".to_string()),
            title: Some("Engineer".to_string()),
            ..JobDetail::default()
        };
        assert!(build_job(detail).is_none());
    }

    #[test]
    fn test_sponsoring_description_is_included() {
        let detail = JobDetail {
            job_id: Some("1".to_string()),
            title: Some("Engineer".to_string()),
            company_name: Some("Acme".to_string()),
            description: Some("We offer H1B visa sponsorship".to_string()),
            ..JobDetail::default()
        };

        let job = build_job(detail).expect("sponsoring job kept");
        assert_eq!(job.id, "1");
        assert_eq!(job.company, "Acme");
        assert_eq!(job.description, "We offer H1B visa sponsorship");
    }

    #[test]
    fn test_missing_id_falls_back_to_uuid() {
        let detail = JobDetail {
            description: Some("visa sponsorship available".to_string()),
            ..JobDetail::default()
        };

        let job = build_job(detail).unwrap();
        assert!(!job.id.is_empty());
        assert!(Uuid::parse_str(&job.id).is_ok());
    }

    #[tokio::test]
    async fn test_cycle_without_credentials_is_empty() {
        let config = AppConfig {
            proxy_url: "http://127.0.0.1:9".to_string(),
            data_dir: std::env::temp_dir(),
            search: SearchConfig::default(),
            crawl_interval: std::time::Duration::from_secs(300),
        };
        let crawler = Crawler::new(&config).unwrap();

        let outcome = crawler.run_cycle(&Credentials::default()).await;
        assert!(outcome.found.is_empty());
        assert_eq!(outcome.searched, 0);
    }
}
