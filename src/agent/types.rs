// src/agent/types.rs
use serde::Deserialize;

// Wire format of the MCP-LinkedIn proxy: every endpoint wraps its payload
// in a {"data": ...} envelope with camelCase field names.

#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    #[serde(default)]
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_envelope() {
        let body = r#"{"data": [{"jobId": "123"}, {"title": "no id here"}]}"#;
        let envelope: DataEnvelope<Vec<JobSummary>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].job_id.as_deref(), Some("123"));
        assert_eq!(envelope.data[1].job_id, None);
    }

    #[test]
    fn test_parse_detail_with_missing_fields() {
        let body = r#"{"data": {"jobId": "42", "title": "Engineer", "companyName": "Acme"}}"#;
        let envelope: DataEnvelope<JobDetail> = serde_json::from_str(body).unwrap();
        let detail = envelope.data;
        assert_eq!(detail.job_id.as_deref(), Some("42"));
        assert_eq!(detail.company_name.as_deref(), Some("Acme"));
        assert_eq!(detail.description, None);
        assert_eq!(detail.posted_at, None);
    }
}
