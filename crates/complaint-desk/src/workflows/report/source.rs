use super::domain::ComplaintRecord;
use crate::config::ReportSourceConfig;
use crate::session::Session;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("complaint source unreachable: {0}")]
    Transport(String),
    #[error("complaint source answered with HTTP {status}")]
    Status { status: u16 },
    #[error("complaint payload could not be decoded: {0}")]
    Decode(String),
}

/// Anything able to list the complaints visible to a session.
pub trait ComplaintSource: Send + Sync {
    fn fetch_complaints(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<Vec<ComplaintRecord>, SourceError>> + Send;
}

/// Decodes a listing payload. A payload that is not a JSON array is logged and
/// read as an empty listing; entries that cannot be decoded are logged and
/// skipped.
pub fn decode_listing(payload: Value) -> Result<Vec<ComplaintRecord>, SourceError> {
    match payload {
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(index, error = %err, "skipping undecodable complaint entry");
                    None
                }
            })
            .collect()),
        other => {
            warn!(payload = %other, "complaint listing is not an array; treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Reads the listing from the complaint report endpoint.
#[derive(Debug, Clone)]
pub struct HttpComplaintSource {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpComplaintSource {
    pub fn new(config: &ReportSourceConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ComplaintSource for HttpComplaintSource {
    async fn fetch_complaints(
        &self,
        session: &Session,
    ) -> Result<Vec<ComplaintRecord>, SourceError> {
        debug!(endpoint = %self.endpoint, user = %session.username, "fetching complaint listing");

        let response = self
            .http
            .get(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::AUTHORIZATION, session.authorization())
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| SourceError::Decode(err.to_string()))?;

        decode_listing(payload)
    }
}

/// Fixed listing, used by tests and offline demos.
#[derive(Debug, Clone, Default)]
pub struct StaticComplaintSource {
    records: Vec<ComplaintRecord>,
}

impl StaticComplaintSource {
    pub fn new(records: Vec<ComplaintRecord>) -> Self {
        Self { records }
    }
}

impl ComplaintSource for StaticComplaintSource {
    async fn fetch_complaints(
        &self,
        _session: &Session,
    ) -> Result<Vec<ComplaintRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_array_payload_reads_as_empty() {
        let records = decode_listing(json!({ "detail": "no complaints" })).expect("soft failure");
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_entry_is_skipped() {
        let records = decode_listing(json!([
            { "id": "x" },
            {
                "id": 9,
                "complaint_type": "Carpenter",
                "location": "Hall-4",
                "details": null,
                "status": 2,
                "complaint_date": "2024-05-01"
            }
        ]))
        .expect("listing decodes");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 9);
        assert!(records[0].details.is_empty());
    }
}
