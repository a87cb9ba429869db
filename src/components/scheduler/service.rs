use super::models::{GenerateRequest, GenerateResponse, ScheduleItem};
use crate::error::{scheduler_error, PlannerResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Path of the schedule generation endpoint
pub const GENERATE_PATH: &str = "generate";

/// Something that turns commitments, tasks and preferences into a schedule
#[async_trait]
pub trait ScheduleService: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> PlannerResult<Vec<ScheduleItem>>;
}

/// Scheduling service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpScheduleService {
    client: Client,
    endpoint: Url,
}

impl HttpScheduleService {
    /// Client for the service rooted at `base_url`
    pub fn new(base_url: &Url) -> PlannerResult<Self> {
        Ok(Self {
            client: Client::new(),
            endpoint: generate_endpoint(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// `<base>/generate`, keeping any path prefix the base URL has
pub fn generate_endpoint(base_url: &Url) -> PlannerResult<Url> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(GENERATE_PATH)
        .map_err(|e| scheduler_error(&format!("Cannot build endpoint from {}: {}", base_url, e)))
}

#[async_trait]
impl ScheduleService for HttpScheduleService {
    async fn generate(&self, request: &GenerateRequest) -> PlannerResult<Vec<ScheduleItem>> {
        debug!(
            "Requesting schedule from {} ({} commitments, {} tasks)",
            self.endpoint,
            request.commitments.len(),
            request.tasks.len()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| scheduler_error(&format!("Request to {} failed: {}", self.endpoint, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(scheduler_error(&format!(
                "Scheduling service returned {}: {}",
                status, body
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| scheduler_error(&format!("Invalid schedule response: {}", e)))?;

        debug!("Received {} schedule items", body.schedule.len());
        Ok(body.schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_endpoint() {
        let base = Url::parse("http://localhost:5000").unwrap();
        assert_eq!(
            generate_endpoint(&base).unwrap().as_str(),
            "http://localhost:5000/generate"
        );

        let base = Url::parse("https://example.org/planner").unwrap();
        assert_eq!(
            generate_endpoint(&base).unwrap().as_str(),
            "https://example.org/planner/generate"
        );

        let base = Url::parse("https://example.org/planner/").unwrap();
        assert_eq!(
            generate_endpoint(&base).unwrap().as_str(),
            "https://example.org/planner/generate"
        );
    }
}
