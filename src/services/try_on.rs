use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when talking to the try-on vendor
#[derive(Debug, Error)]
pub enum TryOnError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid try-on API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Garment category understood by the vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TryOnCategory {
    Tops,
    Bottoms,
    OnePieces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TryOnStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Try-on task as reported by the vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryOnTask {
    pub task_id: String,
    pub status: TryOnStatus,
    #[serde(default)]
    pub result_image_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTaskBody<'a> {
    model_image_url: &'a str,
    garment_image_url: &'a str,
    category: TryOnCategory,
    client_reference: Uuid,
}

/// Virtual try-on vendor client
///
/// One call to create a task, one to read its status. The client never polls
/// and never retries; callers check status when the user asks.
pub struct TryOnClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl TryOnClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, TryOnError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Start a try-on task
    pub async fn create_task(
        &self,
        model_image_url: &str,
        garment_image_url: &str,
        category: TryOnCategory,
    ) -> Result<TryOnTask, TryOnError> {
        let body = CreateTaskBody {
            model_image_url,
            garment_image_url,
            category,
            client_reference: Uuid::new_v4(),
        };

        tracing::debug!("Creating try-on task ({:?}, ref {})", category, body.client_reference);

        let response = self
            .client
            .post(self.url("tasks"))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_task(response, "create try-on task").await
    }

    /// Read the current status of a task
    pub async fn get_task(&self, task_id: &str) -> Result<TryOnTask, TryOnError> {
        let url = self.url(&format!("tasks/{}", urlencoding::encode(task_id)));

        tracing::debug!("Fetching try-on task: {}", task_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        // Only a task lookup can be missing; a 404 elsewhere is a vendor fault
        if response.status() == StatusCode::NOT_FOUND {
            return Err(TryOnError::NotFound(format!("Try-on task {} not found", task_id)));
        }

        Self::parse_task(response, "fetch try-on task").await
    }

    async fn parse_task(response: reqwest::Response, action: &str) -> Result<TryOnTask, TryOnError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TryOnError::Unauthorized);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to {}: {} - {}", action, status, body);
            return Err(TryOnError::ApiError(format!("Failed to {}: {}", action, status)));
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| TryOnError::InvalidResponse(format!("Failed to parse try-on task: {}", e)))
    }
}
