use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{expense_path, Expense, ExpenseDraft, ExpenseId, EXPENSES_PATH};
use thiserror::Error;

use crate::config::ClientConfig;

/// Why a request against the expense API failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

/// The remote expense collection
#[async_trait(?Send)]
pub trait ExpenseApi {
    /// GET /api/expenses
    async fn list(&self) -> Result<Vec<Expense>, ApiError>;

    /// POST /api/expenses
    async fn create(&self, draft: &ExpenseDraft) -> Result<Expense, ApiError>;

    /// PUT /api/expenses/{id}
    async fn update(&self, id: &ExpenseId, draft: &ExpenseDraft) -> Result<Expense, ApiError>;

    /// DELETE /api/expenses/{id}
    async fn delete(&self, id: &ExpenseId) -> Result<(), ApiError>;
}

/// API client for communicating with the expense server
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl ExpenseApi for ApiClient {
    async fn list(&self) -> Result<Vec<Expense>, ApiError> {
        let url = self.url(EXPENSES_PATH);

        match Request::get(&url).send().await {
            Ok(response) => read_json(check_status(response).await?).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    async fn create(&self, draft: &ExpenseDraft) -> Result<Expense, ApiError> {
        let url = self.url(EXPENSES_PATH);
        let request = Request::post(&url)
            .json(&draft.to_payload())
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        match request.send().await {
            Ok(response) => read_json(check_status(response).await?).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    async fn update(&self, id: &ExpenseId, draft: &ExpenseDraft) -> Result<Expense, ApiError> {
        let url = self.url(&expense_path(id));
        let request = Request::put(&url)
            .json(&draft.to_payload())
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        match request.send().await {
            Ok(response) => read_json(check_status(response).await?).await,
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), ApiError> {
        let url = self.url(&expense_path(id));

        // The acknowledgement body, if any, carries nothing we use
        match Request::delete(&url).send().await {
            Ok(response) => check_status(response).await.map(|_| ()),
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }
}

/// Turn any non-2xx response into `ApiError::Rejected`
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ApiError::Rejected { status, body })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("{} (body: {})", e, body)))
}
