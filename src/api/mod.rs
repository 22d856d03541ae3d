//! Task Service Bindings
//!
//! The `TodoApi` trait is the seam between the controller and the network;
//! `HttpTodoApi` talks to the JSON service over fetch.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Task, TaskId};

pub use http::HttpTodoApi;

/// Failure talking to the task service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network unreachable or a response body that could not be decoded
    #[error("transport error: {0}")]
    Transport(String),
    /// Non-2xx status
    #[error("server responded with status {status}")]
    Server { status: u16 },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Transport(format!("malformed response body: {err}"))
    }
}

#[async_trait(?Send)]
pub trait TodoApi {
    /// GET /todos
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;
    /// POST /todos
    async fn create_task(&self, title: &str) -> Result<Task, ApiError>;
    /// DELETE /todos/{id}
    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError>;
}
