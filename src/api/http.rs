//! HTTP Task Service Client

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde_json::Value;

use super::{ApiError, TodoApi};
use crate::config::AppConfig;
use crate::models::{CreateTaskArgs, Task, TaskId};

#[derive(Clone, Debug)]
pub struct HttpTodoApi {
    client: Client,
    /// Collection URL, e.g. `https://example.com/todos`
    endpoint: String,
}

impl HttpTodoApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.todos_endpoint(),
        }
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/{}", self.endpoint, id)
    }
}

/// Turn a non-2xx status into `ApiError::Server`
fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Server {
            status: status.as_u16(),
        })
    }
}

/// Decode a list body; anything other than a JSON array is an error
fn decode_task_list(body: &str) -> Result<Vec<Task>, ApiError> {
    match serde_json::from_str::<Value>(body)? {
        value @ Value::Array(_) => Ok(serde_json::from_value(value)?),
        other => Err(ApiError::Transport(format!(
            "expected a JSON array of tasks, got {}",
            json_kind(&other)
        ))),
    }
}

fn decode_task(body: &str) -> Result<Task, ApiError> {
    Ok(serde_json::from_str(body)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        debug!("GET {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        let body = ensure_success(response)?.text().await?;
        decode_task_list(&body)
    }

    async fn create_task(&self, title: &str) -> Result<Task, ApiError> {
        debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&CreateTaskArgs { title })
            .send()
            .await?;
        let body = ensure_success(response)?.text().await?;
        decode_task(&body)
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        let url = self.task_url(id);
        debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}
