//! Frontend Models
//!
//! Data structures matching the task service's JSON records.

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier
pub type TaskId = u32;

/// Task record (matches the service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }
}

/// Body of a create request
#[derive(Debug, Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
}
