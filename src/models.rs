//! Frontend Models
//!
//! Data structures matching the GraphQL task schema.

use serde::{Deserialize, Serialize};

/// Task as delivered by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<f64>,
    /// None = root-level task
    #[serde(default)]
    pub parent_task_id: Option<u32>,
    /// Denormalized parent reference; the tree builder never reads it
    #[serde(default)]
    pub parent_task: Option<Box<Task>>,
    pub completed: bool,
}

/// Task plus its ordered children, built per render pass; never persisted
#[derive(Debug, Clone, PartialEq)]
pub struct TaskTreeNode {
    pub task: Task,
    pub children: Vec<TaskTreeNode>,
}
