//! Task Operations
//!
//! Query and mutation wrappers for the `tasks` schema.

use serde::{Deserialize, Serialize};

use super::execute;
use crate::models::Task;

// ========================
// Operation Documents
// ========================

const TASKS: &str =
    "query Tasks { tasks { id title description estimated_time parent_task_id completed } }";

const CREATE_TASK: &str = "mutation CreateTask($input: CreateTaskInput!) { createTask(input: $input) { id title description estimated_time parent_task_id completed } }";

const UPDATE_TASK: &str = "mutation UpdateTask($id: Int!, $input: UpdateTaskInput!) { updateTask(id: $id, input: $input) { id title description estimated_time parent_task_id completed } }";

const DELETE_TASK: &str = "mutation DeleteTask($id: Int!) { deleteTask(id: $id) }";

// ========================
// Argument Structs
// ========================

#[derive(Debug, Serialize)]
pub struct CreateTaskInput<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_task_id: Option<u32>,
}

/// Partial update; unset fields stay untouched server-side
#[derive(Debug, Default, Serialize)]
pub struct UpdateTaskInput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_task_id: Option<u32>,
}

#[derive(Serialize)]
struct InputVars<'a, T> {
    input: &'a T,
}

#[derive(Serialize)]
struct IdVars {
    id: u32,
}

#[derive(Serialize)]
struct IdInputVars<'a, T> {
    id: u32,
    input: &'a T,
}

// ========================
// Response Shapes
// ========================

#[derive(Deserialize)]
struct TasksData {
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct CreateTaskData {
    #[serde(rename = "createTask")]
    create_task: Task,
}

#[derive(Deserialize)]
struct UpdateTaskData {
    #[serde(rename = "updateTask")]
    update_task: Task,
}

// ========================
// Operations
// ========================

pub async fn tasks() -> Result<Vec<Task>, String> {
    let data: TasksData = execute(TASKS, ()).await?;
    Ok(data.tasks)
}

pub async fn create_task(input: &CreateTaskInput<'_>) -> Result<Task, String> {
    let data: CreateTaskData = execute(CREATE_TASK, InputVars { input }).await?;
    Ok(data.create_task)
}

pub async fn update_task(id: u32, input: &UpdateTaskInput<'_>) -> Result<Task, String> {
    let data: UpdateTaskData = execute(UPDATE_TASK, IdInputVars { id, input }).await?;
    Ok(data.update_task)
}

pub async fn delete_task(id: u32) -> Result<(), String> {
    // Acknowledgement shape is up to the server; success is all we need
    let _: serde_json::Value = execute(DELETE_TASK, IdVars { id }).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reparent_drop_sends_only_parent_task_id() {
        let input = UpdateTaskInput {
            parent_task_id: Some(2),
            ..Default::default()
        };
        let vars = IdInputVars { id: 5, input: &input };
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({"id": 5, "input": {"parent_task_id": 2}})
        );
    }

    #[test]
    fn title_edit_sends_only_title() {
        let input = UpdateTaskInput {
            title: Some("Buy bread"),
            ..Default::default()
        };
        let vars = IdInputVars { id: 1, input: &input };
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({"id": 1, "input": {"title": "Buy bread"}})
        );
    }

    #[test]
    fn completion_toggle_sends_only_completed() {
        let input = UpdateTaskInput {
            completed: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"completed": true})
        );
    }

    #[test]
    fn create_input_omits_unset_fields() {
        let input = CreateTaskInput {
            title: "Buy milk",
            description: None,
            estimated_time: None,
            parent_task_id: None,
        };
        assert_eq!(
            serde_json::to_value(&InputVars { input: &input }).unwrap(),
            json!({"input": {"title": "Buy milk"}})
        );
    }

    #[test]
    fn tasks_payload_deserializes_with_sparse_fields() {
        let data: TasksData = serde_json::from_value(json!({
            "tasks": [
                {"id": 1, "title": "Root", "completed": false},
                {
                    "id": 2,
                    "title": "Child",
                    "description": "with details",
                    "estimated_time": 1.5,
                    "parent_task_id": 1,
                    "completed": true
                }
            ]
        }))
        .unwrap();

        assert_eq!(data.tasks.len(), 2);
        assert_eq!(data.tasks[0].parent_task_id, None);
        assert_eq!(data.tasks[1].parent_task_id, Some(1));
        assert_eq!(data.tasks[1].estimated_time, Some(1.5));
        assert!(data.tasks[1].completed);
    }
}
