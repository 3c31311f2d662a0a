//! Application Context
//!
//! Shared state provided via Leptos Context API, plus the mutation gateway
//! wrapping every store call with the reload-or-toast protocol.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::graphql::{self, CreateTaskInput, UpdateTaskInput};

/// Fixed user-facing messages, one per operation
pub const ERROR_LOADING_TASKS: &str = "Error loading tasks";
pub const ERROR_CREATING_TASK: &str = "Error creating task";
pub const ERROR_UPDATING_TASK: &str = "Error updating task";
pub const ERROR_DELETING_TASK: &str = "Error deleting task";

/// How long a toast stays up
const TOAST_DISMISS_MS: u32 = 4000;

/// A transient user-visible notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload tasks from the store - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from the store - write
    set_reload_trigger: WriteSignal<u32>,
    /// Active toasts - read
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    toast_serial: ReadSignal<u32>,
    set_toast_serial: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>),
        toast_serial: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            toasts: toasts.0,
            set_toasts: toasts.1,
            toast_serial: toast_serial.0,
            set_toast_serial: toast_serial.1,
        }
    }

    /// Trigger a full reload of the task list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a toast, auto-dismissed after a few seconds
    pub fn push_toast(&self, message: &str) {
        let id = self.toast_serial.get_untracked() + 1;
        self.set_toast_serial.set(id);
        self.set_toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.to_string(),
            })
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    /// Toast the operation's fixed message and log the underlying error
    pub fn report_error(&self, message: &'static str, detail: &str) {
        web_sys::console::error_1(&format!("[GQL] {}: {}", message, detail).into());
        self.push_toast(message);
    }

    // ========================
    // Mutation Gateway
    // ========================
    //
    // Uniform protocol: success reloads the task list, failure surfaces the
    // operation's fixed message and leaves the UI as it was. No retries.

    /// Create a task. Returns whether it succeeded so the caller can
    /// sequence its form reset.
    pub async fn create_task(&self, input: &CreateTaskInput<'_>) -> bool {
        match graphql::create_task(input).await {
            Ok(_) => {
                self.reload();
                true
            }
            Err(err) => {
                self.report_error(ERROR_CREATING_TASK, &err);
                false
            }
        }
    }

    /// Partially update a task (title, completion, parent)
    pub async fn update_task(&self, id: u32, input: &UpdateTaskInput<'_>) -> bool {
        match graphql::update_task(id, input).await {
            Ok(_) => {
                self.reload();
                true
            }
            Err(err) => {
                self.report_error(ERROR_UPDATING_TASK, &err);
                false
            }
        }
    }

    /// Delete a task by id. Orphaned children drop out of the rendered
    /// tree on the next reload.
    pub async fn delete_task(&self, id: u32) -> bool {
        match graphql::delete_task(id).await {
            Ok(()) => {
                self.reload();
                true
            }
            Err(err) => {
                self.report_error(ERROR_DELETING_TASK, &err);
                false
            }
        }
    }
}
