//! UI Components
//!
//! Reusable Leptos components.

mod new_task_form;
mod task_row;
mod task_tree_view;
mod toast;

pub use new_task_form::NewTaskForm;
pub use task_row::TaskRow;
pub use task_tree_view::TaskTreeView;
pub use toast::ToastStack;
