//! Task Tree App
//!
//! Root component: loads tasks from the store, builds the forest, renders
//! the tree with the creation form and toast stack.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NewTaskForm, TaskTreeView, ToastStack};
use crate::context::{AppContext, Toast, ERROR_LOADING_TASKS};
use crate::graphql;
use crate::models::Task;
use crate::tree::build_forest;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (editing_task, set_editing_task) = signal::<Option<u32>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());
    let (toast_serial, set_toast_serial) = signal(0u32);

    let ctx = AppContext::new(
        (reload_trigger, set_reload_trigger),
        (toasts, set_toasts),
        (toast_serial, set_toast_serial),
    );

    // Provide context to all children
    provide_context(ctx);

    // Load tasks on mount and after every mutation
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match graphql::tasks().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} tasks, trigger={}", loaded.len(), trigger)
                            .into(),
                    );
                    set_tasks.set(loaded);
                }
                Err(err) => ctx.report_error(ERROR_LOADING_TASKS, &err),
            }
        });
    });

    // The builder works on its own copy of the task list
    let forest = Memo::new(move |_| build_forest(&tasks.get()));

    // Tasks whose parent chain doesn't resolve stay out of the tree;
    // say so instead of dropping them silently
    Effect::new(move |_| {
        let unresolved = forest.with(|f| f.unresolved.clone());
        if !unresolved.is_empty() {
            web_sys::console::warn_1(
                &format!(
                    "[TREE] {} task(s) with unresolvable parents omitted: {:?}",
                    unresolved.len(),
                    unresolved
                )
                .into(),
            );
        }
    });

    view! {
        <div class="home">
            <div class="home-container">
                <h1>"My Tasks"</h1>

                <TaskTreeView
                    forest=forest
                    editing_task=editing_task
                    set_editing_task=set_editing_task
                />

                <NewTaskForm />
            </div>

            <ToastStack />
        </div>
    }
}
