//! New Task Form Component
//!
//! Creation form: a title input and an Add button. The form only resets
//! after the store confirms the create; on failure it is left untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::graphql::CreateTaskInput;

/// Form for creating new root-level tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            let input = CreateTaskInput {
                title: &text,
                description: None,
                estimated_time: None,
                parent_task_id: None,
            };
            if ctx.create_task(&input).await {
                set_title.set(String::new());
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <button type="submit">"Add"</button>
            <input
                type="text"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
        </form>
    }
}
