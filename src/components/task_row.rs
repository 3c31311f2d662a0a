//! Task Row Component
//!
//! A single task row: completion toggle, inline title editing, delete, and
//! drag-and-drop wiring. Every row is both a drag source and a drop target.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use leptos_dragdrop::{
    make_on_dragend, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop,
    DndSignals,
};

use crate::context::AppContext;
use crate::graphql::UpdateTaskInput;
use crate::models::Task;

/// A single task row in the tree
#[component]
pub fn TaskRow(
    task: Task,
    editing_task: ReadSignal<Option<u32>>,
    set_editing_task: WriteSignal<Option<u32>>,
    dnd: DndSignals,
) -> impl IntoView {
    // Get context from parent
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let completed = task.completed;
    let display_title = task.title.clone();

    // Pending edit text while this row is in edit mode
    let (draft, set_draft) = signal(String::new());
    let is_editing = move || editing_task.get() == Some(id);

    let begin_edit = {
        let title = task.title.clone();
        Callback::new(move |_: ()| {
            set_draft.set(title.clone());
            set_editing_task.set(Some(id));
        })
    };

    let commit_edit = Callback::new(move |_: ()| {
        let new_title = draft.get();
        spawn_local(async move {
            let input = UpdateTaskInput {
                title: Some(&new_title),
                ..Default::default()
            };
            let _ = ctx.update_task(id, &input).await;
            set_editing_task.set(None);
        });
    });

    let cancel_edit = Callback::new(move |_: ()| {
        set_editing_task.set(None);
    });

    let toggle_completed = move |_| {
        spawn_local(async move {
            let input = UpdateTaskInput {
                completed: Some(!completed),
                ..Default::default()
            };
            let _ = ctx.update_task(id, &input).await;
        });
    };

    // Immediate, no confirmation; orphaned children fall out on reload
    let delete = move |_| {
        spawn_local(async move {
            let _ = ctx.delete_task(id).await;
        });
    };

    // DnD handlers
    let on_dragstart = make_on_dragstart(dnd, id);
    let on_dragover = make_on_dragover(dnd, id);
    let on_dragleave = make_on_dragleave(dnd);
    let on_dragend = make_on_dragend(dnd);
    let on_drop = make_on_drop(dnd, id, move |source_id, target_id| {
        spawn_local(async move {
            web_sys::console::log_1(
                &format!("[DND] Reparent {} under {}", source_id, target_id).into(),
            );
            let input = UpdateTaskInput {
                parent_task_id: Some(target_id),
                ..Default::default()
            };
            let _ = ctx.update_task(source_id, &input).await;
        });
    });

    // Focus the edit input once it is mounted
    let input_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if is_editing() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let row_class = move || {
        let mut c = String::from("task-row");
        if completed {
            c.push_str(" completed");
        }
        if dnd.dragging_id_read.get() == Some(id) {
            c.push_str(" dragging");
        }
        if dnd.hover_target_read.get() == Some(id) {
            c.push_str(" drop-target");
        }
        c
    };

    view! {
        <div
            class=row_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:dragend=on_dragend
            on:drop=on_drop
        >
            // Completion toggle
            <button
                class=move || if completed { "check-btn active" } else { "check-btn" }
                on:click=toggle_completed
            >
                "✓"
            </button>

            // Title: plain text, or the edit input while editing
            <div class="title">
                {move || if is_editing() {
                    view! {
                        <input
                            type="text"
                            class="title-input"
                            placeholder="Task title"
                            node_ref=input_ref
                            prop:value=move || draft.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_draft.set(input.value());
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    commit_edit.run(());
                                } else if ev.key() == "Escape" {
                                    cancel_edit.run(());
                                }
                            }
                        />
                    }.into_any()
                } else {
                    let title = display_title.clone();
                    view! {
                        <span
                            class="task-title"
                            title=title.clone()
                            on:click=move |_| begin_edit.run(())
                        >
                            {title.clone()}
                        </span>
                    }.into_any()
                }}
            </div>

            // Edit controls: confirm/cancel while editing, else enter edit
            {move || if is_editing() {
                view! {
                    <span class="edit-controls">
                        <button class="ok-btn" on:click=move |_| commit_edit.run(())>"✔"</button>
                        <button class="cancel-btn" on:click=move |_| cancel_edit.run(())>"✗"</button>
                    </span>
                }.into_any()
            } else {
                view! {
                    <button class="edit-btn" on:click=move |_| begin_edit.run(())>"✎"</button>
                }.into_any()
            }}

            // Delete button
            <button class="delete-btn" on:click=delete>"×"</button>
        </div>
    }
}
