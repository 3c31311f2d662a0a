//! Task Tree View Component
//!
//! Depth-first render of the task forest: one row per task plus a nested
//! container for its children.

use leptos::prelude::*;

use leptos_dragdrop::{create_dnd_signals, DndSignals};

use crate::components::TaskRow;
use crate::models::TaskTreeNode;
use crate::tree::Forest;

/// Task tree view component with DnD support
#[component]
pub fn TaskTreeView(
    forest: Memo<Forest>,
    editing_task: ReadSignal<Option<u32>>,
    set_editing_task: WriteSignal<Option<u32>>,
) -> impl IntoView {
    // Drag state shared by every row in this tree
    let dnd = create_dnd_signals();

    view! {
        <div class="task-tree">
            {move || {
                forest
                    .get()
                    .roots
                    .into_iter()
                    .map(|node| render_subtree(node, editing_task, set_editing_task, dnd))
                    .collect_view()
            }}
        </div>
    }
}

/// One row plus the subtrees of its children, recursively
fn render_subtree(
    node: TaskTreeNode,
    editing_task: ReadSignal<Option<u32>>,
    set_editing_task: WriteSignal<Option<u32>>,
    dnd: DndSignals,
) -> AnyView {
    let children = node.children;
    view! {
        <div class="task-branch">
            <TaskRow
                task=node.task
                editing_task=editing_task
                set_editing_task=set_editing_task
                dnd=dnd
            />
            <div class="task-children">
                {children
                    .into_iter()
                    .map(|child| render_subtree(child, editing_task, set_editing_task, dnd))
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
