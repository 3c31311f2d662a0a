//! Toast Stack Component
//!
//! Transient error notifications, newest last. Dismissal is handled by the
//! context that pushed the toast.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = ctx.toasts;

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! { <div class="toast">{toast.message}</div> }
                }
            />
        </div>
    }
}
