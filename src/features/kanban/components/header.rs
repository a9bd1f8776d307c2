use leptos::prelude::*;
use crate::core::config::Labels;

#[component]
pub fn KanbanHeader(labels: Labels, on_toggle_form: Callback<()>) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <div class="kanban-header-left">
                <h1>{labels.title}</h1>
                <p>{labels.subtitle}</p>
            </div>
            <div class="kanban-actions">
                <button class="btn-primary kanban-header-btn" on:click=move |_| on_toggle_form.run(())>
                    {labels.new_task}
                </button>
            </div>
        </header>
    }
}
