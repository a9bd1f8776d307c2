use leptos::prelude::*;
use crate::core::config::Labels;
use crate::core::models::{Task, TaskId, TaskStatus};

#[component]
pub fn TaskCard(
    task: Task,
    labels: Labels,
    on_delete: Callback<TaskId>,
    on_move: Callback<(TaskId, TaskStatus)>,
) -> impl IntoView {
    let id = task.id;
    // Finished tasks can only be deleted
    let actions = (task.status != TaskStatus::Done).then(|| view! {
        <div class="task-actions">
            <button class="btn-done" on:click=move |_| on_move.run((id, TaskStatus::Done))>
                {labels.complete}
            </button>
            <button class="btn-progress" on:click=move |_| on_move.run((id, TaskStatus::InProgress))>
                {labels.start}
            </button>
        </div>
    });

    view! {
        <div class="task-card">
            <h3>{task.title}</h3>
            <p>{task.description}</p>
            <button class="btn-delete" on:click=move |_| on_delete.run(id)>{labels.delete}</button>
            {actions}
        </div>
    }
}
