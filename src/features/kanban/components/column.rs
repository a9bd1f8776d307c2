use leptos::prelude::*;
use crate::core::config::Labels;
use crate::core::models::{Task, TaskId, TaskStatus};
use crate::core::services::filter_by_status;
use super::TaskCard;

#[component]
pub fn KanbanColumn(
    #[prop(into)] status: TaskStatus,
    #[prop(into)] tasks: ReadSignal<Vec<Task>>,
    labels: Labels,
    on_delete: Callback<TaskId>,
    on_move: Callback<(TaskId, TaskStatus)>,
) -> impl IntoView {
    view! {
        <div class="kanban-column" data-status=status.as_str()>
            <div class="column-header">
                <h2>{labels.column(status)}</h2>
                <span class="task-count">
                    {move || tasks.with(|tasks| filter_by_status(tasks, status).count())}
                </span>
            </div>
            <div class="column-content">
                {move || {
                    tasks.with(|tasks| {
                        filter_by_status(tasks, status)
                            .cloned()
                            .map(|task| view! {
                                <TaskCard task=task labels=labels on_delete=on_delete on_move=on_move />
                            })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}
