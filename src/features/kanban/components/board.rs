use leptos::prelude::*;
use crate::core::config::Labels;
use crate::core::models::TaskStatus;
use crate::features::kanban::hooks::TaskBoard;
use super::{AddTaskForm, BoardFooter, KanbanColumn, KanbanHeader};

#[component]
pub fn KanbanBoard(board: TaskBoard, labels: Labels) -> impl IntoView {
    let (show_form, set_show_form) = signal(false);
    let toggle_form = Callback::new(move |()| set_show_form.update(|open| *open = !*open));
    let close_form = Callback::new(move |()| set_show_form.set(false));

    view! {
        <Show
            when=move || !board.loading.get()
            fallback=move || view! { <div class="loading">{labels.loading}</div> }
        >
            <div class="container">
                <KanbanHeader labels=labels on_toggle_form=toggle_form />
                <Show when=move || show_form.get()>
                    <AddTaskForm labels=labels on_create=board.add_task on_close=close_form />
                </Show>
                <div class="kanban-board">
                    {TaskStatus::all()
                        .into_iter()
                        .map(|status| view! {
                            <KanbanColumn
                                status=status
                                tasks=board.tasks
                                labels=labels
                                on_delete=board.delete_task
                                on_move=board.move_task
                            />
                        })
                        .collect_view()}
                </div>
                <BoardFooter labels=labels tasks=board.tasks />
            </div>
        </Show>
    }
}
