use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::features::kanban::{use_task_store, KanbanBoard};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let board = use_task_store(&config);
    let labels = config.locale.labels();

    view! {
        <main class="app">
            <KanbanBoard board=board labels=labels />
        </main>
    }
}
