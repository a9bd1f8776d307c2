use leptos::prelude::*;
use crate::core::config::Labels;
use crate::core::models::Task;

#[component]
pub fn BoardFooter(
    labels: Labels,
    #[prop(into)] tasks: ReadSignal<Vec<Task>>,
) -> impl IntoView {
    view! {
        <footer class="footer">
            {labels.total} ": " {move || tasks.with(Vec::len)}
        </footer>
    }
}
