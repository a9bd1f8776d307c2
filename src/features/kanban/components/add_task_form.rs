use leptos::ev;
use leptos::prelude::*;
use crate::core::config::Labels;

#[component]
pub fn AddTaskForm(
    labels: Labels,
    on_create: Callback<(String, String)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let reset = move || {
        set_title.set(String::new());
        set_description.set(String::new());
    };

    // Blank titles are ignored here as well as in the store
    let submit = move || {
        if title.with_untracked(|t| t.trim().is_empty()) {
            return;
        }
        on_create.run((title.get_untracked(), description.get_untracked()));
        reset();
        on_close.run(());
    };

    let cancel = move |_| {
        reset();
        on_close.run(());
    };

    view! {
        <div class="add-form">
            <h2>{labels.form_heading}</h2>
            <input
                type="text"
                class="form-input"
                placeholder=labels.title_placeholder
                autofocus
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
                on:keydown=move |ev: ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <textarea
                class="form-textarea"
                placeholder=labels.description_placeholder
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <div class="form-actions">
                <button
                    class="btn-submit"
                    disabled=move || title.with(|t| t.trim().is_empty())
                    on:click=move |_| submit()
                >
                    {labels.submit}
                </button>
                <button class="btn-cancel" on:click=cancel>{labels.cancel}</button>
            </div>
        </div>
    }
}
