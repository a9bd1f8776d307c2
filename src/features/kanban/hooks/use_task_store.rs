use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::config::BoardConfig;
use crate::core::models::{Task, TaskId, TaskStatus};
use crate::core::services::{BrowserSpawner, LocalStorage, TaskStore};

/// Reactive view of the board's [`TaskStore`] plus the actions the UI may
/// invoke on it.
#[derive(Clone, Copy)]
pub struct TaskBoard {
    pub tasks: ReadSignal<Vec<Task>>,
    pub loading: ReadSignal<bool>,
    pub add_task: Callback<(String, String)>,
    pub delete_task: Callback<TaskId>,
    pub move_task: Callback<(TaskId, TaskStatus)>,
}

pub fn use_task_store(config: &BoardConfig) -> TaskBoard {
    let store = StoredValue::new_local(TaskStore::new(
        Rc::new(LocalStorage),
        Rc::new(BrowserSpawner),
        config.storage_key.clone(),
    ));
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);

    // Load tasks on mount
    {
        let pending = store.with_value(|store| store.begin_load());
        spawn_local(async move {
            let result = pending.await;
            store.update_value(|store| {
                set_tasks.set(store.finish_load(result).to_vec());
                set_loading.set(store.is_loading());
            });
        });
    }

    let add_task = Callback::new(move |(title, description): (String, String)| {
        store.update_value(|store| set_tasks.set(store.add(title, description).to_vec()));
    });

    let delete_task = Callback::new(move |task_id: TaskId| {
        store.update_value(|store| set_tasks.set(store.delete(task_id).to_vec()));
    });

    let move_task = Callback::new(move |(task_id, status): (TaskId, TaskStatus)| {
        store.update_value(|store| set_tasks.set(store.move_task(task_id, status).to_vec()));
    });

    TaskBoard {
        tasks,
        loading,
        add_task,
        delete_task,
        move_task,
    }
}
