pub mod use_task_store;

pub use use_task_store::{use_task_store, TaskBoard};
