pub mod task;

pub use task::{IdGenerator, ParseStatusError, Task, TaskId, TaskStatus};
