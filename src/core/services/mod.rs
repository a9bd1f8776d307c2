pub mod spawner;
pub mod storage;
pub mod task_store;

pub use spawner::*;
pub use storage::*;
pub use task_store::*;
