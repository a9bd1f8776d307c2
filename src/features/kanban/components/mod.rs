pub mod add_task_form;
pub mod board;
pub mod column;
pub mod footer;
pub mod header;
pub mod task_card;

pub use add_task_form::AddTaskForm;
pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use footer::BoardFooter;
pub use header::KanbanHeader;
pub use task_card::TaskCard;
