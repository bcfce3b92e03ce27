//! Shared building blocks for the views.

pub mod task;
pub mod text_field;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskState, Tasks};
pub use text_field::TextField;
