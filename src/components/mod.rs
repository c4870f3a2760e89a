//! UI Components
//!
//! Reusable Leptos components.

mod tab_list;
mod task_list;
mod task_modal;

pub use tab_list::TabList;
pub use task_list::TaskList;
pub use task_modal::TaskModal;
