pub mod enums;
pub mod label;
pub mod task;

pub use enums::{EnergyLevel, Priority, TaskStatus, UiMode, UserState, WeightCategory};
pub use label::{default_labels, Label, QuickTodo};
pub use task::{Subtask, Task, PROGRESS_STEPS};
