pub mod model;
pub mod window;
pub mod zone;

pub use model::{base_task_weight, energy_balance, selected_weight, task_weight};
pub use window::{hours_in_window, time_adjusted_points, time_info, TimeInfo, WindowHours, WINDOW_HOURS};
pub use zone::{classify, remaining_percentage, EnergyZone};
