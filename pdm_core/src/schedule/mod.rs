pub mod plans;
pub mod schedule;

pub use plans::{builtin_plans, fmea_action_plan, maintenance_routine};
pub use schedule::{MaintenanceTask, Schedule, ScheduledTask};
