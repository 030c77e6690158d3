mod config;
mod generator;
mod status;

pub use config::{ConfigForm, IrrigationConfig};
pub use generator::{generate, IrrigationTask, ScheduleGenerator};
pub use status::{classify, TaskStatus};
