use serde::{Deserialize, Serialize};

use crate::clock::TimeOfDay;
use crate::error::ValidationError;

/// Raw planner input, one string per form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigForm {
    pub plots: String,
    pub motors: String,
    pub start_time: String,
    pub end_time: String,
    pub motor_runtime: String,
    pub interval: String,
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self {
            plots: "4".into(),
            motors: "2".into(),
            start_time: "060000".into(),
            end_time: "190000".into(),
            motor_runtime: "5".into(),
            interval: "20".into(),
        }
    }
}

/// Validated input for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrigationConfig {
    pub plot_count: u32,
    pub motor_count: u32,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    /// How long a motor waters one plot, in minutes.
    pub motor_runtime_min: u32,
    /// Pause after a full pass over all plots, in minutes.
    pub interval_min: u32,
}

impl IrrigationConfig {
    /// Build a configuration, rejecting zero counts/runtime and empty windows.
    pub fn new(
        plot_count: u32,
        motor_count: u32,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
        motor_runtime_min: u32,
        interval_min: u32,
    ) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("plots", plot_count),
            ("motors", motor_count),
            ("motor_runtime", motor_runtime_min),
        ] {
            if value == 0 {
                return Err(ValidationError::NonPositive {
                    field: field.to_string(),
                });
            }
        }
        if start_time >= end_time {
            return Err(ValidationError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            plot_count,
            motor_count,
            start_time,
            end_time,
            motor_runtime_min,
            interval_min,
        })
    }

    /// Parse and validate the text form.
    pub fn from_form(form: &ConfigForm) -> Result<Self, ValidationError> {
        Self::new(
            parse_whole("plots", &form.plots)?,
            parse_whole("motors", &form.motors)?,
            TimeOfDay::parse_field("start_time", &form.start_time)?,
            TimeOfDay::parse_field("end_time", &form.end_time)?,
            parse_whole("motor_runtime", &form.motor_runtime)?,
            parse_whole("interval", &form.interval)?,
        )
    }

    /// Plot identifiers `D1..=Dn`.
    pub fn plot_ids(&self) -> Vec<String> {
        (1..=self.plot_count).map(|i| format!("D{i}")).collect()
    }

    /// Motor identifiers `M1..=Mn`.
    pub fn motor_ids(&self) -> Vec<String> {
        (1..=self.motor_count).map(|i| format!("M{i}")).collect()
    }

    /// Minutes between window start and end.
    pub fn window_minutes(&self) -> i64 {
        (self.end_time.as_naive() - self.start_time.as_naive()).num_minutes()
    }
}

fn parse_whole(field: &str, value: &str) -> Result<u32, ValidationError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
}
