use clap::Args;
use irrigation_core::error::Result;
use irrigation_core::{Config, ConfigForm, IrrigationConfig, TimeOfDay, ValidationError};

/// Planner input flags. Anything left out comes from the settings file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlannerArgs {
    /// Number of plots (D1..Dn)
    #[arg(long)]
    pub plots: Option<String>,
    /// Number of motors (M1..Mn)
    #[arg(long)]
    pub motors: Option<String>,
    /// Window start, HHMMSS
    #[arg(long)]
    pub start: Option<String>,
    /// Window end, HHMMSS
    #[arg(long)]
    pub end: Option<String>,
    /// Minutes a motor waters one plot
    #[arg(long)]
    pub runtime: Option<String>,
    /// Minutes to pause after each pass over all plots
    #[arg(long)]
    pub interval: Option<String>,
    /// Time of day used to stamp the generated schedule, HHMMSS (default: local clock).
    /// `watch` refreshes always use the local clock.
    #[arg(long)]
    pub now: Option<String>,
}

impl PlannerArgs {
    /// Merge flags over the saved defaults.
    pub fn form(&self, settings: &Config) -> ConfigForm {
        let mut form = settings.defaults.to_form();
        let overrides = [
            (&mut form.plots, &self.plots),
            (&mut form.motors, &self.motors),
            (&mut form.start_time, &self.start),
            (&mut form.end_time, &self.end),
            (&mut form.motor_runtime, &self.runtime),
            (&mut form.interval, &self.interval),
        ];
        for (slot, value) in overrides {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
        form
    }

    pub fn config(&self, settings: &Config) -> Result<IrrigationConfig, ValidationError> {
        IrrigationConfig::from_form(&self.form(settings))
    }

    pub fn now(&self) -> Result<TimeOfDay, ValidationError> {
        match &self.now {
            Some(now) => TimeOfDay::parse_field("now", now),
            None => Ok(TimeOfDay::now_local()),
        }
    }

    /// Validated configuration plus the time used to stamp it.
    pub fn prepare(&self, settings: &Config) -> Result<(IrrigationConfig, TimeOfDay)> {
        let config = self.config(settings)?;
        let now = self.now()?;
        Ok((config, now))
    }
}
