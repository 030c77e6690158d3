//! # Irrigation Core Library
//!
//! Business logic for planning irrigation cycles. The CLI is a thin shell
//! over this crate: it parses text input, calls the core and renders the
//! result.
//!
//! ## Architecture
//!
//! - **Generator**: a pure mapping from plot/motor counts and timing
//!   parameters to an ordered list of watering slots
//! - **Status**: classifies each slot as Pending / In Progress / Done
//!   against the current time of day
//! - **Board**: the working state (full list, filtered view, page) with
//!   CSV export
//! - **Ticker**: a caller-owned periodic refresh of task status
//! - **Storage**: TOML-based settings
//!
//! ## Key Components
//!
//! - [`ScheduleGenerator`]: Round-robin schedule generation
//! - [`classify`]: Status derivation
//! - [`ScheduleBoard`]: Filtering, pagination and export
//! - [`StatusTicker`]: Periodic status refresh
//! - [`Config`]: Settings management

pub mod board;
pub mod clock;
pub mod error;
pub mod events;
pub mod irrigation;
pub mod storage;
pub mod ticker;

pub use board::ScheduleBoard;
pub use clock::TimeOfDay;
pub use error::{ConfigError, CoreError, ExportError, ValidationError};
pub use events::{Event, StatusCounts};
pub use irrigation::{
    classify, generate, ConfigForm, IrrigationConfig, IrrigationTask, ScheduleGenerator, TaskStatus,
};
pub use storage::Config;
pub use ticker::StatusTicker;
