pub mod args;
pub mod config;
pub mod export;
pub mod generate;
pub mod status;
pub mod watch;
