pub mod app;
pub mod config;
pub mod error;
pub mod report;
pub mod services;

pub use app::{build_driver, Driver, LiveDriver, RunSummary};
pub use config::AppConfig;
pub use error::RunError;
