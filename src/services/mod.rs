// Services module - process-wide integrations

pub mod monitoring;

pub use monitoring::{MonitoringConfig, MonitoringService};
