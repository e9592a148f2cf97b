// Monitoring Service with Sentry integration
use std::env;

use serde_json::Value;
use tracing::info;

use crate::common::config::parse_flag;
use crate::common::safe_text_log;

#[derive(Debug, Clone)]
pub struct MonitoringConfig {
    pub sentry_dsn: Option<String>,
    pub environment: String,
    pub enable_error_tracking: bool,
    pub enable_performance_monitoring: bool,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl MonitoringConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.trim().is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            enable_error_tracking: parse_flag(lookup("ENABLE_ERROR_TRACKING"), true),
            enable_performance_monitoring: parse_flag(
                lookup("ENABLE_PERFORMANCE_MONITORING"),
                false,
            ),
        }
    }
}

/// Owns the Sentry client for the lifetime of the process
pub struct MonitoringService {
    config: MonitoringConfig,
    sentry_guard: Option<sentry::ClientInitGuard>,
}

impl MonitoringService {
    pub fn new(config: MonitoringConfig) -> Self {
        let sentry_guard = Self::initialize_sentry(&config);
        Self {
            config,
            sentry_guard,
        }
    }

    /// Initialize Sentry client
    fn initialize_sentry(config: &MonitoringConfig) -> Option<sentry::ClientInitGuard> {
        if !config.enable_error_tracking {
            info!("Error tracking is disabled");
            return None;
        }

        let Some(dsn) = &config.sentry_dsn else {
            info!("Sentry DSN not configured");
            return None;
        };

        let guard = sentry::init((
            dsn.as_str(),
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: Some(config.environment.clone().into()),
                traces_sample_rate: if config.enable_performance_monitoring {
                    0.1
                } else {
                    0.0
                },
                ..Default::default()
            },
        ));

        info!("Sentry initialized successfully");
        Some(guard)
    }

    pub fn is_reporting(&self) -> bool {
        self.sentry_guard
            .as_ref()
            .map(|guard| guard.is_enabled())
            .unwrap_or(false)
    }

    pub fn config(&self) -> &MonitoringConfig {
        &self.config
    }
}

/// Adds a breadcrumb for rejected input. A no-op when Sentry is not bound.
pub fn record_rejection(category: &str, input: &str) {
    let mut breadcrumb = sentry::Breadcrumb {
        ty: "default".into(),
        category: Some("validation".into()),
        level: sentry::Level::Warning,
        message: Some(format!("Rejected {} content", category)),
        ..Default::default()
    };

    breadcrumb.data.insert(
        "preview".to_string(),
        Value::String(safe_text_log(input, 40)),
    );

    sentry::add_breadcrumb(breadcrumb);
}
