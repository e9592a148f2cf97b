// src/common/config.rs
//! Service configuration loaded from the environment (after `.env`)

use std::env;
use std::net::SocketAddr;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:3001,http://localhost:5173";

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub project_name: String,
    pub api_prefix: String,
    pub environment: String,
    pub log_bodies: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch process env
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        let cors_origins = parse_list(
            &lookup("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
        );

        let project_name =
            lookup("PROJECT_NAME").unwrap_or_else(|| "WTI Tech N-Tier Application".to_string());

        let api_prefix = normalize_prefix(&lookup("API_V1_STR").unwrap_or_else(|| "/api/v1".to_string()));

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let log_bodies = parse_flag(lookup("LOG_BODIES"), false);

        Self {
            port,
            cors_origins,
            project_name,
            api_prefix,
            environment,
            log_bodies,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

/// Splits a comma-separated setting, dropping blanks
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(value) => matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        None => default,
    }
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Print configuration summary on startup
pub fn print_config_status(config: &ServiceConfig) {
    println!("🛡️  {} validation service", config.project_name);
    println!("   Environment: {}", config.environment);
    println!("   API prefix: {}", config.api_prefix);
    println!("   CORS origins: {}", config.cors_origins.join(", "));
    if config.log_bodies {
        if config.is_production() {
            println!("   ⚠️  Body logging enabled in production; secrets are redacted but payloads are not");
        } else {
            println!("   ⚠️  Request/response body logging enabled");
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_prefix, "/api/v1");
        assert_eq!(config.environment, "development");
        assert_eq!(config.cors_origins.len(), 3);
        assert!(!config.log_bodies);
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("CORS_ORIGINS", "https://a.example, ,https://b.example"),
            ("API_V1_STR", "api/v2/"),
            ("ENVIRONMENT", "Production"),
            ("LOG_BODIES", "TRUE"),
        ]));

        assert_eq!(config.port, 9000);
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.api_prefix, "/api/v2");
        assert!(config.is_production());
        assert!(config.log_bodies);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = ServiceConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, 8080);
    }
}
