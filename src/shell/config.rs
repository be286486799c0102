// Process configuration, read from the environment.

use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub environment: Environment,
    /// How often the admission window sweeper runs.
    pub sweep_interval: Duration,
}

impl AppConfig {
    /// Read configuration from `BIND_ADDR`, `APP_ENV` and
    /// `WINDOW_SWEEP_SECS`, falling back to defaults when unset. Error
    /// detail in responses is only exposed when `APP_ENV=development`.
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = match env::var("BIND_ADDR") {
            Ok(raw) => raw.parse().context("invalid BIND_ADDR")?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        let environment = match env::var("APP_ENV").ok().as_deref() {
            Some("development") | Some("dev") => Environment::Development,
            _ => Environment::Production,
        };

        let sweep_interval = match env::var("WINDOW_SWEEP_SECS") {
            Ok(raw) => Duration::from_secs(raw.parse().context("invalid WINDOW_SWEEP_SECS")?),
            Err(_) => Duration::from_secs(60),
        };

        Ok(Self {
            bind_addr,
            environment,
            sweep_interval,
        })
    }
}
