//! Standardized initialization for the lambda binary: environment detection,
//! `.env` loading, panic hook, and tracing subscriber setup.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

/// The current environment the application is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// Running on a developer machine
    Local,
}

impl Environment {
    /// Reads `ENVIRONMENT`, falling back to production when unset or invalid.
    pub fn new_or_prod() -> Self {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|value| Self::from_str(&value).ok())
            .unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(environment: &str) -> Result<Self, UnknownEnvironment> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownEnvironment(s.to_string())),
        }
    }
}

/// Represents a value which cannot be converted into an [Environment]
#[derive(Debug, thiserror::Error)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownEnvironment(String);

/// Defines the initialization behaviour for this binary.
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
}

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

impl Entrypoint {
    /// Consume self and initialize this binary.
    pub fn init(self) {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }
    }
}
