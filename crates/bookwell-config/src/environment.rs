//! Deployment environment.
//!
//! The environment is read once at startup from `APP_ENV` and injected into
//! the error filter. It only decides whether stack traces may be returned to
//! clients.
//!
//! | `APP_ENV`               | Environment   | Production-like |
//! |-------------------------|---------------|-----------------|
//! | `production`, `prod`    | `Production`  | yes             |
//! | `staging`               | `Staging`     | yes             |
//! | `test`                  | `Test`        | no              |
//! | anything else / unset   | `Development` | no              |

use std::env;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// Parses an environment name, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" => Self::Staging,
            "test" => Self::Test,
            _ => Self::Development,
        }
    }

    pub fn is_production_like(self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EnvironmentConfig {
    pub environment: Environment,
}

impl EnvironmentConfig {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// Reads `APP_ENV`, defaulting to development.
    pub fn from_env() -> Self {
        Self {
            environment: env::var("APP_ENV")
                .map(|name| Environment::from_name(&name))
                .unwrap_or_default(),
        }
    }

    /// Stack traces are only returned outside production-like environments.
    pub fn expose_stack_traces(&self) -> bool {
        !self.environment.is_production_like()
    }
}
