use bookwell_auth::RoleGuard;
use bookwell_config::{CorsConfig, EnvironmentConfig, JwtConfig, RequestIdConfig};
use bookwell_core::ErrorFilter;

#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub environment: EnvironmentConfig,
    pub cors_config: CorsConfig,
    pub request_id_config: RequestIdConfig,
    pub role_guard: RoleGuard,
    pub error_filter: ErrorFilter,
}

impl AppState {
    /// Builds the state from explicit configs. The error filter follows the
    /// environment: stack traces are only exposed outside production.
    pub fn new(
        jwt_config: JwtConfig,
        environment: EnvironmentConfig,
        cors_config: CorsConfig,
        request_id_config: RequestIdConfig,
        role_guard: RoleGuard,
    ) -> Self {
        Self {
            jwt_config,
            environment,
            cors_config,
            request_id_config,
            role_guard,
            error_filter: ErrorFilter::new(environment.expose_stack_traces()),
        }
    }
}

pub fn init_app_state() -> AppState {
    AppState::new(
        JwtConfig::from_env(),
        EnvironmentConfig::from_env(),
        CorsConfig::from_env(),
        RequestIdConfig::from_env(),
        RoleGuard::from_env(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookwell_config::Environment;

    #[test]
    fn test_filter_follows_environment() {
        let state = AppState::new(
            JwtConfig::default(),
            EnvironmentConfig::new(Environment::Production),
            CorsConfig::default(),
            RequestIdConfig::default(),
            RoleGuard::default(),
        );
        assert!(!state.error_filter.exposes_stack());

        let state = AppState::new(
            JwtConfig::default(),
            EnvironmentConfig::new(Environment::Development),
            CorsConfig::default(),
            RequestIdConfig::default(),
            RoleGuard::default(),
        );
        assert!(state.error_filter.exposes_stack());
    }
}
