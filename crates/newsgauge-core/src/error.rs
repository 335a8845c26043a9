use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_env_var_names_the_variable() {
        let err = ConfigError::InvalidEnvVar {
            var: "NEWSGAUGE_ENV".to_string(),
            reason: "unknown environment \"staging\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for NEWSGAUGE_ENV: unknown environment \"staging\""
        );
    }
}
