use crate::config::types::Config;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_store_path(&config.urls_file_path)?;
    validate_retry_delay(config.url_retry_delay)?;
    validate_request_timeout(config.request_timeout)?;
    validate_user_agent(config.user_agent.as_deref())?;
    Ok(())
}

fn validate_store_path(path: &str) -> Result<(), ConfigError> {
    if path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "urls_file_path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_retry_delay(delay: f64) -> Result<(), ConfigError> {
    if !delay.is_finite() || delay < 0.0 {
        return Err(ConfigError::Validation(format!(
            "url_retry_delay must be a non-negative number of seconds, got {}",
            delay
        )));
    }
    Ok(())
}

fn validate_request_timeout(timeout: Option<f64>) -> Result<(), ConfigError> {
    match timeout {
        Some(secs) if !secs.is_finite() || secs <= 0.0 => Err(ConfigError::Validation(format!(
            "request_timeout must be a positive number of seconds, got {}",
            secs
        ))),
        _ => Ok(()),
    }
}

fn validate_user_agent(user_agent: Option<&str>) -> Result<(), ConfigError> {
    if let Some(ua) = user_agent {
        if ua.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user_agent cannot be empty when set".to_string(),
            ));
        }
    }
    Ok(())
}
