use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates the fully merged configuration.
///
/// Called after every layer, including command-line flags, has been applied.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_url("base_url", &config.base_url)?;

    if let Some(api_url) = &config.api_url {
        validate_http_url("api_url", api_url)?;
    }

    validate_price_band(config)?;

    if let Some(stars) = config.stars {
        if !(1..=5).contains(&stars) {
            return Err(ConfigError::Validation(format!(
                "stars must be between 1 and 5, got {}",
                stars
            )));
        }
    }

    if config.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output_dir cannot be empty".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that a configured URL parses and uses an HTTP scheme
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", field, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            field,
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates the optional min/max price criteria
fn validate_price_band(config: &Config) -> Result<(), ConfigError> {
    if let Some(min) = config.min_price {
        if !min.is_finite() || min < 0.0 {
            return Err(ConfigError::Validation(format!(
                "min_price must be a non-negative number, got {}",
                min
            )));
        }
    }

    if let Some(max) = config.max_price {
        if !max.is_finite() || max < 0.0 {
            return Err(ConfigError::Validation(format!(
                "max_price must be a non-negative number, got {}",
                max
            )));
        }
    }

    if let (Some(min), Some(max)) = (config.min_price, config.max_price) {
        if min > max {
            return Err(ConfigError::Validation(format!(
                "min_price ({}) cannot exceed max_price ({})",
                min, max
            )));
        }
    }

    Ok(())
}
