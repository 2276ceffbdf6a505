use crate::config::types::Config;
use crate::ConfigError;
use std::path::Path;
use std::str::FromStr;

/// File loaded from the working directory when no --config flag is given.
pub const DEFAULT_CONFIG_FILE: &str = "bookgrab.toml";

/// Prefix for environment variable overrides, e.g. `BOOKS_MIN_PRICE`.
const ENV_PREFIX: &str = "BOOKS_";

/// Loads the configuration file and environment layers.
///
/// An explicitly given path must exist and parse; without one, the default
/// file is loaded only when present and built-in defaults are used otherwise.
/// `BOOKS_`-prefixed environment variables are applied on top. Validation is
/// left to the caller so command-line flags can still be layered in between.
///
/// # Arguments
///
/// * `explicit` - Path passed on the command line, if any
///
/// # Returns
///
/// * `Ok(Config)` - Merged defaults, file, and environment layers
/// * `Err(ConfigError)` - Failed to read or parse a layer
///
/// # Example
///
/// ```no_run
/// use bookgrab::config::load_config;
///
/// let config = load_config(None).unwrap();
/// println!("Scraping {}", config.base_url);
/// ```
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = match explicit {
        Some(path) => parse_file(path)?,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                parse_file(fallback)?
            } else {
                Config::default()
            }
        }
    };

    apply_env_layer(&mut config, |name| std::env::var(name).ok())?;
    Ok(config)
}

fn parse_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Applies `BOOKS_*` overrides from the given lookup onto `config`.
///
/// A variable that is unset or blank leaves the field alone; a present but
/// unparseable value is a hard error rather than a silent fallback.
fn apply_env_layer<F>(config: &mut Config, get: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |suffix: &str| format!("{}{}", ENV_PREFIX, suffix);
    let lookup = |suffix: &str| get(&var(suffix)).filter(|value| !value.trim().is_empty());

    if let Some(value) = lookup("BASE_URL") {
        config.base_url = value.trim().to_string();
    }
    if let Some(value) = lookup("CATEGORIES") {
        config.categories = split_csv(&value);
    }
    if let Some(value) = lookup("MIN_PRICE") {
        config.min_price = Some(parse_env(&var("MIN_PRICE"), &value)?);
    }
    if let Some(value) = lookup("MAX_PRICE") {
        config.max_price = Some(parse_env(&var("MAX_PRICE"), &value)?);
    }
    if let Some(value) = lookup("STARS") {
        config.stars = Some(parse_env(&var("STARS"), &value)?);
    }
    if let Some(value) = lookup("API_URL") {
        config.api_url = Some(value.trim().to_string());
    }
    if let Some(value) = lookup("OUTPUT_DIR") {
        config.output_dir = value.trim().into();
    }
    if let Some(value) = lookup("USER_AGENT") {
        config.user_agent = value.trim().to_string();
    }

    Ok(())
}

fn parse_env<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Env {
        var: var.to_string(),
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Splits a comma-separated list into trimmed, non-empty entries.
///
/// Used for the `BOOKS_CATEGORIES` variable and for comma-joined values of
/// the --category flag.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}
