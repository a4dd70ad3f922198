use std::env;
use std::fs;
use std::path::Path;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMode {
    /// Geocode the postal code, then use the one call daily forecast
    #[default]
    Daily,
    /// Use the postal code keyed 5 day / 3 hour forecast
    ThreeHourly,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

impl Default for General {
    fn default() -> Self {
        Self { log_path: None, log_level: LevelFilter::Info, log_to_stdout: true }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ForecastParameters {
    pub mode: ForecastMode,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Notify {
    pub enabled: bool,
    pub smtp_port: u16,
}

impl Default for Notify {
    fn default() -> Self {
        Self { enabled: true, smtp_port: 587 }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ConfigFile {
    general: General,
    forecast: ForecastParameters,
    notify: Notify,
}

#[derive(Debug)]
pub struct MailParameters {
    pub sender: String,
    pub password: String,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub recipient: String,
}

#[derive(Debug)]
pub struct Config {
    pub general: General,
    pub forecast: ForecastParameters,
    pub api_key: String,
    /// None when notification is disabled and the report goes to stdout
    pub mail: Option<MailParameters>,
}

/// Default configuration file, optional when no path is given explicitly
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Loads the configuration file and returns a struct with all configuration items.
/// Secrets are taken from the environment.
///
/// An explicitly given file must exist. Without one, `config.toml` is read
/// if present and defaults are used otherwise.
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file, if one was given
pub fn load_config(config_path: Option<&str>) -> Result<Config, ConfigError> {
    let toml = match config_path {
        Some(path) => fs::read_to_string(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => fs::read_to_string(DEFAULT_CONFIG_PATH)?,
        None => String::new(),
    };

    parse_config(&toml, |key| env::var(key).ok())
}

/// Checks the outcome of loading a `.env` file, a missing file is fine
///
/// # Arguments
///
/// * 'result' - what dotenvy returned
pub fn check_dotenv<T>(result: Result<T, dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Err(e) if !e.not_found() => Err(ConfigError::DotEnv(e.to_string())),
        _ => Ok(()),
    }
}

/// Builds the configuration from toml text and a variable lookup
///
/// # Arguments
///
/// * 'toml' - contents of the configuration file
/// * 'var' - lookup for environment variables
fn parse_config<F>(toml: &str, var: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let file: ConfigFile = toml::from_str(toml)?;

    let required = |key: &str| var(key).ok_or_else(|| ConfigError::MissingEnv(key.to_string()));

    let api_key = required("OPENWEATHER_API_KEY")?;

    let mail = if file.notify.enabled {
        Some(MailParameters {
            sender: required("SENDER_EMAIL")?,
            password: required("SENDER_PASSWORD")?,
            smtp_server: required("SMTP_SERVER")?,
            smtp_port: file.notify.smtp_port,
            recipient: required("RECIPIENT_EMAIL")?,
        })
    } else {
        None
    };

    Ok(Config { general: file.general, forecast: file.forecast, api_key, mail })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    const ALL_VARS: [(&str, &str); 5] = [
        ("OPENWEATHER_API_KEY", "abc123"),
        ("SENDER_EMAIL", "sender@example.com"),
        ("SENDER_PASSWORD", "secret"),
        ("SMTP_SERVER", "smtp.example.com"),
        ("RECIPIENT_EMAIL", "me@example.org"),
    ];

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("", vars(&ALL_VARS)).unwrap();

        assert_eq!(config.forecast.mode, ForecastMode::Daily);
        assert_eq!(config.general.log_level, LevelFilter::Info);
        assert!(config.general.log_to_stdout);
        assert!(config.general.log_path.is_none());
        assert_eq!(config.api_key, "abc123");

        let mail = config.mail.unwrap();
        assert_eq!(mail.smtp_port, 587);
        assert_eq!(mail.smtp_server, "smtp.example.com");
    }

    #[test]
    fn reads_settings_from_toml() {
        let toml = r#"
            [general]
            log_level = "debug"
            log_path = "/var/log/nightlow.log"
            log_to_stdout = false

            [forecast]
            mode = "three_hourly"

            [notify]
            smtp_port = 2525
        "#;

        let config = parse_config(toml, vars(&ALL_VARS)).unwrap();

        assert_eq!(config.general.log_level, LevelFilter::Debug);
        assert_eq!(config.general.log_path.as_deref(), Some("/var/log/nightlow.log"));
        assert!(!config.general.log_to_stdout);
        assert_eq!(config.forecast.mode, ForecastMode::ThreeHourly);
        assert_eq!(config.mail.map(|m| m.smtp_port), Some(2525));
    }

    #[test]
    fn disabled_notify_needs_no_mail_vars() {
        let toml = "[notify]\nenabled = false\n";

        let config = parse_config(toml, vars(&[("OPENWEATHER_API_KEY", "abc123")])).unwrap();

        assert!(config.mail.is_none());
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let result = parse_config("", vars(&ALL_VARS[1..]));

        assert!(matches!(result, Err(ConfigError::MissingEnv(k)) if k == "OPENWEATHER_API_KEY"));
    }

    #[test]
    fn missing_mail_var_is_an_error() {
        let result = parse_config("", vars(&ALL_VARS[..4]));

        assert!(matches!(result, Err(ConfigError::MissingEnv(k)) if k == "RECIPIENT_EMAIL"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("nightlow-no-such-dir").join("config.toml").to_string_lossy().to_string();

        let result = load_config(Some(path.as_str()));

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn missing_dotenv_file_is_ignored() {
        let path = std::env::temp_dir().join("nightlow-no-such-dir").join(".env");

        assert!(check_dotenv(dotenvy::from_path(&path)).is_ok());
    }

    #[test]
    fn malformed_dotenv_file_is_an_error() {
        let path = std::env::temp_dir().join("nightlow-malformed.env");
        fs::write(&path, "BROKEN=\"never closed\n").unwrap();

        let result = check_dotenv(dotenvy::from_path(&path));

        assert!(matches!(result, Err(ConfigError::DotEnv(_))));
    }

    #[test]
    fn unknown_mode_is_an_error() {
        let result = parse_config("[forecast]\nmode = \"hourly\"\n", vars(&ALL_VARS));

        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}
