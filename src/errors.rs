use thiserror::Error;
use crate::manager_mail::errors::MailError;
use crate::manager_openweather::errors::OpenWeatherError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ConfigError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("ConfigError::Toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("ConfigError::MissingEnv: {0} is not set")]
    MissingEnv(String),
    #[error("ConfigError::DotEnv: {0}")]
    DotEnv(String),
    #[error("ConfigError::Logger: {0}")]
    Logger(String),
}
impl From<log::SetLoggerError> for ConfigError {
    fn from(e: log::SetLoggerError) -> Self { ConfigError::Logger(e.to_string()) }
}
impl From<log4rs::config::runtime::ConfigErrors> for ConfigError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self { ConfigError::Logger(e.to_string()) }
}

#[derive(Error, Debug)]
pub enum NightLowError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("forecast failed: {0}")]
    OpenWeather(#[from] OpenWeatherError),
    #[error("notification failed: {0}")]
    Mail(#[from] MailError),
}
