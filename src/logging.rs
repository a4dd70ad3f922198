use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;
use crate::errors::ConfigError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {t} - {m}{n}";

/// Sets up log4rs with a console appender, a file appender or both
///
/// # Arguments
///
/// * 'general' - log level and log destinations
pub fn setup_logger(general: &General) -> Result<(), ConfigError> {
    let config = build_log_config(general)?;
    log4rs::init_config(config)?;

    Ok(())
}

/// Builds the log4rs configuration, at least one destination must be set
///
/// # Arguments
///
/// * 'general' - log level and log destinations
fn build_log_config(general: &General) -> Result<Config, ConfigError> {
    if !general.log_to_stdout && general.log_path.is_none() {
        return Err(ConfigError::Logger("log_to_stdout is false and no log_path is set".to_string()));
    }

    let mut builder = Config::builder();
    let mut root = Root::builder();

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(log_path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    Ok(builder.build(root.build(general.log_level))?)
}
