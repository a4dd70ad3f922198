use std::env;
use std::process::ExitCode;
use log::{error, info};
use crate::config::{check_dotenv, load_config, Config, ForecastMode};
use crate::errors::NightLowError;
use crate::logging::setup_logger;
use crate::manager_mail::Mail;
use crate::manager_openweather::OpenWeather;
use crate::report::{format_report, print_report, subject};

mod config;
mod errors;
mod logging;
mod manager_mail;
mod manager_openweather;
mod models;
mod report;

const ZIP_CODE: &str = "80615";
const COUNTRY_CODE: &str = "us";

fn main() -> ExitCode {
    if let Err(e) = check_dotenv(dotenvy::dotenv()) {
        eprintln!("Error loading .env: {}", e);
        return ExitCode::FAILURE;
    }

    let config_path = env::var("NIGHTLOW_CONFIG").ok();
    let config = match load_config(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => { eprintln!("Error loading config: {}", e); return ExitCode::FAILURE; }
    };
    if let Err(e) = setup_logger(&config.general) {
        eprintln!("Error setting up logger: {}", e);
        return ExitCode::FAILURE;
    }

    info!("nightlow version: {}", env!("CARGO_PKG_VERSION"));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Fetches the overnight lows, formats the report and delivers it once
///
/// # Arguments
///
/// * 'config' - the loaded configuration
fn run(config: &Config) -> Result<(), NightLowError> {
    let weather = OpenWeather::new(config.api_key.clone());
    let mail = config.mail.as_ref().map(Mail::new).transpose()?;

    let (city, lows) = match config.forecast.mode {
        ForecastMode::Daily => {
            let location = weather.get_location(ZIP_CODE, COUNTRY_CODE)?;
            let lows = weather.get_daily_lows(&location)?;
            (location.city, lows)
        },
        ForecastMode::ThreeHourly => weather.get_three_hourly_lows(ZIP_CODE, COUNTRY_CODE)?,
    };

    let report = format_report(&lows);

    match mail {
        Some(mail) => mail.send_mail(subject(&city), report)?,
        None => print_report(&city, &report),
    }

    Ok(())
}
