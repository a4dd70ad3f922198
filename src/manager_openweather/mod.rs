pub mod errors;

use std::ops::Sub;
use std::time::Duration;
use chrono::TimeDelta;
use log::{debug, info};
use serde::Deserialize;
use ureq::Agent;
use crate::manager_openweather::errors::OpenWeatherError;
use crate::models::openweather_forecast::{Forecast, ForecastEntry, SampleTime};
use crate::models::openweather_geo::ZipLookup;
use crate::models::openweather_onecall::OneCall;
use crate::models::overnight::{DailyLow, Location};

const GEO_URL: &str = "http://api.openweathermap.org/geo/1.0/zip";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";
const ONECALL_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";

/// Number of 3-hour samples covering five days
const THREE_HOURLY_SAMPLES: usize = 40;

/// Time of day of the 3-hour sample holding the overnight low
const OVERNIGHT_SAMPLE_TIME: &str = "06:00:00";

/// Struct for fetching locations and forecasts from OpenWeather
pub struct OpenWeather {
    api_key: String,
    agent: Agent,
}

impl OpenWeather {
    /// Returns a new instance of the OpenWeather struct
    ///
    /// # Arguments
    ///
    /// * 'api_key' - the OpenWeather API key
    pub fn new(api_key: String) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();

        let agent = config.into();

        Self { api_key, agent }
    }

    /// Resolves a postal code to a city name and its coordinates
    ///
    /// # Arguments
    ///
    /// * 'zip' - postal code
    /// * 'country' - two letter country code
    pub fn get_location(&self, zip: &str, country: &str) -> Result<Location, OpenWeatherError> {
        debug!("GET {} zip={},{}", GEO_URL, zip, country);

        let json = self.agent
            .get(GEO_URL)
            .query("zip", format!("{},{}", zip, country))
            .query("appid", &self.api_key)
            .call()?
            .body_mut()
            .read_to_string()?;

        let lookup: ZipLookup = serde_json::from_str(&json)?;

        info!("resolved {},{} to {} ({:.4}, {:.4})", zip, country, lookup.name, lookup.lat, lookup.lon);

        Ok(Location { city: lookup.name, lat: lookup.lat, lon: lookup.lon })
    }

    /// Retrieves the 5 day / 3 hour forecast for a postal code and returns the
    /// city name together with one overnight low per night
    ///
    /// # Arguments
    ///
    /// * 'zip' - postal code
    /// * 'country' - two letter country code
    pub fn get_three_hourly_lows(&self, zip: &str, country: &str) -> Result<(String, Vec<DailyLow>), OpenWeatherError> {
        debug!("GET {} zip={},{}", FORECAST_URL, zip, country);

        let json = self.agent
            .get(FORECAST_URL)
            .query("zip", format!("{},{}", zip, country))
            .query("appid", &self.api_key)
            .query("units", "imperial")
            .call()?
            .body_mut()
            .read_to_string()?;

        let forecast: Forecast = serde_json::from_str(&json)?;
        let lows = three_hourly_lows(&forecast)?;

        info!("extracted {} overnight lows for {}", lows.len(), forecast.city.name);

        Ok((forecast.city.name, lows))
    }

    /// Retrieves the daily forecast for a location and returns one low per day
    ///
    /// # Arguments
    ///
    /// * 'location' - the location to get a forecast for
    pub fn get_daily_lows(&self, location: &Location) -> Result<Vec<DailyLow>, OpenWeatherError> {
        debug!("GET {} lat={} lon={}", ONECALL_URL, location.lat, location.lon);

        let json = self.agent
            .get(ONECALL_URL)
            .query("lat", location.lat.to_string())
            .query("lon", location.lon.to_string())
            .query("appid", &self.api_key)
            .query("exclude", "current,minutely,hourly")
            .query("units", "imperial")
            .call()?
            .body_mut()
            .read_to_string()?;

        let one_call: OneCall = serde_json::from_str(&json)?;
        let lows = daily_lows(&one_call)?;

        info!("extracted {} daily lows for {}", lows.len(), location.city);

        Ok(lows)
    }
}

/// Picks the 06:00 samples out of the first 40 entries of a 3-hour forecast.
///
/// A 06:00 reading holds the low reached during the night before, so each
/// low is labeled with the weekday of the previous date.
///
/// # Arguments
///
/// * 'forecast' - the parsed 5 day / 3 hour forecast
pub fn three_hourly_lows(forecast: &Forecast) -> Result<Vec<DailyLow>, OpenWeatherError> {
    if forecast.list.len() < THREE_HOURLY_SAMPLES {
        return Err(OpenWeatherError::MissingData(
            format!("expected {} forecast entries, got {}", THREE_HOURLY_SAMPLES, forecast.list.len())));
    }

    let mut lows = Vec::new();
    for value in &forecast.list[..THREE_HOURLY_SAMPLES] {
        if !SampleTime::deserialize(value)?.dt_txt.ends_with(OVERNIGHT_SAMPLE_TIME) {
            continue;
        }

        let entry = ForecastEntry::deserialize(value)?;
        lows.push(DailyLow {
            day: entry.dt.sub(TimeDelta::days(1)).format("%A").to_string(),
            temp: truncate(entry.main.temp_min),
        });
    }

    Ok(lows)
}

/// Turns every entry of a daily forecast into a low labeled with its own weekday
///
/// # Arguments
///
/// * 'one_call' - the parsed one call forecast
pub fn daily_lows(one_call: &OneCall) -> Result<Vec<DailyLow>, OpenWeatherError> {
    if one_call.daily.is_empty() {
        return Err(OpenWeatherError::MissingData("daily forecast is empty".to_string()));
    }

    Ok(one_call.daily
        .iter()
        .map(|e| DailyLow {
            day: e.dt.format("%A").to_string(),
            temp: truncate(e.temp.min),
        })
        .collect())
}

/// Whole degrees, truncated toward zero
fn truncate(temp: f64) -> i32 {
    temp.trunc() as i32
}
