use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug)]
pub struct City {
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct MainValues {
    pub temp_min: f64,
}

/// Just the sample time, read from every scanned entry
#[derive(Deserialize, Debug)]
pub struct SampleTime {
    pub dt_txt: String,
}

#[derive(Deserialize, Debug)]
pub struct ForecastEntry {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub dt_txt: String,
    pub main: MainValues,
}

/// The 5 day / 3 hour forecast. Entries are kept raw, they are only
/// deserialized once selected
#[derive(Deserialize, Debug)]
pub struct Forecast {
    pub city: City,
    pub list: Vec<Value>,
}
