use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct DailyTemp {
    pub min: f64,
}

#[derive(Deserialize, Debug)]
pub struct DailyEntry {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub temp: DailyTemp,
}

#[derive(Deserialize, Debug)]
pub struct OneCall {
    pub daily: Vec<DailyEntry>,
}
