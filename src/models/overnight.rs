/// A resolved place to fetch forecasts for
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
}

/// Lowest temperature expected the night of `day`, in whole degrees Fahrenheit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyLow {
    pub day: String,
    pub temp: i32,
}
