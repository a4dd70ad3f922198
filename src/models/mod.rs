pub mod openweather_forecast;
pub mod openweather_onecall;
pub mod openweather_geo;
pub mod overnight;
