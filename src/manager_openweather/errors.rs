use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenWeatherError {
    #[error("http request error: {0}")]
    Http(String),
    #[error("json document error: {0}")]
    Document(String),
    #[error("missing data: {0}")]
    MissingData(String),
}
impl From<ureq::Error> for OpenWeatherError {
    fn from(e: ureq::Error) -> OpenWeatherError {
        OpenWeatherError::Http(e.to_string())
    }
}
impl From<serde_json::Error> for OpenWeatherError {
    fn from(e: serde_json::Error) -> OpenWeatherError {
        OpenWeatherError::Document(e.to_string())
    }
}
