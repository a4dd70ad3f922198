use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ZipLookup {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}
