//! Runtime configuration for the OpenWeatherMap client

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Cities shown on startup and listed in the city panel.
pub const DEFAULT_CITIES: &[&str] = &[
    "Bangkok",
    "Chiang Mai",
    "Phuket",
    "Khon Kaen",
    "Pattaya",
    "Hat Yai",
    "Udon Thani",
    "Nakhon Ratchasima",
    "Krabi",
    "Ayutthaya",
];

/// Background shown before any city is picked from the panel.
pub const DEFAULT_BACKGROUND: &str = "../3.jpg";

const BACKGROUND_BASE: &str = "https://source.unsplash.com/1600x900/";

/// Client configuration, built once at startup and handed to the client.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherConfig {
    pub api_key: String,
    pub base_url: String,
    /// Unit system sent as `units=`; the app always asks for metric.
    pub units: &'static str,
}

impl WeatherConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            units: "metric",
        }
    }
}

pub fn default_cities() -> Vec<String> {
    DEFAULT_CITIES.iter().map(|c| c.to_string()).collect()
}

/// Cosmetic backdrop reference for a picked city. The city is encoded before
/// interpolation so it cannot break out of the query.
pub fn background_for(city: &str) -> String {
    format!("{}?{},weather", BACKGROUND_BASE, urlencoding::encode(city))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_encodes_city() {
        assert_eq!(
            background_for("Chiang Mai"),
            "https://source.unsplash.com/1600x900/?Chiang%20Mai,weather"
        );
        assert_eq!(
            background_for("a&b=c"),
            "https://source.unsplash.com/1600x900/?a%26b%3Dc,weather"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = WeatherConfig::new("key").with_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.units, "metric");
    }

    #[test]
    fn test_default_cities_more_than_grid() {
        assert!(default_cities().len() > 8);
    }
}
