//! OpenWeatherMap icon ids ("01d", "10n", ...) mapped to terminal glyphs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    FewClouds,
    Clouds,
    ShowerRain,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl WeatherCondition {
    /// The day/night suffix is ignored.
    pub fn from_icon(icon_id: &str) -> Self {
        match icon_id.get(..2) {
            Some("01") => WeatherCondition::ClearSky,
            Some("02") => WeatherCondition::FewClouds,
            Some("03") | Some("04") => WeatherCondition::Clouds,
            Some("09") => WeatherCondition::ShowerRain,
            Some("10") => WeatherCondition::Rain,
            Some("11") => WeatherCondition::Thunderstorm,
            Some("13") => WeatherCondition::Snow,
            Some("50") => WeatherCondition::Mist,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "\u{2600}\u{fe0f}",
            WeatherCondition::FewClouds => "\u{26c5}",
            WeatherCondition::Clouds | WeatherCondition::Unknown => "\u{2601}\u{fe0f}",
            WeatherCondition::ShowerRain => "\u{1f326}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f327}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Mist => "\u{1f32b}\u{fe0f}",
        }
    }
}

pub fn weather_emoji(icon_id: &str) -> &'static str {
    WeatherCondition::from_icon(icon_id).emoji()
}
