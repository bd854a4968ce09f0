//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::config::{self, DEFAULT_BACKGROUND};

/// Display cap for the default-cities grid.
pub const MAX_DEFAULT_CARDS: usize = 8;

/// Normalized result of one successful lookup
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub temperature_celsius: f32,
    /// Already localized
    pub description: String,
    pub humidity_percent: u8,
    pub icon_id: String,
}

impl WeatherReport {
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature_celsius)
    }

    pub fn place(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }
}

/// On-demand search lifecycle. A report and an error are never shown together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
    Showing(WeatherReport),
    Failed(String),
}

impl SearchState {
    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            SearchState::Showing(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SearchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, SearchState::Searching)
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Search ---
    #[debug(section = "Search", label = "Input")]
    pub search_input: String,

    #[debug(section = "Search", label = "Result", debug_fmt)]
    pub search: SearchState,

    /// Id of the newest search; older replies are dropped
    #[debug(section = "Search", label = "Seq")]
    pub search_seq: u64,

    #[debug(skip)]
    pub input_focused: bool,

    // --- Default cities ---
    #[debug(section = "Defaults", label = "Reports", debug_fmt)]
    pub defaults: DataResource<Vec<WeatherReport>>,

    #[debug(section = "Defaults", label = "Cities", debug_fmt)]
    pub cities: Vec<String>,

    // --- City panel ---
    #[debug(section = "Panel", label = "Open")]
    pub panel_open: bool,

    #[debug(skip)]
    pub panel_selected: usize,

    #[debug(section = "Panel", label = "Background")]
    pub background: String,
}

impl AppState {
    /// Create state for the given configured city list
    pub fn new(cities: Vec<String>) -> Self {
        Self {
            search_input: String::new(),
            search: SearchState::Idle,
            search_seq: 0,
            input_focused: false,
            defaults: DataResource::Empty,
            cities,
            panel_open: false,
            panel_selected: 0,
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }

    /// Default-city reports that make it onto the grid
    pub fn visible_defaults(&self) -> &[WeatherReport] {
        let reports = self.defaults.data().map(Vec::as_slice).unwrap_or(&[]);
        &reports[..reports.len().min(MAX_DEFAULT_CARDS)]
    }

    pub fn banner_open(&self) -> bool {
        self.search.error().is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(config::default_cities())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(city: &str) -> WeatherReport {
        WeatherReport {
            city: city.into(),
            country: "TH".into(),
            temperature_celsius: 30.0,
            description: "ท้องฟ้าแจ่มใส".into(),
            humidity_percent: 70,
            icon_id: "01d".into(),
        }
    }

    #[test]
    fn test_visible_defaults_truncates() {
        let reports: Vec<_> = (0..12).map(|i| report(&format!("City {i}"))).collect();
        let state = AppState {
            defaults: DataResource::Loaded(reports),
            ..Default::default()
        };
        let visible = state.visible_defaults();
        assert_eq!(visible.len(), MAX_DEFAULT_CARDS);
        assert_eq!(visible[0].city, "City 0");
        assert_eq!(visible[7].city, "City 7");
    }

    #[test]
    fn test_visible_defaults_empty_while_loading() {
        let state = AppState {
            defaults: DataResource::Loading,
            ..Default::default()
        };
        assert!(state.visible_defaults().is_empty());
    }

    #[test]
    fn test_place_formatting() {
        assert_eq!(report("Bangkok").place(), "Bangkok, TH");
        let mut bare = report("Atlantis");
        bare.country.clear();
        assert_eq!(bare.place(), "Atlantis");
        assert_eq!(report("x").format_temperature(), "30.0°C");
    }
}
