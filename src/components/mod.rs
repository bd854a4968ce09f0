pub mod city_panel;
pub mod error_banner;
pub mod report_card;
pub mod report_header;
pub mod search_bar;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use city_panel::{CityPanel, CityPanelProps, panel_area};
pub use error_banner::{ERROR_ICON, ErrorBanner, ErrorBannerProps};
pub use report_card::{CardSize, ReportCard, ReportCardProps};
pub use report_header::{ReportHeader, ReportHeaderProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};
