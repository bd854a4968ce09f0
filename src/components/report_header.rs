use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::WeatherReport;

/// Big FIGlet city name over a "city, country" line
pub struct ReportHeader;

pub struct ReportHeaderProps<'a> {
    pub report: &'a WeatherReport,
}

/// Rows used below the FIGlet name: 1 spacer + 1 place line.
pub const HEADER_OVERHEAD: u16 = 2;

/// Gradient endpoints by temperature band
pub fn gradient_colors(celsius: f32) -> (ArtColor, ArtColor) {
    match celsius {
        t if t < 0.0 => (
            ArtColor::rgb(150, 200, 255), // Ice blue
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15.0 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25.0 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35.0 => (
            ArtColor::rgb(255, 180, 80), // Orange
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80), // Hot red
            ArtColor::rgb(255, 60, 60),
        ),
    }
}

impl Component<Action> for ReportHeader {
    type Props<'a> = ReportHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet name, font picked by artbox
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // City, country
        ])
        .split(area);

        let (start, end) = gradient_colors(props.report.temperature_celsius);
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(Fill::Linear(LinearGradient::horizontal(start, end)));

        frame.render_widget(ArtBox::new(&renderer, &props.report.city), chunks[0]);

        let place = Line::from(vec![Span::styled(
            format!("{}: {}", crate::i18n::CITIES, props.report.place()),
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(place), chunks[2]);
    }
}
