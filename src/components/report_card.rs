use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::{Component, ReportHeader, ReportHeaderProps};
use super::report_header::HEADER_OVERHEAD;
use crate::action::Action;
use crate::i18n;
use crate::icons;
use crate::state::WeatherReport;

/// Max rows given to the FIGlet name on the featured card.
const HEADER_CAP: u16 = 6 + HEADER_OVERHEAD;

/// Rows a compact card needs: border + 5 lines + border.
pub const COMPACT_CARD_HEIGHT: u16 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSize {
    /// Search result: FIGlet city name, details below
    Featured,
    /// One cell of the default-cities grid
    Compact,
}

pub struct ReportCard;

pub struct ReportCardProps<'a> {
    pub report: &'a WeatherReport,
    pub size: CardSize,
}

fn detail_lines(report: &WeatherReport) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    vec![
        Line::from(vec![
            Span::styled(format!("{}: ", i18n::TEMPERATURE), label),
            Span::styled(report.format_temperature(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", i18n::HUMIDITY), label),
            Span::raw(format!("{}%", report.humidity_percent)),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", i18n::CONDITION), label),
            Span::styled(report.description.clone(), Style::default().fg(Color::Gray)),
        ]),
    ]
}

impl Component<Action> for ReportCard {
    type Props<'a> = ReportCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match props.size {
            CardSize::Featured => render_featured(frame, area, props.report),
            CardSize::Compact => render_compact(frame, area, props.report),
        }
    }
}

fn render_featured(frame: &mut Frame, area: Rect, report: &WeatherReport) {
    let chunks = Layout::vertical([
        Constraint::Max(HEADER_CAP),
        Constraint::Length(1), // Icon
        Constraint::Length(3), // Details
    ])
    .flex(Flex::Center)
    .split(area);

    let mut header = ReportHeader;
    header.render(frame, chunks[0], ReportHeaderProps { report });

    let emoji = Line::from(icons::weather_emoji(&report.icon_id)).centered();
    frame.render_widget(Paragraph::new(emoji), chunks[1]);

    let details: Vec<Line> = detail_lines(report)
        .into_iter()
        .map(|line| line.centered())
        .collect();
    frame.render_widget(Paragraph::new(details), chunks[2]);
}

fn render_compact(frame: &mut Frame, area: Rect, report: &WeatherReport) {
    let block = Block::bordered().border_style(Style::default().fg(Color::Rgb(120, 70, 20)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(icons::weather_emoji(&report.icon_id)).centered(),
        Line::from(Span::raw(report.place()).bold()).centered(),
    ];
    lines.extend(detail_lines(report));
    frame.render_widget(Paragraph::new(lines), inner);
}
