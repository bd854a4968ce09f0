use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::report_card::COMPACT_CARD_HEIGHT;
use super::{CardSize, Component, ReportCard, ReportCardProps};
use crate::action::Action;
use crate::i18n;
use crate::state::{AppState, SearchState, WeatherReport};

const GRID_COLUMNS: usize = 4;
const FEATURED_HEIGHT: u16 = 12;

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Everything below the search bar: searched report, default grid, status bar
#[derive(Default)]
pub struct WeatherDisplay;

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('/') => Some(Action::SearchFocus),
                KeyCode::Char('s') | KeyCode::Enter => {
                    Some(Action::SearchSubmit(props.state.search_input.clone()))
                }
                KeyCode::Char('c') => Some(Action::PanelOpen),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let state = props.state;
        let featured_height = match &state.search {
            SearchState::Showing(_) => FEATURED_HEIGHT,
            SearchState::Searching => 1,
            SearchState::Idle | SearchState::Failed(_) => 0,
        };

        let chunks = Layout::vertical([
            Constraint::Length(featured_height), // Searched report
            Constraint::Length(1),               // Heading
            Constraint::Min(1),                  // Default cities grid
            Constraint::Length(1),               // Help bar
        ])
        .split(area);

        match &state.search {
            SearchState::Showing(report) => {
                let mut card = ReportCard;
                card.render(
                    frame,
                    chunks[0],
                    ReportCardProps {
                        report,
                        size: CardSize::Featured,
                    },
                );
            }
            SearchState::Searching => render_dim_line(frame, chunks[0], i18n::LOADING),
            SearchState::Idle | SearchState::Failed(_) => {}
        }

        let heading = Line::from(Span::styled(
            i18n::DEFAULTS_HEADING,
            Style::default()
                .fg(Color::Rgb(255, 190, 120))
                .add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(heading), chunks[1]);

        if state.defaults.is_loading() {
            render_dim_line(frame, chunks[2], i18n::LOADING);
        } else {
            render_grid(frame, chunks[2], state.visible_defaults());
        }

        render_status_bar(frame, chunks[3], state);
    }
}

fn render_dim_line(frame: &mut Frame, area: Rect, text: &str) {
    let line = Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
    .centered();
    frame.render_widget(Paragraph::new(line), area);
}

/// Rows of `GRID_COLUMNS` cards; rows that do not fit are cut off.
fn render_grid(frame: &mut Frame, area: Rect, reports: &[WeatherReport]) {
    let rows = reports.len().div_ceil(GRID_COLUMNS);
    if rows == 0 {
        return;
    }

    let row_areas = Layout::vertical(vec![Constraint::Length(COMPACT_CARD_HEIGHT); rows]).split(area);
    let mut card = ReportCard;
    for (row_area, row) in row_areas.iter().zip(reports.chunks(GRID_COLUMNS)) {
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);
        for (cell, report) in cells.iter().zip(row) {
            card.render(
                frame,
                *cell,
                ReportCardProps {
                    report,
                    size: CardSize::Compact,
                },
            );
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let backdrop = Span::styled(
        state.background.as_str(),
        Style::default().fg(Color::DarkGray),
    );
    let right = [StatusBarItem::span(backdrop)];

    let mut status_bar = StatusBar::new();
    <StatusBar as Component<Action>>::render(
        &mut status_bar,
        frame,
        area,
        StatusBarProps {
            left: StatusBarSection::empty(),
            center: StatusBarSection::hints(&[
                StatusBarHint::new("/", "search"),
                StatusBarHint::new("c", "cities"),
                StatusBarHint::new("q", "quit"),
            ]),
            right: StatusBarSection::items(&right),
            style: StatusBarStyle::default(),
            is_focused: false,
        },
    );
}
