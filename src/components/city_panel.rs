use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, ScrollbarStyle, SelectList,
    SelectListBehavior, SelectListProps, SelectListStyle, SelectionStyle,
};

use super::Component;
use crate::action::Action;
use crate::i18n;

pub const PANEL_WIDTH: u16 = 32;

/// Side panel listing the configured cities
pub struct CityPanel {
    list: SelectList,
    modal: Modal,
    was_open: bool,
}

pub struct CityPanelProps<'a> {
    pub cities: &'a [String],
    pub selected: usize,
    pub is_focused: bool,
    pub on_select: fn(usize) -> Action,
}

impl Default for CityPanel {
    fn default() -> Self {
        Self {
            list: SelectList::new(),
            modal: Modal::new(),
            was_open: false,
        }
    }
}

impl CityPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.list = SelectList::new();
        }
        self.was_open = is_open;
    }

    fn items(cities: &[String]) -> Vec<Line<'static>> {
        cities.iter().map(|c| Line::from(c.clone())).collect()
    }
}

/// Left-docked area for the panel
pub fn panel_area(area: Rect) -> Rect {
    Rect {
        width: PANEL_WIDTH.min(area.width),
        ..area
    }
}

fn list_style() -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 1),
            bg: None,
            fg: None,
        },
        selection: SelectionStyle::default(),
        scrollbar: ScrollbarStyle::default(),
    }
}

impl Component<Action> for CityPanel {
    type Props<'a> = CityPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => vec![Action::PanelClose],
            KeyCode::Enter => props
                .cities
                .get(props.selected)
                .map(|city| Action::PanelPick(city.clone()))
                .into_iter()
                .collect(),
            KeyCode::Down | KeyCode::Up | KeyCode::Char('j') | KeyCode::Char('k') => {
                let items = Self::items(props.cities);
                let list_props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: props.selected,
                    is_focused: true,
                    style: list_style(),
                    behavior: SelectListBehavior::default(),
                    on_select: props.on_select,
                    render_item: &|item| item.clone(),
                };
                self.list
                    .handle_event(event, list_props)
                    .into_iter()
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let CityPanel { list, modal, .. } = self;
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(1), // Title
                Constraint::Min(1),    // Cities
            ])
            .split(content_area);

            let title = Line::from(vec![
                Span::styled(
                    format!(" {}", i18n::CITIES),
                    Style::default()
                        .fg(Color::Rgb(255, 140, 0))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  (Esc \u{2715})", Style::default().fg(Color::DarkGray)),
            ]);
            frame.render_widget(Paragraph::new(title), chunks[0]);

            let items = Self::items(props.cities);
            let list_props = SelectListProps {
                items: &items,
                count: items.len(),
                selected: props.selected,
                is_focused: props.is_focused,
                style: list_style(),
                behavior: SelectListBehavior::default(),
                on_select: props.on_select,
                render_item: &|item| item.clone(),
            };
            list.render(frame, chunks[1], list_props);
        };

        modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: panel_area(area),
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(Color::Rgb(25, 25, 35)),
                        padding: Padding::default(),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::PanelClose,
                render_content: &mut render_content,
            },
        );
    }
}
