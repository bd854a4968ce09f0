use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, centered_rect,
};

use super::Component;
use crate::action::Action;

pub const ERROR_ICON: &str = "\u{2715}";

/// Modal "not found" banner. Any of Enter, Esc or `x` dismisses it.
pub struct ErrorBanner {
    modal: Modal,
}

pub struct ErrorBannerProps<'a> {
    pub message: &'a str,
    pub is_focused: bool,
}

impl Default for ErrorBanner {
    fn default() -> Self {
        Self { modal: Modal::new() }
    }
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for ErrorBanner {
    type Props<'a> = ErrorBannerProps<'a>;

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
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('x') => {
                    Some(Action::SearchDismissError)
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let message = props.message;
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(1), // Message
                Constraint::Length(1), // Blank
                Constraint::Length(1), // Hint
            ])
            .flex(Flex::Center)
            .split(content_area);

            frame.render_widget(
                Paragraph::new(
                    Line::from(vec![
                        Span::styled(
                            format!("{ERROR_ICON}  "),
                            Style::default().fg(Color::Red).bold(),
                        ),
                        Span::styled(message.to_string(), Style::default().fg(Color::Red).bold()),
                    ])
                    .centered(),
                ),
                chunks[0],
            );
            frame.render_widget(
                Paragraph::new(
                    Line::from(vec![
                        Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
                        Span::styled(" / ", Style::default().fg(Color::DarkGray)),
                        Span::styled("Esc", Style::default().fg(Color::Cyan).bold()),
                        Span::styled(" to dismiss", Style::default().fg(Color::DarkGray)),
                    ])
                    .centered(),
                ),
                chunks[2],
            );
        };

        self.modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: centered_rect(50, 7, area),
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(Color::Rgb(60, 20, 20)),
                        padding: Padding::default(),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::SearchDismissError,
                render_content: &mut render_content,
            },
        );
    }
}
