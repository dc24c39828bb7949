//! Stat card: icon, big value and a caption

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::tui::theme::Theme;

#[derive(Debug, Clone)]
pub struct StatCard<'a> {
    icon: &'a str,
    value: String,
    label: &'a str,
    accent: Color,
    theme: Theme,
}

impl<'a> StatCard<'a> {
    pub fn new(icon: &'a str, value: impl Into<String>, label: &'a str, theme: Theme) -> Self {
        Self {
            icon,
            value: value.into(),
            label,
            accent: Theme::ACCENT,
            theme,
        }
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.theme.palette();
        let lines = vec![
            Line::from(Span::styled(self.icon, Style::default().fg(self.accent))),
            Line::from(Span::styled(
                self.value,
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.label,
                Style::default().fg(palette.secondary_text),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(self.theme.surface())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border()),
            )
            .render(area, buf);
    }
}
