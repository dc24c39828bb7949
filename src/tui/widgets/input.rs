//! Labelled text input

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::form::FormField;
use crate::tui::theme::Theme;

/// Rows an input occupies
pub const INPUT_HEIGHT: u16 = 3;

/// Render one form field; the focused field gets an accent border and a cursor
pub fn render_input(frame: &mut Frame, area: Rect, field: &FormField, focused: bool, theme: &Theme) {
    let palette = theme.palette();
    let border_color = if focused { Theme::INFO } else { palette.border };
    let icon_color = if focused {
        Theme::INFO
    } else {
        palette.secondary_text
    };

    let mut spans = vec![Span::styled(
        format!("{} ", field.icon),
        Style::default().fg(icon_color),
    )];
    if field.value.is_empty() && !focused {
        spans.push(Span::styled(
            field.placeholder,
            Style::default().fg(palette.secondary_text),
        ));
    } else {
        spans.push(Span::styled(
            field.value.as_str(),
            Style::default().fg(palette.text),
        ));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Theme::INFO)));
    }

    let label_style = if focused {
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    let input = Paragraph::new(Line::from(spans))
        .style(theme.surface())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(Span::styled(format!(" {} ", field.label), label_style)),
        );
    frame.render_widget(input, area);
}
