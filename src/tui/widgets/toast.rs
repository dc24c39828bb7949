//! Toast notification overlay

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::core::toast::{Toast, ToastPhase};
use crate::tui::theme::Theme;

/// Render the toast near the top of the screen, if one is visible
pub fn render(frame: &mut Frame, toast: Option<&Toast>, now: Instant) {
    let Some(toast) = toast else {
        return;
    };

    let area = frame.area();
    let width = (area.width.saturating_sub(8)).clamp(20, 60).min(area.width);

    // Message plus icon, wrapped inside the borders
    let inner_width = width.saturating_sub(4) as usize;
    let text_len = toast.message.chars().count() + 2;
    let text_lines = if inner_width > 0 {
        text_len.div_ceil(inner_width) as u16
    } else {
        1
    };
    let height = (text_lines + 2).min(area.height);

    // Slide in from the top edge, then sit just below the header
    let phase = toast.phase(now);
    let y = match phase {
        ToastPhase::Entering => 0,
        ToastPhase::Shown | ToastPhase::Leaving => 1.min(area.height.saturating_sub(height)),
    };

    let toast_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + y,
        width,
        height,
    };

    frame.render_widget(Clear, toast_area);

    let color = Theme::toast_color(toast.kind);
    let mut style = Style::default().bg(color).fg(Color::White);
    if phase == ToastPhase::Leaving {
        style = style.add_modifier(Modifier::DIM);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(
            format!(" {} ", toast.kind.label()),
            style.add_modifier(Modifier::BOLD),
        ));

    let line = Line::from(vec![
        Span::styled(format!("{} ", toast.kind.icon()), style.add_modifier(Modifier::BOLD)),
        Span::styled(toast.message.as_str(), style.add_modifier(Modifier::BOLD)),
    ]);

    let paragraph = Paragraph::new(line)
        .style(style)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left)
        .block(block);

    frame.render_widget(paragraph, toast_area);
}
