//! Modal form overlay

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::app::Modal;
use crate::tui::form::FormState;
use crate::tui::theme::Theme;
use crate::tui::widgets::input::{render_input, INPUT_HEIGHT};
use crate::tui::widgets::{centered_rect, Button, ButtonVariant};

/// Render the open form modal on top of the current screen
pub fn render_form_modal(frame: &mut Frame, modal: Modal, form: &FormState, theme: &Theme) {
    let fields = form.fields.len() as u16;
    // Borders + fields + button + help line
    let height = 2 + fields * INPUT_HEIGHT + 1 + 3 + 1;
    let area = centered_rect(56, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.surface())
        .title(Span::styled(
            format!(" {} ", modal.title()),
            theme.title().add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(" [Esc] Close ", theme.muted()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(INPUT_HEIGHT))
        .collect();
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in form.fields.iter().enumerate() {
        render_input(frame, chunks[i], field, i == form.focused, theme);
    }

    let n = form.fields.len();
    frame.render_widget(
        Button::new(modal.submit_label())
            .variant(ButtonVariant::Primary)
            .hint("Ctrl+S"),
        chunks[n + 1],
    );

    let help = Paragraph::new(" [Tab] Next field  [Enter] Next / Submit").style(theme.muted());
    frame.render_widget(help, chunks[n + 2]);
}
