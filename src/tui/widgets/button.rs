//! Bordered push-button with variants and a busy state

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::tui::theme::Theme;

const SPINNER: &[&str] = &["\u{25d0}", "\u{25d3}", "\u{25d1}", "\u{25d2}"]; // ◐ ◓ ◑ ◒

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

/// A button drawn as a bordered, centered label
#[derive(Debug, Clone)]
pub struct Button<'a> {
    title: &'a str,
    hint: Option<&'a str>,
    variant: ButtonVariant,
    loading: bool,
    frame: u64,
}

impl<'a> Button<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            hint: None,
            variant: ButtonVariant::default(),
            loading: false,
            frame: 0,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Key that triggers the button, shown after the title
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Show a spinner instead of the title; `frame` drives the animation
    pub fn loading(mut self, loading: bool, frame: u64) -> Self {
        self.loading = loading;
        self.frame = frame;
        self
    }

    /// Text drawn inside the button
    pub fn label(&self) -> String {
        if self.loading {
            let spinner = SPINNER[(self.frame % SPINNER.len() as u64) as usize];
            return format!("{} Working...", spinner);
        }
        match self.hint {
            Some(hint) => format!("{}  [{}]", self.title, hint),
            None => self.title.to_string(),
        }
    }

    fn style(&self) -> Style {
        let style = match self.variant {
            ButtonVariant::Primary => Style::default().bg(Theme::ACCENT).fg(Color::White),
            ButtonVariant::Outline => Style::default().fg(Theme::INFO),
        };
        let style = style.add_modifier(Modifier::BOLD);
        if self.loading {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        let border_style = match self.variant {
            ButtonVariant::Outline => Style::default().fg(Theme::INFO),
            _ => style,
        };
        Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_hint() {
        assert_eq!(Button::new("Refresh").hint("r").label(), "Refresh  [r]");
    }

    #[test]
    fn test_loading_shows_spinner() {
        let label = Button::new("Refresh").loading(true, 1).label();
        assert!(label.starts_with('\u{25d3}'));
        assert!(!label.contains("Refresh"));
    }

    #[test]
    fn test_render_into_buffer() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        Button::new("Go").render(area, &mut buf);

        let middle: String = (0..20u16)
            .map(|x| buf[(x, 1u16)].symbol().to_string())
            .collect();
        assert!(middle.contains("Go"));
    }
}
