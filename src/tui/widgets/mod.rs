//! Reusable presentational widgets
//!
//! Stateless render helpers; none of them own application state.

pub mod button;
pub mod card;
pub mod input;
pub mod modal;
pub mod toast;

pub use button::{Button, ButtonVariant};
pub use card::StatCard;

use ratatui::layout::Rect;

/// Rectangle of at most `width` x `height` centered inside `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect(200, 50, area), area);
    }
}
