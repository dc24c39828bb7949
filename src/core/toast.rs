//! Single-slot toast notifications
//!
//! At most one toast is visible. Showing a new one replaces the old one and
//! restarts its timer; a toast disappears on its own once its duration has
//! elapsed.

use std::time::{Duration, Instant};

/// Default time a toast stays on screen
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);
/// Length of the entrance transition
pub const ENTER_TRANSITION: Duration = Duration::from_millis(150);
/// Length of the exit transition at the end of the duration
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// Short label shown in the toast title
    pub fn label(&self) -> &'static str {
        match self {
            ToastKind::Success => "SUCCESS",
            ToastKind::Error => "ERROR",
            ToastKind::Warning => "WARNING",
            ToastKind::Info => "INFO",
        }
    }

    /// Icon drawn before the message
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
        }
    }
}

/// Transition phase of a visible toast, used for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

/// A visible toast notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    /// When the toast appeared
    pub shown_at: Instant,
    /// How long the toast stays visible
    pub duration: Duration,
}

impl Toast {
    /// Whether the toast has outlived its duration at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }

    /// Transition phase at `now`
    pub fn phase(&self, now: Instant) -> ToastPhase {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed < ENTER_TRANSITION {
            ToastPhase::Entering
        } else if elapsed + EXIT_TRANSITION >= self.duration {
            ToastPhase::Leaving
        } else {
            ToastPhase::Shown
        }
    }
}

/// The single toast slot
#[derive(Debug, Clone)]
pub struct ToastSlot {
    current: Option<Toast>,
    duration: Duration,
}

impl ToastSlot {
    /// Empty slot whose toasts last `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Show a toast, replacing any visible one
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        let message = message.into();
        tracing::debug!(?kind, %message, "toast shown");
        self.current = Some(Toast {
            message,
            kind,
            shown_at: now,
            duration: self.duration,
        });
    }

    /// Dismiss the visible toast early
    pub fn hide(&mut self) {
        self.current = None;
    }

    /// Drop the toast if its duration has elapsed. Returns true when a
    /// toast was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

impl Default for ToastSlot {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_auto_hides_after_duration() {
        let start = Instant::now();
        let mut slot = ToastSlot::new(Duration::from_millis(3000));
        slot.show("Saved", ToastKind::Success, start);

        assert!(!slot.expire(start + Duration::from_millis(2999)));
        assert!(slot.is_visible());

        assert!(slot.expire(start + Duration::from_millis(3000)));
        assert!(!slot.is_visible());
    }

    #[test]
    fn test_new_toast_replaces_and_restarts() {
        let start = Instant::now();
        let mut slot = ToastSlot::new(Duration::from_millis(1000));
        slot.show("first", ToastKind::Info, start);
        slot.show("second", ToastKind::Error, start + Duration::from_millis(800));

        let toast = slot.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);

        // The first toast's deadline no longer applies
        assert!(!slot.expire(start + Duration::from_millis(1200)));
        assert!(slot.expire(start + Duration::from_millis(1800)));
    }

    #[test]
    fn test_hide_dismisses_early() {
        let mut slot = ToastSlot::default();
        slot.show("bye", ToastKind::Warning, Instant::now());
        slot.hide();
        assert!(slot.current().is_none());
        assert!(!slot.expire(Instant::now()));
    }

    #[test]
    fn test_phases() {
        let start = Instant::now();
        let toast = Toast {
            message: "x".into(),
            kind: ToastKind::Info,
            shown_at: start,
            duration: Duration::from_millis(3000),
        };
        assert_eq!(toast.phase(start), ToastPhase::Entering);
        assert_eq!(
            toast.phase(start + Duration::from_millis(1000)),
            ToastPhase::Shown
        );
        assert_eq!(
            toast.phase(start + Duration::from_millis(2800)),
            ToastPhase::Leaving
        );
    }
}
