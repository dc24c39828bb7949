//! Modal form state
//!
//! Field buffers and focus for the "Add Workout" and "Schedule Workout"
//! modals. Validation happens in the store when the form is submitted.

use crate::core::models::{ScheduleInput, WorkoutInput};

/// Which characters a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// ASCII digits only
    Numeric,
}

/// A single labelled input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub icon: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    fn new(label: &'static str, placeholder: &'static str, icon: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            placeholder,
            icon,
            kind,
            value: String::new(),
        }
    }

    /// Append a character if the field accepts it
    pub fn push(&mut self, c: char) -> bool {
        let accepted = match self.kind {
            FieldKind::Text => !c.is_control(),
            FieldKind::Numeric => c.is_ascii_digit(),
        };
        if accepted {
            self.value.push(c);
        }
        accepted
    }
}

/// Ordered fields plus the focused index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl FormState {
    /// "Add New Workout" form
    pub fn workout() -> Self {
        Self {
            fields: vec![
                FormField::new("Workout Name", "e.g., Morning Run", "🏋", FieldKind::Text),
                FormField::new("Duration (minutes)", "e.g., 30", "⏱", FieldKind::Numeric),
                FormField::new("Calories Burned", "e.g., 250", "🔥", FieldKind::Numeric),
            ],
            focused: 0,
        }
    }

    /// "Schedule Workout" form
    pub fn schedule() -> Self {
        Self {
            fields: vec![
                FormField::new("Workout Name", "e.g., Morning Run", "🏋", FieldKind::Text),
                FormField::new("Day", "e.g., Monday", "📅", FieldKind::Text),
                FormField::new("Time", "e.g., 07:00 AM", "⏱", FieldKind::Text),
            ],
            focused: 0,
        }
    }

    /// Type a character into the focused field
    pub fn input(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.push(c);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused = self
                .focused
                .checked_sub(1)
                .unwrap_or(self.fields.len() - 1);
        }
    }

    pub fn is_last_field(&self) -> bool {
        self.focused + 1 >= self.fields.len()
    }

    /// Empty every field and focus the first one
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focused = 0;
    }

    fn value(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|f| f.value.clone())
            .unwrap_or_default()
    }

    pub fn to_workout_input(&self) -> WorkoutInput {
        WorkoutInput::new(self.value(0), self.value(1), self.value(2))
    }

    pub fn to_schedule_input(&self) -> ScheduleInput {
        ScheduleInput::new(self.value(0), self.value(1), self.value(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut FormState, text: &str) {
        for c in text.chars() {
            form.input(c);
        }
    }

    #[test]
    fn test_numeric_field_filters_input() {
        let mut form = FormState::workout();
        form.focus_next();
        type_str(&mut form, "2a0 ");
        assert_eq!(form.fields[1].value, "20");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = FormState::schedule();
        form.focus_previous();
        assert_eq!(form.focused, 2);
        assert!(form.is_last_field());
        form.focus_next();
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn test_to_workout_input_and_clear() {
        let mut form = FormState::workout();
        type_str(&mut form, "Cycling");
        form.focus_next();
        type_str(&mut form, "20");
        form.focus_next();
        type_str(&mut form, "180");
        form.backspace();
        type_str(&mut form, "0");

        assert_eq!(
            form.to_workout_input(),
            WorkoutInput::new("Cycling", "20", "180")
        );

        form.clear();
        assert_eq!(form.focused, 0);
        assert!(form.fields.iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn test_schedule_form_accepts_free_text() {
        let mut form = FormState::schedule();
        form.focused = 2;
        type_str(&mut form, "07:00 AM");
        assert_eq!(form.to_schedule_input().time, "07:00 AM");
    }
}
