// Text entry for the newsletter box and the contact form
//
// A FormDraft is only the typed text and which field has the cursor. It
// never validates; that is the FormSpec's job once the draft is submitted.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::forms::{ContactInput, NewsletterInput};

/// What the caller should do after a key reached the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Key consumed (or ignored), nothing else to do
    None,
    /// Submit the draft
    Submit,
    /// Leave the form
    Cancel,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
    pub required: bool,
}

impl Field {
    fn new(label: &'static str, required: bool) -> Self {
        Self {
            label,
            value: String::new(),
            required,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormDraft {
    fields: Vec<Field>,
    focused: usize,
    /// A submission from this draft hasn't been acknowledged yet
    pub pending: bool,
}

impl FormDraft {
    pub fn newsletter() -> Self {
        Self::with_fields(vec![Field::new("Email", true)])
    }

    pub fn contact() -> Self {
        Self::with_fields(vec![
            Field::new("Name", true),
            Field::new("Email", true),
            Field::new("Phone", false),
            Field::new("Message", true),
        ])
    }

    fn with_fields(fields: Vec<Field>) -> Self {
        Self {
            fields,
            focused: 0,
            pending: false,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    pub fn insert(&mut self, c: char) {
        self.fields[self.focused].value.push(c);
    }

    pub fn backspace(&mut self) {
        self.fields[self.focused].value.pop();
    }

    /// Empty every field and put the cursor back on the first one
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focused = 0;
    }

    fn value(&self, idx: usize) -> String {
        self.fields
            .get(idx)
            .map(|f| f.value.clone())
            .unwrap_or_default()
    }

    pub fn newsletter_input(&self) -> NewsletterInput {
        NewsletterInput {
            email: self.value(0),
        }
    }

    pub fn contact_input(&self) -> ContactInput {
        let phone = self.value(2);
        ContactInput {
            name: self.value(0),
            email: self.value(1),
            phone: (!phone.trim().is_empty()).then_some(phone),
            message: self.value(3),
        }
    }

    /// Editing keys: type, delete, move between fields, submit or cancel.
    ///
    /// Enter on the last field submits; Ctrl+S submits from anywhere.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => FormAction::Submit,
            KeyCode::Char(c) if !ctrl => {
                self.insert(c);
                FormAction::None
            }
            KeyCode::Backspace => {
                self.backspace();
                FormAction::None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                FormAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                FormAction::None
            }
            KeyCode::Enter if self.focused + 1 == self.fields.len() => FormAction::Submit,
            KeyCode::Enter => {
                self.focus_next();
                FormAction::None
            }
            KeyCode::Esc => FormAction::Cancel,
            _ => FormAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(draft: &mut FormDraft, s: &str) {
        for c in s.chars() {
            draft.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut draft = FormDraft::contact();
        type_str(&mut draft, "Ana");
        draft.handle_key(press(KeyCode::Tab));
        type_str(&mut draft, "ana@example.com");
        draft.handle_key(press(KeyCode::Backspace));

        let input = draft.contact_input();
        assert_eq!(input.name, "Ana");
        assert_eq!(input.email, "ana@example.co");
        assert_eq!(input.phone, None);
    }

    #[test]
    fn test_enter_advances_then_submits_on_last_field() {
        let mut draft = FormDraft::contact();
        for _ in 0..3 {
            assert_eq!(draft.handle_key(press(KeyCode::Enter)), FormAction::None);
        }
        assert_eq!(draft.focused(), 3);
        assert_eq!(draft.handle_key(press(KeyCode::Enter)), FormAction::Submit);
    }

    #[test]
    fn test_ctrl_s_submits_and_esc_cancels() {
        let mut draft = FormDraft::newsletter();
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(draft.handle_key(ctrl_s), FormAction::Submit);
        assert!(draft.newsletter_input().email.is_empty());
        assert_eq!(draft.handle_key(press(KeyCode::Esc)), FormAction::Cancel);
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut draft = FormDraft::contact();
        draft.focus_prev();
        assert_eq!(draft.focused(), 3);
        draft.focus_next();
        assert_eq!(draft.focused(), 0);
    }

    #[test]
    fn test_clear_resets_values_and_focus() {
        let mut draft = FormDraft::contact();
        type_str(&mut draft, "x");
        draft.focus_next();
        type_str(&mut draft, "555");
        draft.clear();

        assert!(draft.fields().iter().all(|f| f.value.is_empty()));
        assert_eq!(draft.focused(), 0);
    }
}
