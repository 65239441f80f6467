// Modal system for TUI overlays
//
// Self-contained modal dialogs that map keys to actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.
//
// The entry detail overlay is not a Modal: it is driven by the App's
// DetailInspector, which decides when it is open.

use crossterm::event::{KeyCode, KeyEvent};

use super::form::{FormAction, FormDraft};

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Submit the newsletter draft
    Submit,
}

/// Available modal types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Newsletter sign-up box
    Newsletter,
}

impl Modal {
    /// Handle keyboard input, return action for caller to execute.
    ///
    /// The newsletter modal edits `draft` in place.
    pub fn handle_input(&self, key: KeyEvent, draft: &mut FormDraft) -> ModalAction {
        match self {
            Modal::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Newsletter => {
                // Single field: nothing to cycle
                if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
                    return ModalAction::None;
                }
                match draft.handle_key(key) {
                    FormAction::None => ModalAction::None,
                    FormAction::Submit => ModalAction::Submit,
                    FormAction::Cancel => ModalAction::Close,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_help_closes_on_its_keys_only() {
        let mut draft = FormDraft::newsletter();
        assert_eq!(
            Modal::Help.handle_input(press(KeyCode::Char('?')), &mut draft),
            ModalAction::Close
        );
        assert_eq!(
            Modal::Help.handle_input(press(KeyCode::Char('x')), &mut draft),
            ModalAction::None
        );
    }

    #[test]
    fn test_newsletter_types_into_draft_and_submits() {
        let mut draft = FormDraft::newsletter();
        for c in "q@x.io".chars() {
            assert_eq!(
                Modal::Newsletter.handle_input(press(KeyCode::Char(c)), &mut draft),
                ModalAction::None
            );
        }
        // 'q' is text here, not quit
        assert_eq!(draft.newsletter_input().email, "q@x.io");
        assert_eq!(
            Modal::Newsletter.handle_input(press(KeyCode::Enter), &mut draft),
            ModalAction::Submit
        );
        assert_eq!(
            Modal::Newsletter.handle_input(press(KeyCode::Esc), &mut draft),
            ModalAction::Close
        );
    }
}
