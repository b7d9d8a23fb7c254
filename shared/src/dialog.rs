use thiserror::Error;

use crate::settings::{ButtonLabel, EditBuffer, Settings, SettingsEdit};

/// User intents the settings dialog reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    Activate,
    Edit(SettingsEdit),
    Save,
    Cancel,
    /// Dismissal from outside the button row (overlay click, Escape)
    Close,
}

impl DialogAction {
    pub fn name(&self) -> &'static str {
        match self {
            DialogAction::Activate => "activate",
            DialogAction::Edit(_) => "edit",
            DialogAction::Save => "save",
            DialogAction::Cancel => "cancel",
            DialogAction::Close => "close",
        }
    }
}

/// Outcome of a successfully applied action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    /// Activate while already open; the draft is kept
    Ignored,
    Edited,
    /// `changed` is false when the draft equalled the committed settings
    Saved { changed: bool },
    Discarded,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    #[error("cannot {action}: settings dialog is closed")]
    NotOpen { action: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DialogState {
    Closed,
    Open { buffer: EditBuffer },
}

/// Save/cancel transaction over the settings.
///
/// Committed settings change only through [`SettingsDialog::save`], which
/// replaces all three fields at once. Edits go to a draft that is seeded from
/// the committed settings every time the dialog opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDialog {
    committed: Settings,
    state: DialogState,
}

impl SettingsDialog {
    pub fn new(defaults: Settings) -> Self {
        Self {
            committed: defaults,
            state: DialogState::Closed,
        }
    }

    pub fn committed(&self) -> &Settings {
        &self.committed
    }

    pub fn button_label(&self) -> ButtonLabel {
        self.committed.button_label()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open { .. })
    }

    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        match &self.state {
            DialogState::Open { buffer } => Some(buffer),
            DialogState::Closed => None,
        }
    }

    pub fn activate(&mut self) -> Transition {
        if self.is_open() {
            return Transition::Ignored;
        }
        self.state = DialogState::Open {
            buffer: EditBuffer::seeded_from(&self.committed),
        };
        Transition::Opened
    }

    pub fn edit(&mut self, edit: SettingsEdit) -> Result<Transition, DialogError> {
        match &mut self.state {
            DialogState::Open { buffer } => {
                buffer.apply(edit);
                Ok(Transition::Edited)
            }
            DialogState::Closed => Err(DialogError::NotOpen { action: "edit" }),
        }
    }

    pub fn save(&mut self) -> Result<Transition, DialogError> {
        match std::mem::replace(&mut self.state, DialogState::Closed) {
            DialogState::Open { buffer } => {
                let draft = buffer.into_settings();
                let changed = draft != self.committed;
                self.committed = draft;
                Ok(Transition::Saved { changed })
            }
            DialogState::Closed => Err(DialogError::NotOpen { action: "save" }),
        }
    }

    pub fn cancel(&mut self) -> Result<Transition, DialogError> {
        self.discard("cancel")
    }

    pub fn close(&mut self) -> Result<Transition, DialogError> {
        self.discard("close")
    }

    pub fn apply(&mut self, action: DialogAction) -> Result<Transition, DialogError> {
        match action {
            DialogAction::Activate => Ok(self.activate()),
            DialogAction::Edit(edit) => self.edit(edit),
            DialogAction::Save => self.save(),
            DialogAction::Cancel => self.cancel(),
            DialogAction::Close => self.close(),
        }
    }

    fn discard(&mut self, action: &'static str) -> Result<Transition, DialogError> {
        if !self.is_open() {
            return Err(DialogError::NotOpen { action });
        }
        self.state = DialogState::Closed;
        Ok(Transition::Discarded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CountryValue;

    fn defaults() -> Settings {
        Settings {
            country: CountryValue::new("US", "United States of America"),
            currency: "USD - US Dollar".to_string(),
            language: "English - English".to_string(),
        }
    }

    fn germany() -> CountryValue {
        CountryValue::new("DE", "Germany")
    }

    #[test]
    fn test_starts_closed_with_defaults() {
        let dialog = SettingsDialog::new(defaults());
        assert!(!dialog.is_open());
        assert!(dialog.edit_buffer().is_none());
        assert_eq!(dialog.committed(), &defaults());
    }

    #[test]
    fn test_open_seeds_buffer_from_committed() {
        let mut dialog = SettingsDialog::new(defaults());
        assert_eq!(dialog.activate(), Transition::Opened);

        let buffer = dialog.edit_buffer().unwrap();
        assert_eq!(buffer.clone().into_settings(), defaults());
    }

    #[test]
    fn test_cancel_leaves_committed_untouched() {
        let mut dialog = SettingsDialog::new(defaults());
        let label_before = dialog.button_label();

        dialog.activate();
        dialog.edit(SettingsEdit::Country(germany())).unwrap();
        dialog.edit(SettingsEdit::Language("German - Deutsch".into())).unwrap();
        assert_eq!(dialog.committed(), &defaults());
        assert_eq!(dialog.cancel(), Ok(Transition::Discarded));

        assert!(!dialog.is_open());
        assert_eq!(dialog.committed(), &defaults());
        assert_eq!(dialog.button_label(), label_before);
    }

    #[test]
    fn test_close_behaves_like_cancel() {
        let mut dialog = SettingsDialog::new(defaults());
        dialog.activate();
        dialog.edit(SettingsEdit::Currency("EUR - Euro".into())).unwrap();
        assert_eq!(dialog.close(), Ok(Transition::Discarded));
        assert_eq!(dialog.committed(), &defaults());
    }

    #[test]
    fn test_save_replaces_all_fields_together() {
        let mut dialog = SettingsDialog::new(defaults());
        dialog.activate();
        dialog.edit(SettingsEdit::Country(germany())).unwrap();
        dialog.edit(SettingsEdit::Currency("EUR - Euro".into())).unwrap();
        dialog.edit(SettingsEdit::Language("German - Deutsch".into())).unwrap();

        let draft = dialog.edit_buffer().unwrap().clone().into_settings();
        assert_eq!(dialog.save(), Ok(Transition::Saved { changed: true }));

        assert!(!dialog.is_open());
        assert_eq!(dialog.committed(), &draft);
        assert_eq!(dialog.committed().country.code, "DE");
        assert_eq!(dialog.committed().currency, "EUR - Euro");
        assert_eq!(dialog.committed().language, "German - Deutsch");
    }

    #[test]
    fn test_save_currency_scenario() {
        let mut dialog = SettingsDialog::new(defaults());
        dialog.activate();
        dialog.edit(SettingsEdit::Currency("EUR - Euro".into())).unwrap();
        dialog.save().unwrap();

        assert_eq!(dialog.committed().currency, "EUR - Euro");
        assert_eq!(dialog.committed().country.code, "US");
        assert_eq!(dialog.committed().language, "English - English");
    }

    #[test]
    fn test_save_without_changes_reports_unchanged() {
        let mut dialog = SettingsDialog::new(defaults());
        dialog.activate();
        assert_eq!(dialog.save(), Ok(Transition::Saved { changed: false }));

        dialog.activate();
        dialog.edit(SettingsEdit::Currency("EUR - Euro".into())).unwrap();
        dialog.edit(SettingsEdit::Currency("USD - US Dollar".into())).unwrap();
        assert_eq!(dialog.save(), Ok(Transition::Saved { changed: false }));
    }

    #[test]
    fn test_reopen_after_cancel_starts_from_committed() {
        let mut dialog = SettingsDialog::new(defaults());
        dialog.activate();
        dialog.edit(SettingsEdit::Country(germany())).unwrap();
        dialog.cancel().unwrap();

        dialog.activate();
        assert_eq!(dialog.save(), Ok(Transition::Saved { changed: false }));
        assert_eq!(dialog.committed().country.code, "US");
    }

    #[test]
    fn test_activate_while_open_keeps_draft() {
        let mut dialog = SettingsDialog::new(defaults());
        dialog.activate();
        dialog.edit(SettingsEdit::Currency("EUR - Euro".into())).unwrap();

        assert_eq!(dialog.activate(), Transition::Ignored);
        assert_eq!(dialog.edit_buffer().unwrap().currency(), "EUR - Euro");
    }

    #[test]
    fn test_actions_while_closed_are_rejected() {
        let mut dialog = SettingsDialog::new(defaults());

        assert_eq!(
            dialog.edit(SettingsEdit::Currency("EUR - Euro".into())),
            Err(DialogError::NotOpen { action: "edit" })
        );
        assert_eq!(dialog.save(), Err(DialogError::NotOpen { action: "save" }));
        assert_eq!(dialog.cancel(), Err(DialogError::NotOpen { action: "cancel" }));
        assert_eq!(dialog.close(), Err(DialogError::NotOpen { action: "close" }));
        assert_eq!(dialog.committed(), &defaults());

        let message = dialog.save().unwrap_err().to_string();
        assert_eq!(message, "cannot save: settings dialog is closed");
    }

    #[test]
    fn test_button_label_only_changes_on_effective_save() {
        let mut dialog = SettingsDialog::new(defaults());
        let mut labels = vec![dialog.button_label()];

        let actions = vec![
            DialogAction::Activate,
            DialogAction::Edit(SettingsEdit::Country(germany())),
            DialogAction::Cancel,
            DialogAction::Activate,
            DialogAction::Close,
            DialogAction::Activate,
            DialogAction::Edit(SettingsEdit::Currency("EUR - Euro".into())),
            DialogAction::Save,
            DialogAction::Activate,
            DialogAction::Save,
        ];
        for action in actions {
            dialog.apply(action).unwrap();
            labels.push(dialog.button_label());
        }

        // A memoized button renders once initially and again whenever the label differs
        let renders = 1 + labels.windows(2).filter(|pair| pair[0] != pair[1]).count();
        assert_eq!(renders, 2);
        assert_eq!(dialog.button_label().currency, "EUR - Euro");
    }
}
