use std::rc::Rc;

use shared::{
    ButtonLabel, CountryValue, DialogAction, IsoReferenceData, Settings, SettingsDialog,
    SettingsEdit, Transition,
};
use yew::prelude::*;

use crate::services::config::AppConfig;
use crate::services::logging::Logger;

const COMPONENT: &str = "settings_dialog";

/// Snapshot of the dialog for the current render
pub struct SettingsDialogView {
    pub is_open: bool,
    pub committed: Settings,
    /// Changes identity only when one of the three displayed values changes
    pub button_label: Rc<ButtonLabel>,
}

/// All callbacks are identity-stable for the lifetime of the component
#[derive(Clone, PartialEq)]
pub struct SettingsDialogActions {
    pub open: Callback<()>,
    pub save: Callback<()>,
    pub cancel: Callback<()>,
    pub close: Callback<()>,
    pub change_country: Callback<CountryValue>,
    pub change_currency: Callback<String>,
    pub change_language: Callback<String>,
}

pub struct UseSettingsDialogResult {
    pub view: SettingsDialogView,
    pub actions: SettingsDialogActions,
}

/// Owns the save/cancel transaction behind the settings dialog.
///
/// The [`SettingsDialog`] lives in a mutable ref so that edits never
/// re-render anything. Only transitions that change what is on screen
/// (open, save, cancel, close) force an update.
#[hook]
pub fn use_settings_dialog(config: Rc<AppConfig>) -> UseSettingsDialogResult {
    let dialog = use_mut_ref(move || SettingsDialog::new(config.initial_settings(&IsoReferenceData)));
    let force_update = use_force_update();

    let dispatch = {
        let dialog = dialog.clone();
        use_callback((), move |action: DialogAction, _| {
            let name = action.name();
            let result = dialog.borrow_mut().apply(action);

            match result {
                Ok(Transition::Edited) => {}
                Ok(Transition::Ignored) => {
                    Logger::debug_with_component(COMPONENT, "already open, activate ignored");
                }
                Ok(Transition::Saved { changed }) => {
                    Logger::info_with_component(
                        COMPONENT,
                        &format!("saved (changed: {})", changed),
                    );
                    force_update.force_update();
                }
                Ok(transition) => {
                    Logger::info_with_component(COMPONENT, &format!("{} -> {:?}", name, transition));
                    force_update.force_update();
                }
                Err(e) => {
                    Logger::warn_with_component(COMPONENT, &e.to_string());
                }
            }
        })
    };

    let action_callback = |action: DialogAction| {
        let dispatch = dispatch.clone();
        move |_: (), _: &()| dispatch.emit(action.clone())
    };
    let open = use_callback((), action_callback(DialogAction::Activate));
    let save = use_callback((), action_callback(DialogAction::Save));
    let cancel = use_callback((), action_callback(DialogAction::Cancel));
    let close = use_callback((), action_callback(DialogAction::Close));

    let change_country = {
        let dispatch = dispatch.clone();
        use_callback((), move |country: CountryValue, _| {
            dispatch.emit(DialogAction::Edit(SettingsEdit::Country(country)));
        })
    };
    let change_currency = {
        let dispatch = dispatch.clone();
        use_callback((), move |currency: String, _| {
            dispatch.emit(DialogAction::Edit(SettingsEdit::Currency(currency)));
        })
    };
    let change_language = {
        let dispatch = dispatch.clone();
        use_callback((), move |language: String, _| {
            dispatch.emit(DialogAction::Edit(SettingsEdit::Language(language)));
        })
    };

    let (is_open, committed, label) = {
        let dialog = dialog.borrow();
        (dialog.is_open(), dialog.committed().clone(), dialog.button_label())
    };
    let button_label = use_memo(label, |label| label.clone());

    UseSettingsDialogResult {
        view: SettingsDialogView {
            is_open,
            committed,
            button_label,
        },
        actions: SettingsDialogActions {
            open,
            save,
            cancel,
            close,
            change_country,
            change_currency,
            change_language,
        },
    }
}
