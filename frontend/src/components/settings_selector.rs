use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use super::country_select::CountrySelect;
use super::currency_select::CurrencySelect;
use super::language_select::LanguageSelect;
use super::modal::Modal;
use super::modal_button::ModalButton;
use crate::hooks::use_settings_dialog::use_settings_dialog;
use crate::services::config::AppConfig;

#[derive(Properties, PartialEq)]
pub struct SettingsSelectorProps {
    /// Overrides the config provided by the app context
    #[prop_or_default]
    pub config: Option<Rc<AppConfig>>,
}

/// Button plus settings dialog. Selector changes take effect only on Save.
#[function_component(SettingsSelector)]
pub fn settings_selector(props: &SettingsSelectorProps) -> Html {
    let context_config = use_context::<Rc<AppConfig>>();
    let config = props.config.clone().or(context_config).unwrap_or_default();
    let languages = config.settings.languages.clone();

    let dialog = use_settings_dialog(config);
    let view = dialog.view;
    let actions = dialog.actions;

    let on_cancel = {
        let cancel = actions.cancel.clone();
        Callback::from(move |_: MouseEvent| cancel.emit(()))
    };
    let on_save = {
        let save = actions.save.clone();
        Callback::from(move |_: MouseEvent| save.emit(()))
    };

    html! {
        <div class="settings-selector">
            <ModalButton label={view.button_label.clone()} on_activate={actions.open.clone()} />

            <Modal
                is_open={view.is_open}
                on_close={actions.close.clone()}
                class="settings-modal"
                labelled_by="settings-modal-title"
            >
                <h2 id="settings-modal-title" class="settings-modal-title">
                    {"Select your region, currency and language."}
                </h2>

                <div class="form-fields">
                    <CountrySelect
                        value={view.committed.country.clone()}
                        on_change={actions.change_country.clone()}
                    />
                    <CurrencySelect
                        value={view.committed.currency.clone()}
                        on_change={actions.change_currency.clone()}
                    />
                    <LanguageSelect
                        value={view.committed.language.clone()}
                        languages={languages}
                        on_change={actions.change_language.clone()}
                    />
                </div>

                <div class="button-wrapper">
                    <button type="button" class="btn cancel" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="button" class="btn save" onclick={on_save}>{"Save"}</button>
                </div>
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use shared::{IsoReferenceData, Settings, SettingsConfig};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlElement, HtmlImageElement, HtmlSelectElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let props = SettingsSelectorProps {
            config: Some(Rc::new(AppConfig::default())),
        };
        yew::Renderer::<SettingsSelector>::with_root_and_props(root.clone(), props).render();
        root
    }

    fn default_settings() -> Settings {
        SettingsConfig::default()
            .initial_settings(&IsoReferenceData)
            .unwrap()
    }

    // Lets Yew's scheduler run pending renders
    async fn settle() {
        TimeoutFuture::new(20).await;
    }

    fn find(root: &Element, selector: &str) -> Option<HtmlElement> {
        root.query_selector(selector)
            .unwrap()
            .map(|element| element.dyn_into::<HtmlElement>().unwrap())
    }

    fn click(root: &Element, selector: &str) {
        find(root, selector)
            .unwrap_or_else(|| panic!("no element for {}", selector))
            .click();
    }

    fn choose(root: &Element, selector: &str, value: &str) {
        let select: HtmlSelectElement = root
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        select.set_value(value);

        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("change", &init).unwrap();
        select.dispatch_event(&event).unwrap();
    }

    fn button_text(root: &Element) -> String {
        find(root, ".modal-button").unwrap().text_content().unwrap_or_default()
    }

    fn render_count(root: &Element) -> String {
        find(root, ".modal-button")
            .unwrap()
            .get_attribute("data-render-count")
            .unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_button_shows_configured_defaults() {
        let root = mount();
        settle().await;

        assert_eq!(button_text(&root), default_settings().button_label().text());
        assert!(button_text(&root).starts_with("United States of America - (USD - "));
        assert_eq!(render_count(&root), "1");
        assert!(find(&root, ".settings-modal").is_none());
    }

    #[wasm_bindgen_test]
    async fn test_default_currency_is_listed_once() {
        let root = mount();
        settle().await;

        click(&root, ".modal-button");
        settle().await;

        let options = root
            .query_selector_all(".currency-select option[value^='USD ']")
            .unwrap();
        assert_eq!(options.length(), 1);
        let select: HtmlSelectElement = root
            .query_selector(".currency-select select")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(select.value(), default_settings().currency);
    }

    #[wasm_bindgen_test]
    async fn test_cancel_discards_country_change() {
        let root = mount();
        settle().await;

        click(&root, ".modal-button");
        settle().await;
        assert!(find(&root, ".settings-modal").is_some());
        assert_eq!(render_count(&root), "1");

        click(&root, ".country-select-input");
        settle().await;
        click(&root, ".country-select-option[data-code='DE']");
        settle().await;
        let current = find(&root, ".country-select-input").unwrap().text_content().unwrap();
        assert!(current.contains("Germany"));
        assert_eq!(render_count(&root), "1");

        click(&root, ".btn.cancel");
        settle().await;

        assert!(find(&root, ".settings-modal").is_none());
        assert!(button_text(&root).starts_with("United States of America"));
        assert_eq!(render_count(&root), "1");
    }

    #[wasm_bindgen_test]
    async fn test_save_commits_currency_and_rerenders_once() {
        let root = mount();
        settle().await;

        click(&root, ".modal-button");
        settle().await;
        choose(&root, ".currency-select select", "EUR - Euro");
        settle().await;
        assert_eq!(render_count(&root), "1");
        assert!(button_text(&root).contains(&default_settings().currency));

        click(&root, ".btn.save");
        settle().await;

        assert!(find(&root, ".settings-modal").is_none());
        assert_eq!(
            button_text(&root),
            "United States of America - (EUR - Euro - English - English)"
        );
        assert_eq!(render_count(&root), "2");
    }

    #[wasm_bindgen_test]
    async fn test_unchanged_save_does_not_rerender_button() {
        let root = mount();
        settle().await;

        click(&root, ".modal-button");
        settle().await;
        click(&root, ".btn.save");
        settle().await;

        assert!(find(&root, ".settings-modal").is_none());
        assert_eq!(render_count(&root), "1");
    }

    #[wasm_bindgen_test]
    async fn test_overlay_click_closes_without_commit() {
        let root = mount();
        settle().await;

        click(&root, ".modal-button");
        settle().await;
        choose(&root, ".currency-select select", "EUR - Euro");
        click(&root, ".modal-overlay");
        settle().await;

        assert!(find(&root, ".settings-modal").is_none());
        assert!(button_text(&root).contains(&default_settings().currency));
        assert_eq!(render_count(&root), "1");

        // Reopening starts from the committed value again
        click(&root, ".modal-button");
        settle().await;
        let select: HtmlSelectElement = root
            .query_selector(".currency-select select")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(select.value(), default_settings().currency);
    }

    #[wasm_bindgen_test]
    async fn test_country_options_and_value_show_flags() {
        let root = mount();
        settle().await;

        click(&root, ".modal-button");
        settle().await;

        let current: HtmlImageElement = root
            .query_selector(".country-select-input img")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(
            current.get_attribute("src").unwrap(),
            "https://catamphetamine.gitlab.io/country-flag-icons/3x2/US.svg"
        );
        assert_eq!(current.alt(), "United States of America");

        click(&root, ".country-select-input");
        settle().await;
        let germany: HtmlImageElement = root
            .query_selector(".country-select-option[data-code='DE'] img")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(
            germany.get_attribute("src").unwrap(),
            "https://catamphetamine.gitlab.io/country-flag-icons/3x2/DE.svg"
        );
        assert_eq!(germany.alt(), "Germany");
    }
}
