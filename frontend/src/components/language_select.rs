use shared::options::{language_options, with_current};
use shared::settings::selection_or_empty;
use shared::IsoReferenceData;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LanguageSelectProps {
    pub value: String,
    /// ISO 639-1 codes to offer
    pub languages: Vec<String>,
    pub on_change: Callback<String>,
}

#[function_component(LanguageSelect)]
pub fn language_select(props: &LanguageSelectProps) -> Html {
    let options = use_memo(
        (props.languages.clone(), props.value.clone()),
        |(languages, value)| with_current(language_options(&IsoReferenceData, languages), value),
    );

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e
                .target_dyn_into::<HtmlSelectElement>()
                .map(|select| select.value());
            on_change.emit(selection_or_empty(value));
        })
    };

    html! {
        <label class="field language-select">
            <span class="field-label">{"Language"}</span>
            <select class="field-select" {onchange}>
                { for options.iter().map(|option| html! {
                    <option
                        key={option.value.clone()}
                        value={option.value.clone()}
                        selected={option.value == props.value}
                    >
                        { &option.label }
                    </option>
                }) }
            </select>
        </label>
    }
}
