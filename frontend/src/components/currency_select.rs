use shared::options::{currency_options, with_current};
use shared::settings::selection_or_empty;
use shared::IsoReferenceData;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CurrencySelectProps {
    pub value: String,
    pub on_change: Callback<String>,
}

#[function_component(CurrencySelect)]
pub fn currency_select(props: &CurrencySelectProps) -> Html {
    let options = use_memo(props.value.clone(), |value| {
        with_current(currency_options(&IsoReferenceData), value)
    });

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
        <label class="field currency-select">
            <span class="field-label">{"Currency"}</span>
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
