use shared::options::{country_options, filter_country_options};
use shared::{CountryOption, CountryValue, IsoReferenceData};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FlagIconProps {
    pub country: CountryValue,
}

/// Flag image with the country name as alt text, so a missing icon still
/// reads correctly.
#[function_component(FlagIcon)]
pub fn flag_icon(props: &FlagIconProps) -> Html {
    if props.country.icon.is_empty() {
        return html! {};
    }

    html! {
        <img
            class="flag-icon"
            src={props.country.icon.clone()}
            alt={props.country.name.clone()}
            width="24"
            height="16"
            loading="lazy"
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct CountrySelectOptionProps {
    pub option: CountryOption,
    pub is_selected: bool,
    pub on_select: Callback<CountryValue>,
}

#[function_component(CountrySelectOption)]
pub fn country_select_option(props: &CountrySelectOptionProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let value = props.option.value.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(value.clone()))
    };

    html! {
        <li
            class={classes!("country-select-option", props.is_selected.then(|| "selected"))}
            role="option"
            aria-selected={props.is_selected.to_string()}
            data-code={props.option.value.code.clone()}
            {onclick}
        >
            <FlagIcon country={props.option.value.clone()} />
            <span class="country-name">{ &props.option.label }</span>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountrySelectProps {
    pub value: CountryValue,
    pub on_change: Callback<CountryValue>,
}

/// Searchable country dropdown with flags on the current value and on every
/// option.
#[function_component(CountrySelect)]
pub fn country_select(props: &CountrySelectProps) -> Html {
    let options = use_memo((), |_| country_options(&IsoReferenceData));
    let selected = {
        let value = props.value.clone();
        use_state(move || value)
    };
    let is_open = use_state(|| false);
    let query = use_state(String::new);

    let toggle_menu = {
        let is_open = is_open.clone();
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_open {
                query.set(String::new());
            }
            is_open.set(!*is_open);
        })
    };

    let on_backdrop_click = {
        let is_open = is_open.clone();
        let query = query.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            query.set(String::new());
            is_open.set(false);
        })
    };

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_select = {
        let selected = selected.clone();
        let is_open = is_open.clone();
        let query = query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |country: CountryValue| {
            selected.set(country.clone());
            query.set(String::new());
            is_open.set(false);
            on_change.emit(country);
        })
    };

    let visible = filter_country_options(&options, &query);

    html! {
        <div class="field country-select">
            <span class="field-label" id="country-select-label">{"Country"}</span>
            <div class="country-select-control">
                <button
                    type="button"
                    class="country-select-input"
                    aria-haspopup="listbox"
                    aria-labelledby="country-select-label"
                    aria-expanded={(*is_open).to_string()}
                    onclick={toggle_menu}
                >
                    <FlagIcon country={(*selected).clone()} />
                    <span class="country-name">{ &selected.name }</span>
                    <span class="select-chevron" aria-hidden="true">{"▾"}</span>
                </button>

                if *is_open {
                    <>
                        <div class="select-backdrop" onclick={on_backdrop_click}></div>
                        <div class="country-select-menu">
                            <input
                                type="text"
                                class="country-select-search"
                                placeholder="Search countries"
                                value={(*query).clone()}
                                oninput={on_query_input}
                            />
                            <ul class="country-select-options" role="listbox">
                                if visible.is_empty() {
                                    <li class="country-select-empty">{"No countries found"}</li>
                                } else {
                                    { for visible.into_iter().map(|option| html! {
                                        <CountrySelectOption
                                            key={option.value.code.clone()}
                                            option={option.clone()}
                                            is_selected={option.value == *selected}
                                            on_select={on_select.clone()}
                                        />
                                    }) }
                                }
                            </ul>
                        </div>
                    </>
                }
            </div>
        </div>
    }
}
