use std::rc::Rc;

use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::settings_selector::SettingsSelector;
use services::config::AppConfig;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<AppConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<AppConfig>> context={props.config.clone()}>
            <main class="app">
                <SettingsSelector />
            </main>
        </ContextProvider<Rc<AppConfig>>>
    }
}

fn main() {
    let config = AppConfig::load();
    Logger::set_level(config.log_level);
    Logger::info_with_component(
        "app",
        &format!(
            "starting with defaults {} / {} / {}",
            config.settings.default_country,
            config.settings.default_currency,
            config.settings.default_language
        ),
    );

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
