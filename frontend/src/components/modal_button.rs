use std::rc::Rc;

use shared::ButtonLabel;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::logging::{LogLevel, Logger};

/// Level of the render counter log, visible under the fallback level
pub const RENDER_COUNT_LEVEL: LogLevel = LogLevel::Info;

#[derive(Properties, PartialEq)]
pub struct ModalButtonProps {
    pub label: Rc<ButtonLabel>,
    pub on_activate: Callback<()>,
}

/// Shows the committed settings and opens the dialog.
///
/// Yew skips rendering while the props compare equal, so this renders only
/// when the label text changes. The render counter makes that observable.
#[function_component(ModalButton)]
pub fn modal_button(props: &ModalButtonProps) -> Html {
    let render_count = use_mut_ref(|| 0u32);
    let count = {
        let mut render_count = render_count.borrow_mut();
        *render_count += 1;
        *render_count
    };
    Logger::log_with_component(
        RENDER_COUNT_LEVEL,
        "modal_button",
        &format!("Render count of button is: {}", count),
    );

    let onclick = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |_: MouseEvent| on_activate.emit(()))
    };

    html! {
        <button
            type="button"
            class="modal-button"
            aria-haspopup="dialog"
            data-render-count={count.to_string()}
            {onclick}
        >
            { props.label.text() }
        </button>
    }
}
