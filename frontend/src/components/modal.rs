use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    /// Overlay click or Escape
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    /// Id of the element naming the dialog
    #[prop_or_default]
    pub labelled_by: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Overlay dialog. Content is only mounted while open.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let overlay_ref = use_node_ref();

    // Focus the overlay so Escape reaches it
    {
        let overlay_ref = overlay_ref.clone();
        use_effect_with(props.is_open, move |is_open| {
            if *is_open {
                if let Some(overlay) = overlay_ref.cast::<HtmlElement>() {
                    let _ = overlay.focus();
                }
            }
            || ()
        });
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_keydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                on_close.emit(());
            }
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div
            class="modal-overlay"
            ref={overlay_ref}
            tabindex="-1"
            onclick={on_backdrop_click}
            onkeydown={on_keydown}
        >
            <div
                class={classes!("modal", props.class.clone())}
                role="dialog"
                aria-modal="true"
                aria-labelledby={props.labelled_by.clone()}
                onclick={on_modal_click}
            >
                { props.children.clone() }
            </div>
        </div>
    }
}
