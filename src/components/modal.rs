use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub submit_label: AttrValue,
    /// Disables both buttons while a save is in flight.
    #[prop_or_default]
    pub saving: bool,
    pub on_cancel: Callback<()>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let on_submit = props.on_submit.reform(|e: SubmitEvent| e.prevent_default());

    html! {
        <div class="modal-backdrop">
            <form class="modal" onsubmit={on_submit}>
                <div class="modal-header">
                    <h2>{ props.title.as_str() }</h2>
                    <button type="button" class="icon-btn" title="Close" disabled={props.saving} onclick={on_cancel.clone()}>
                        <Icon icon_id={IconId::LucideX} width={"18"} height={"18"} />
                    </button>
                </div>

                { props.children.clone() }

                <div class="modal-actions">
                    <button type="button" class="btn" disabled={props.saving} onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class="btn btn-primary" disabled={props.saving}>
                        { if props.saving { "Saving..." } else { props.submit_label.as_str() } }
                    </button>
                </div>
            </form>
        </div>
    }
}
