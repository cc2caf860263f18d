use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };
    let on_close = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class="alert alert-error" role="alert">
            <span>{ message }</span>
            <button type="button" class="icon-btn" title="Dismiss" onclick={on_close}>
                <Icon icon_id={IconId::LucideX} width={"16"} height={"16"} />
            </button>
        </div>
    }
}
