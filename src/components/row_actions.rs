use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct RowActionsProps {
    pub on_edit: Callback<()>,
    pub on_delete: Callback<()>,
}

#[function_component(RowActions)]
pub fn row_actions(props: &RowActionsProps) -> Html {
    let on_edit = props.on_edit.reform(|_: MouseEvent| ());
    let on_delete = props.on_delete.reform(|_: MouseEvent| ());

    html! {
        <td class="row-actions">
            <button type="button" class="btn btn-edit" onclick={on_edit}>
                <Icon icon_id={IconId::LucidePencil} width={"14"} height={"14"} />{" Edit"}
            </button>
            <button type="button" class="btn btn-delete" onclick={on_delete}>
                <Icon icon_id={IconId::LucideTrash2} width={"14"} height={"14"} />{" Delete"}
            </button>
        </td>
    }
}
