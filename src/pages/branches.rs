use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::{ErrorBanner, FormField, Modal, RowActions};
use crate::hooks::use_crud;
use crate::models::{format_timestamp, Branch};

#[function_component(BranchesPage)]
pub fn branches_page() -> Html {
    let crud = use_crud::<Branch>();
    let state = &*crud.state;
    let editor = &state.editor;

    let on_add = crud.open_create.reform(|_: MouseEvent| ());

    html! {
        <div class="crud-page">
            <div class={classes!("page-body", editor.open.then_some("blurred"))}>
                <div class="page-header">
                    <h1>{"Branches"}</h1>
                    <button type="button" class="btn btn-primary" onclick={on_add}>
                        <Icon icon_id={IconId::LucidePlus} width={"16"} height={"16"} />{" Add Branch"}
                    </button>
                </div>

                <ErrorBanner message={state.error.clone()} on_dismiss={crud.dismiss_error.clone()} />

                <table class="record-table">
                    <thead>
                        <tr>
                            <th>{"#"}</th>
                            <th>{"Name"}</th>
                            <th>{"Address"}</th>
                            <th>{"Created At"}</th>
                            <th>{"Updated At"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            state.records.iter().enumerate().map(|(index, branch)| {
                                let on_edit = {
                                    let open_edit = crud.open_edit.clone();
                                    let branch = branch.clone();
                                    Callback::from(move |_: ()| open_edit.emit(branch.clone()))
                                };
                                let on_delete = {
                                    let delete = crud.delete.clone();
                                    let id = branch.id;
                                    Callback::from(move |_: ()| delete.emit(id))
                                };
                                let address = branch.address.as_deref().filter(|a| !a.is_empty()).unwrap_or("-");

                                html! {
                                    <tr key={branch.id}>
                                        <td>{ index + 1 }</td>
                                        <td>{ &branch.name }</td>
                                        <td>{ address }</td>
                                        <td>{ format_timestamp(&branch.created_at) }</td>
                                        <td>{ format_timestamp(&branch.updated_at) }</td>
                                        <RowActions {on_edit} {on_delete} />
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                        if state.records.is_empty() && !state.loading {
                            <tr><td colspan="6" class="empty-row">{"No branches found."}</td></tr>
                        }
                    </tbody>
                </table>
            </div>

            if editor.open {
                <Modal
                    title={if editor.is_editing() { "Edit Branch" } else { "Add Branch" }}
                    submit_label={if editor.is_editing() { "Update" } else { "Create" }}
                    saving={state.saving}
                    on_cancel={crud.close.clone()}
                    on_submit={crud.submit.clone()}
                >
                    <FormField label="Name" name="name" value={editor.form.name.clone()} placeholder="Branch name" on_input={crud.input.clone()} />
                    <FormField label="Address" name="address" value={editor.form.address.clone()} placeholder="Branch address (optional)" on_input={crud.input.clone()} />
                </Modal>
            }
        </div>
    }
}
