use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::{ErrorBanner, FormField, Modal, RowActions};
use crate::hooks::use_crud;
use crate::models::{format_timestamp, Inventory};

#[function_component(InventoriesPage)]
pub fn inventories_page() -> Html {
    let crud = use_crud::<Inventory>();
    let state = &*crud.state;
    let editor = &state.editor;

    let on_add = crud.open_create.reform(|_: MouseEvent| ());

    html! {
        <div class="crud-page">
            <div class={classes!("page-body", editor.open.then_some("blurred"))}>
                <div class="page-header">
                    <h1>{"Inventories"}</h1>
                    <button type="button" class="btn btn-primary" onclick={on_add}>
                        <Icon icon_id={IconId::LucidePlus} width={"16"} height={"16"} />{" Add Inventory"}
                    </button>
                </div>

                <ErrorBanner message={state.error.clone()} on_dismiss={crud.dismiss_error.clone()} />

                <table class="record-table">
                    <thead>
                        <tr>
                            <th>{"#"}</th>
                            <th>{"Book Name"}</th>
                            <th>{"Branch Name"}</th>
                            <th>{"Quantity"}</th>
                            <th>{"Created At"}</th>
                            <th>{"Updated At"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            state.records.iter().enumerate().map(|(index, inv)| {
                                let on_edit = {
                                    let open_edit = crud.open_edit.clone();
                                    let inv = inv.clone();
                                    Callback::from(move |_: ()| open_edit.emit(inv.clone()))
                                };
                                let on_delete = {
                                    let delete = crud.delete.clone();
                                    let id = inv.id;
                                    Callback::from(move |_: ()| delete.emit(id))
                                };

                                html! {
                                    <tr key={inv.id}>
                                        <td>{ index + 1 }</td>
                                        <td>{ inv.book_title() }</td>
                                        <td>{ inv.branch_name() }</td>
                                        <td>{ inv.quantity }</td>
                                        <td>{ format_timestamp(&inv.created_at) }</td>
                                        <td>{ format_timestamp(&inv.updated_at) }</td>
                                        <RowActions {on_edit} {on_delete} />
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                        if state.records.is_empty() && !state.loading {
                            <tr><td colspan="7" class="empty-row">{"No inventories found."}</td></tr>
                        }
                    </tbody>
                </table>
            </div>

            if editor.open {
                <Modal
                    title={if editor.is_editing() { "Edit Inventory" } else { "Add Inventory" }}
                    submit_label={if editor.is_editing() { "Update" } else { "Create" }}
                    saving={state.saving}
                    on_cancel={crud.close.clone()}
                    on_submit={crud.submit.clone()}
                >
                    <FormField label="Book ID" name="bookId" input_type="number" value={editor.form.book_id.clone()} placeholder="Enter Book ID" on_input={crud.input.clone()} />
                    <FormField label="Branch ID" name="branchId" input_type="number" value={editor.form.branch_id.clone()} placeholder="Enter Branch ID" on_input={crud.input.clone()} />
                    <FormField label="Quantity" name="quantity" input_type="number" value={editor.form.quantity.clone()} placeholder="Enter Quantity" on_input={crud.input.clone()} />
                </Modal>
            }
        </div>
    }
}
