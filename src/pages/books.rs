use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::{ErrorBanner, FormField, Modal, RowActions};
use crate::hooks::use_crud;
use crate::models::Book;

#[function_component(BooksPage)]
pub fn books_page() -> Html {
    let crud = use_crud::<Book>();
    let state = &*crud.state;
    let editor = &state.editor;

    let on_add = crud.open_create.reform(|_: MouseEvent| ());

    html! {
        <div class="crud-page">
            <div class={classes!("page-body", editor.open.then_some("blurred"))}>
                <div class="page-header">
                    <h1>{"Books"}</h1>
                    <button type="button" class="btn btn-primary" onclick={on_add}>
                        <Icon icon_id={IconId::LucidePlus} width={"16"} height={"16"} />{" Add Book"}
                    </button>
                </div>

                <ErrorBanner message={state.error.clone()} on_dismiss={crud.dismiss_error.clone()} />

                <table class="record-table">
                    <thead>
                        <tr>
                            <th>{"Title"}</th>
                            <th>{"Author"}</th>
                            <th>{"Year"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            state.records.iter().map(|book| {
                                let on_edit = {
                                    let open_edit = crud.open_edit.clone();
                                    let book = book.clone();
                                    Callback::from(move |_: ()| open_edit.emit(book.clone()))
                                };
                                let on_delete = {
                                    let delete = crud.delete.clone();
                                    let id = book.id;
                                    Callback::from(move |_: ()| delete.emit(id))
                                };

                                html! {
                                    <tr key={book.id}>
                                        <td>{ &book.title }</td>
                                        <td>{ &book.author }</td>
                                        <td>{ book.published_year.map(|y| y.to_string()).unwrap_or_else(|| "N/A".to_string()) }</td>
                                        <RowActions {on_edit} {on_delete} />
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                        if state.records.is_empty() && !state.loading {
                            <tr><td colspan="4" class="empty-row">{"No books found."}</td></tr>
                        }
                    </tbody>
                </table>
            </div>

            if editor.open {
                <Modal
                    title={if editor.is_editing() { "Edit Book" } else { "Add Book" }}
                    submit_label={if editor.is_editing() { "Update" } else { "Create" }}
                    saving={state.saving}
                    on_cancel={crud.close.clone()}
                    on_submit={crud.submit.clone()}
                >
                    <FormField label="Title" name="title" value={editor.form.title.clone()} placeholder="Title" on_input={crud.input.clone()} />
                    <FormField label="Author" name="author" value={editor.form.author.clone()} placeholder="Author" on_input={crud.input.clone()} />
                    <FormField label="Year" name="published_year" input_type="number" value={editor.form.published_year.clone()} placeholder="Year" on_input={crud.input.clone()} />
                </Modal>
            }
        </div>
    }
}
