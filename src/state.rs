use std::rc::Rc;

use yew::prelude::*;

use crate::api::{Payload, Resource};
use crate::models::{FormError, RecordForm, RecordId};

/// Create/edit modal: open flag, form buffer and the id being edited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Editor<F> {
    pub open: bool,
    pub editing_id: Option<RecordId>,
    pub form: F,
}

impl<F: RecordForm> Editor<F> {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn submission(&self) -> Result<Submission<F::Payload>, FormError> {
        let payload = self.form.to_payload()?;
        Ok(match self.editing_id {
            Some(id) => Submission::Update(id, payload),
            None => Submission::Create(payload),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Submission<P> {
    Create(P),
    Update(RecordId, P),
}

/// Everything a list-edit-delete page renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct CrudState<R: Resource> {
    pub records: Vec<R>,
    pub editor: Editor<R::Form>,
    pub error: Option<String>,
    pub loading: bool,
    pub saving: bool,
}

impl<R: Resource> Default for CrudState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            editor: Editor::default(),
            error: None,
            loading: false,
            saving: false,
        }
    }
}

impl<R: Resource> CrudState<R> {
    pub fn submission(&self) -> Option<Result<Submission<Payload<R>>, FormError>> {
        if !self.editor.open || self.saving {
            return None;
        }
        Some(self.editor.submission())
    }
}

pub enum CrudAction<R: Resource> {
    LoadStarted,
    Loaded(Vec<R>),
    OpenCreate,
    OpenEdit(R),
    Input { name: String, value: String },
    Close,
    SaveStarted,
    Saved,
    /// Any failed call. The list is left as it was.
    Failed(String),
    DismissError,
}

impl<R: Resource> Reducible for CrudState<R> {
    type Action = CrudAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CrudAction::LoadStarted => next.loading = true,
            CrudAction::Loaded(records) => {
                next.records = records;
                next.loading = false;
                next.error = None;
            }
            CrudAction::OpenCreate => {
                next.editor = Editor { open: true, editing_id: None, form: R::Form::default() };
            }
            CrudAction::OpenEdit(record) => {
                next.editor = Editor {
                    open: true,
                    editing_id: Some(record.id()),
                    form: R::Form::from_record(&record),
                };
            }
            CrudAction::Input { name, value } => {
                if !next.editor.open {
                    return self;
                }
                next.editor.form.set_field(&name, value);
            }
            CrudAction::Close => {
                if next.saving {
                    return self;
                }
                next.editor = Editor::default();
            }
            CrudAction::SaveStarted => {
                if next.saving || !next.editor.open {
                    return self;
                }
                next.saving = true;
            }
            CrudAction::Saved => {
                next.saving = false;
                next.error = None;
                next.editor = Editor::default();
            }
            CrudAction::Failed(message) => {
                next.loading = false;
                next.saving = false;
                next.error = Some(message);
            }
            CrudAction::DismissError => next.error = None,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, BookForm, BookPayload};

    fn book(id: RecordId, title: &str) -> Book {
        Book { id, title: title.into(), author: "Anon".into(), published_year: Some(1900 + id as i32) }
    }

    fn apply(state: Rc<CrudState<Book>>, actions: Vec<CrudAction<Book>>) -> Rc<CrudState<Book>> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn loaded(books: Vec<Book>) -> Rc<CrudState<Book>> {
        Rc::new(CrudState::default()).reduce(CrudAction::Loaded(books))
    }

    fn typed(name: &str, value: &str) -> CrudAction<Book> {
        CrudAction::Input { name: name.into(), value: value.into() }
    }

    #[test]
    fn create_submits_post_and_reload_adds_one_entry() {
        let state = apply(
            loaded(vec![book(1, "A")]),
            vec![CrudAction::OpenCreate, typed("title", "B"), typed("author", "Bee"), typed("published_year", "")],
        );
        assert!(!state.editor.is_editing());
        let submission = state.submission().unwrap().unwrap();
        assert_eq!(
            submission,
            Submission::Create(BookPayload { title: "B".into(), author: "Bee".into(), published_year: None })
        );

        let created = Book { id: 2, title: "B".into(), author: "Bee".into(), published_year: None };
        let state = apply(
            state,
            vec![CrudAction::SaveStarted, CrudAction::Saved, CrudAction::Loaded(vec![book(1, "A"), created.clone()])],
        );
        assert!(!state.editor.open);
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.records.iter().filter(|b| **b == created).count(), 1);
    }

    #[test]
    fn edit_prefills_and_submits_patch_for_that_id() {
        let state = apply(
            loaded(vec![book(1, "A"), book(2, "B")]),
            vec![CrudAction::OpenEdit(book(2, "B")), typed("title", "B2")],
        );
        assert_eq!(state.editor.editing_id, Some(2));
        assert_eq!(state.editor.form.author, "Anon");
        match state.submission().unwrap().unwrap() {
            Submission::Update(id, payload) => {
                assert_eq!(id, 2);
                assert_eq!(payload.title, "B2");
                assert_eq!(payload.published_year, Some(1902));
            }
            other => panic!("expected update, got {other:?}"),
        }

        let updated = Book { title: "B2".into(), ..book(2, "B") };
        let state = apply(state, vec![CrudAction::Saved, CrudAction::Loaded(vec![book(1, "A"), updated.clone()])]);
        assert_eq!(state.records[0], book(1, "A"));
        assert_eq!(state.records[1], updated);
    }

    #[test]
    fn reload_after_delete_drops_the_id() {
        let state = apply(loaded(vec![book(1, "A"), book(2, "B")]), vec![CrudAction::Loaded(vec![book(1, "A")])]);
        assert!(state.records.iter().all(|b| b.id != 2));
    }

    #[test]
    fn failed_delete_keeps_the_row() {
        let before = loaded(vec![book(1, "A"), book(2, "B")]);
        let after = before.clone().reduce(CrudAction::Failed(Book::delete_error()));
        assert_eq!(after.records, before.records);
        assert_eq!(after.error.as_deref(), Some("Error deleting book"));
    }

    #[test]
    fn failure_keeps_list_and_sets_error() {
        let before = loaded(vec![book(1, "A")]);
        let after = apply(
            before.clone(),
            vec![CrudAction::LoadStarted, CrudAction::Failed(Book::fetch_error())],
        );
        assert_eq!(after.records, before.records);
        assert_eq!(after.error.as_deref(), Some("Failed to fetch books"));
        assert!(!after.loading);
    }

    #[test]
    fn failed_save_keeps_modal_and_input() {
        let state = apply(
            loaded(vec![]),
            vec![
                CrudAction::OpenCreate,
                typed("title", "X"),
                CrudAction::SaveStarted,
                CrudAction::Failed(Book::save_error()),
            ],
        );
        assert!(state.editor.open);
        assert_eq!(state.editor.form.title, "X");
        assert!(!state.saving);
        assert!(state.error.is_some());
    }

    #[test]
    fn closing_discards_edits() {
        let state = apply(
            loaded(vec![book(1, "A")]),
            vec![CrudAction::OpenEdit(book(1, "A")), typed("title", "changed"), CrudAction::Close],
        );
        assert!(!state.editor.open);
        assert_eq!(state.editor.form, BookForm::default());
        assert_eq!(state.submission(), None);

        let reopened = state.reduce(CrudAction::OpenCreate);
        assert_eq!(reopened.editor.form, BookForm::default());
    }

    #[test]
    fn no_submission_while_saving() {
        let state = apply(loaded(vec![]), vec![CrudAction::OpenCreate, CrudAction::SaveStarted]);
        assert_eq!(state.submission(), None);
        let state = state.reduce(CrudAction::Close);
        assert!(state.editor.open);
    }

    #[test]
    fn second_save_start_is_ignored_while_saving() {
        let saving = apply(loaded(vec![]), vec![CrudAction::OpenCreate, CrudAction::SaveStarted]);
        let again = saving.clone().reduce(CrudAction::SaveStarted);
        assert!(Rc::ptr_eq(&saving, &again));

        let closed = loaded(vec![]).reduce(CrudAction::SaveStarted);
        assert!(!closed.saving);
    }

    #[test]
    fn invalid_number_surfaces_as_form_error() {
        let state = apply(loaded(vec![]), vec![CrudAction::OpenCreate, typed("published_year", "abc")]);
        assert!(matches!(state.submission(), Some(Err(FormError::NotANumber { .. }))));
    }

    #[test]
    fn successful_load_clears_error_and_dismiss_works() {
        let state = apply(loaded(vec![]), vec![CrudAction::Failed("boom".into()), CrudAction::DismissError]);
        assert_eq!(state.error, None);
        let state = apply(state, vec![CrudAction::Failed("boom".into()), CrudAction::Loaded(vec![])]);
        assert_eq!(state.error, None);
    }

    #[test]
    fn input_is_ignored_when_modal_closed() {
        let state = loaded(vec![]).reduce(typed("title", "stray"));
        assert_eq!(state.editor.form.title, "");
    }
}
