use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, Resource};
use crate::models::RecordId;
use crate::state::{CrudAction, CrudState, Submission};

/// State plus the callbacks a list-edit-delete page wires into its view.
pub struct CrudHandle<R: Resource> {
    pub state: UseReducerHandle<CrudState<R>>,
    pub open_create: Callback<()>,
    pub open_edit: Callback<R>,
    /// `(input name, value)`
    pub input: Callback<(String, String)>,
    pub close: Callback<()>,
    pub submit: Callback<()>,
    pub delete: Callback<RecordId>,
    pub dismiss_error: Callback<()>,
}

async fn refresh<R: Resource>(dispatcher: UseReducerDispatcher<CrudState<R>>) {
    dispatcher.dispatch(CrudAction::LoadStarted);
    match api::list::<R>().await {
        Ok(records) => dispatcher.dispatch(CrudAction::Loaded(records)),
        Err(err) => {
            gloo::console::error!(format!("Failed to fetch {}: {}", R::COLLECTION, err));
            dispatcher.dispatch(CrudAction::Failed(R::fetch_error()));
        }
    }
}

/// Loads the collection on mount and drives create, edit and delete for it.
#[hook]
pub fn use_crud<R: Resource>() -> CrudHandle<R> {
    let state = use_reducer(CrudState::<R>::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(refresh(dispatcher));
            || ()
        });
    }

    let open_create = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(CrudAction::OpenCreate))
    };

    let open_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |record: R| dispatcher.dispatch(CrudAction::OpenEdit(record)))
    };

    let input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(name, value): (String, String)| {
            dispatcher.dispatch(CrudAction::Input { name, value })
        })
    };

    let close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(CrudAction::Close))
    };

    let dismiss_error = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(CrudAction::DismissError))
    };

    let submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let dispatcher = state.dispatcher();
            let submission = match state.submission() {
                None => return,
                Some(Ok(submission)) => submission,
                Some(Err(err)) => {
                    gloo::console::error!(format!("Invalid {} form: {}", R::SINGULAR, err));
                    dispatcher.dispatch(CrudAction::Failed(err.to_string()));
                    return;
                }
            };

            dispatcher.dispatch(CrudAction::SaveStarted);
            spawn_local(async move {
                let result = match &submission {
                    Submission::Create(payload) => api::create::<R>(payload).await,
                    Submission::Update(id, payload) => api::update::<R>(*id, payload).await,
                };
                match result {
                    Ok(()) => {
                        dispatcher.dispatch(CrudAction::Saved);
                        refresh(dispatcher).await;
                    }
                    Err(err) => {
                        gloo::console::error!(format!("Failed to save {}: {}", R::SINGULAR, err));
                        dispatcher.dispatch(CrudAction::Failed(R::save_error()));
                    }
                }
            });
        })
    };

    let delete = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: RecordId| {
            if !gloo::dialogs::confirm(&R::delete_prompt()) {
                return;
            }
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                match api::remove::<R>(id).await {
                    Ok(()) => refresh(dispatcher).await,
                    Err(err) => {
                        gloo::console::error!(format!("Failed to delete {} {}: {}", R::SINGULAR, id, err));
                        dispatcher.dispatch(CrudAction::Failed(R::delete_error()));
                    }
                }
            });
        })
    };

    CrudHandle {
        state,
        open_create,
        open_edit,
        input,
        close,
        submit,
        delete,
        dismiss_error,
    }
}
