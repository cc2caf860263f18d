//! REST client for the library backend.
//!
//! Every collection follows the same shape: `GET`/`POST /<collection>` and
//! `PATCH`/`DELETE /<collection>/{id}`. Mutations ignore the response body;
//! callers re-fetch the list afterwards.

use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{Book, BookForm, Branch, BranchForm, FormError, Inventory, InventoryForm, RecordForm, RecordId};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo::net::Error),
    #[error("server responded {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error(transparent)]
    Form(#[from] FormError),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// An entity the backend exposes as a collection.
pub trait Resource: Clone + PartialEq + DeserializeOwned + 'static {
    /// Path segment of the collection, also used as the plural label.
    const COLLECTION: &'static str;
    const SINGULAR: &'static str;

    type Form: RecordForm<Record = Self>;

    fn id(&self) -> RecordId;

    fn fetch_error() -> String {
        format!("Failed to fetch {}", Self::COLLECTION)
    }

    fn save_error() -> String {
        format!("Error saving {}", Self::SINGULAR)
    }

    fn delete_error() -> String {
        format!("Error deleting {}", Self::SINGULAR)
    }

    fn delete_prompt() -> String {
        format!("Are you sure you want to delete this {}?", Self::SINGULAR)
    }
}

pub type Payload<R> = <<R as Resource>::Form as RecordForm>::Payload;

impl Resource for Book {
    const COLLECTION: &'static str = "books";
    const SINGULAR: &'static str = "book";
    type Form = BookForm;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for Branch {
    const COLLECTION: &'static str = "branches";
    const SINGULAR: &'static str = "branch";
    type Form = BranchForm;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for Inventory {
    const COLLECTION: &'static str = "inventories";
    const SINGULAR: &'static str = "inventory";
    type Form = InventoryForm;

    fn id(&self) -> RecordId {
        self.id
    }
}

pub fn collection_url<R: Resource>(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), R::COLLECTION)
}

pub fn record_url<R: Resource>(base_url: &str, id: RecordId) -> String {
    format!("{}/{}", collection_url::<R>(base_url), id)
}

fn check_status(status: u16, status_text: String) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status, status_text })
    }
}

fn trace(message: String) {
    if CONFIG.debug_logs {
        gloo::console::debug!(message);
    }
}

async fn send(verb: &str, url: &str, request: Request) -> ApiResult<Response> {
    trace(format!("{verb} {url}"));
    let response = request.send().await?;
    check_status(response.status(), response.status_text())?;
    Ok(response)
}

pub async fn list<R: Resource>() -> ApiResult<Vec<R>> {
    let url = collection_url::<R>(&CONFIG.api_base_url);
    let response = send("GET", &url, Request::get(&url).build()?).await?;
    Ok(response.json::<Vec<R>>().await?)
}

pub async fn create<R: Resource>(payload: &Payload<R>) -> ApiResult<()> {
    let url = collection_url::<R>(&CONFIG.api_base_url);
    send("POST", &url, Request::post(&url).json(payload)?).await?;
    Ok(())
}

pub async fn update<R: Resource>(id: RecordId, payload: &Payload<R>) -> ApiResult<()> {
    let url = record_url::<R>(&CONFIG.api_base_url, id);
    send("PATCH", &url, Request::patch(&url).json(payload)?).await?;
    Ok(())
}

pub async fn remove<R: Resource>(id: RecordId) -> ApiResult<()> {
    let url = record_url::<R>(&CONFIG.api_base_url, id);
    send("DELETE", &url, Request::delete(&url).build()?).await?;
    Ok(())
}
