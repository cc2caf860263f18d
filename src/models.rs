use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RecordId = i64;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a whole number, got \"{value}\"")]
    NotANumber { field: &'static str, value: String },
}

/// Raw text buffer behind a create/edit modal.
///
/// Inputs write into the buffer by their `name` attribute; numeric coercion
/// only happens when the buffer is turned into a payload.
pub trait RecordForm: Default + Clone + PartialEq + std::fmt::Debug + 'static {
    type Record;
    type Payload: Serialize + 'static;

    fn from_record(record: &Self::Record) -> Self;
    fn set_field(&mut self, name: &str, value: String);
    fn to_payload(&self) -> Result<Self::Payload, FormError>;
}

fn parse_optional<T: FromStr>(field: &'static str, raw: &str) -> Result<Option<T>, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| FormError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

fn parse_required<T: FromStr>(field: &'static str, raw: &str) -> Result<T, FormError> {
    parse_optional(field, raw)?.ok_or(FormError::Missing { field })
}

fn optional_text(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.trim().to_string())
    }
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Book {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub published_year: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub published_year: String,
}

impl RecordForm for BookForm {
    type Record = Book;
    type Payload = BookPayload;

    fn from_record(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            published_year: book.published_year.map(|y| y.to_string()).unwrap_or_default(),
        }
    }

    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "author" => self.author = value,
            "published_year" => self.published_year = value,
            _ => {}
        }
    }

    fn to_payload(&self) -> Result<BookPayload, FormError> {
        Ok(BookPayload {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            published_year: parse_optional("Year", &self.published_year)?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BranchPayload {
    pub name: String,
    pub address: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BranchForm {
    pub name: String,
    pub address: String,
}

impl RecordForm for BranchForm {
    type Record = Branch;
    type Payload = BranchPayload;

    fn from_record(branch: &Branch) -> Self {
        Self {
            name: branch.name.clone(),
            address: branch.address.clone().unwrap_or_default(),
        }
    }

    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "address" => self.address = value,
            _ => {}
        }
    }

    fn to_payload(&self) -> Result<BranchPayload, FormError> {
        Ok(BranchPayload {
            name: self.name.trim().to_string(),
            address: optional_text(&self.address),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookRef {
    pub title: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BranchRef {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub id: RecordId,
    pub book_id: RecordId,
    pub branch_id: RecordId,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub book: Option<BookRef>,
    #[serde(default)]
    pub branch: Option<BranchRef>,
}

impl Inventory {
    pub fn book_title(&self) -> &str {
        self.book.as_ref().map(|b| b.title.as_str()).filter(|t| !t.is_empty()).unwrap_or("-")
    }

    pub fn branch_name(&self) -> &str {
        self.branch.as_ref().map(|b| b.name.as_str()).filter(|n| !n.is_empty()).unwrap_or("-")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPayload {
    pub book_id: RecordId,
    pub branch_id: RecordId,
    pub quantity: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryForm {
    pub book_id: String,
    pub branch_id: String,
    pub quantity: String,
}

impl RecordForm for InventoryForm {
    type Record = Inventory;
    type Payload = InventoryPayload;

    fn from_record(inv: &Inventory) -> Self {
        Self {
            book_id: inv.book_id.to_string(),
            branch_id: inv.branch_id.to_string(),
            quantity: inv.quantity.to_string(),
        }
    }

    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "bookId" => self.book_id = value,
            "branchId" => self.branch_id = value,
            "quantity" => self.quantity = value,
            _ => {}
        }
    }

    fn to_payload(&self) -> Result<InventoryPayload, FormError> {
        Ok(InventoryPayload {
            book_id: parse_required("Book ID", &self.book_id)?,
            branch_id: parse_required("Branch ID", &self.branch_id)?,
            quantity: parse_required("Quantity", &self.quantity)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn blank_year_is_sent_as_null() {
        let form = BookForm {
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            published_year: "  ".into(),
        };
        let body = serde_json::to_value(form.to_payload().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({ "title": "Dune", "author": "Frank Herbert", "published_year": null })
        );
    }

    #[test]
    fn year_is_coerced_to_integer() {
        let mut form = BookForm::default();
        form.set_field("published_year", "1965".into());
        assert_eq!(form.to_payload().unwrap().published_year, Some(1965));
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let mut form = BookForm::default();
        form.set_field("published_year", "mid sixties".into());
        assert_eq!(
            form.to_payload(),
            Err(FormError::NotANumber { field: "Year", value: "mid sixties".into() })
        );
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let mut form = BookForm::default();
        form.set_field("isbn", "123".into());
        assert_eq!(form, BookForm::default());
    }

    #[test]
    fn book_form_round_trips_from_record() {
        let book = Book { id: 4, title: "Emma".into(), author: "Austen".into(), published_year: None };
        let form = BookForm::from_record(&book);
        assert_eq!(form.published_year, "");
        assert_eq!(form.to_payload().unwrap().title, "Emma");
    }

    #[test]
    fn book_without_year_deserializes() {
        let book: Book = serde_json::from_value(json!({ "id": 1, "title": "T", "author": "A" })).unwrap();
        assert_eq!(book.published_year, None);
    }

    #[test]
    fn blank_address_is_sent_as_null_and_name_defaults_to_empty() {
        let payload = BranchForm::default().to_payload().unwrap();
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            json!({ "name": "", "address": null })
        );
    }

    #[test]
    fn branch_reads_camel_case_timestamps() {
        let branch: Branch = serde_json::from_value(json!({
            "id": 2,
            "name": "Central",
            "address": null,
            "createdAt": "2024-03-01T10:00:00.000Z",
            "updatedAt": "2024-03-02T11:30:00.000Z"
        }))
        .unwrap();
        assert_eq!(branch.created_at, ts("2024-03-01T10:00:00Z"));
        assert_eq!(BranchForm::from_record(&branch).address, "");
    }

    #[test]
    fn text_fields_are_trimmed() {
        let book = BookForm {
            title: "  Dune ".into(),
            author: " Herbert ".into(),
            published_year: " 1965 ".into(),
        };
        let payload = book.to_payload().unwrap();
        assert_eq!(payload.title, "Dune");
        assert_eq!(payload.author, "Herbert");
        assert_eq!(payload.published_year, Some(1965));

        let branch = BranchForm { name: " Central ".into(), address: "  Main St  ".into() };
        assert_eq!(
            branch.to_payload().unwrap(),
            BranchPayload { name: "Central".into(), address: Some("Main St".into()) }
        );
    }

    #[test]
    fn inventory_payload_uses_camel_case_integers() {
        let mut form = InventoryForm::default();
        form.set_field("bookId", "3".into());
        form.set_field("branchId", " 7 ".into());
        form.set_field("quantity", "12".into());
        assert_eq!(
            serde_json::to_value(form.to_payload().unwrap()).unwrap(),
            json!({ "bookId": 3, "branchId": 7, "quantity": 12 })
        );
    }

    #[test]
    fn inventory_requires_every_number() {
        let form = InventoryForm {
            book_id: "3".into(),
            branch_id: "".into(),
            quantity: "1".into(),
        };
        assert_eq!(form.to_payload(), Err(FormError::Missing { field: "Branch ID" }));
    }

    #[test]
    fn inventory_joins_fall_back_to_dash() {
        let inv: Inventory = serde_json::from_value(json!({
            "id": 9,
            "bookId": 1,
            "branchId": 2,
            "quantity": 5,
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-01T10:00:00Z",
            "book": { "title": "Ulysses" }
        }))
        .unwrap();
        assert_eq!(inv.book_title(), "Ulysses");
        assert_eq!(inv.branch_name(), "-");
        assert_eq!(InventoryForm::from_record(&inv).quantity, "5");
    }
}
