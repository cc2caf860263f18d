pub mod error_banner;
pub mod form_field;
pub mod modal;
pub mod navbar;
pub mod row_actions;

pub use error_banner::ErrorBanner;
pub use form_field::FormField;
pub use modal::Modal;
pub use navbar::Navbar;
pub use row_actions::RowActions;
