pub mod books;
pub mod branches;
pub mod inventories;
pub mod not_found;
