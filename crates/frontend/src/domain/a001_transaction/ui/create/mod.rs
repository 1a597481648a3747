//! Create Transaction UI Module
//!
//! - view_model.rs: form state and the submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CreateTransactionPage;
pub use view_model::CreateTransactionViewModel;
