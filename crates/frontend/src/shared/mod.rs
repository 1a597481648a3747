pub mod dialogs;
pub mod page_frame;
