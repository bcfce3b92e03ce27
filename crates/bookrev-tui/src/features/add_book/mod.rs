//! Add-book view: creation form backed by the catalog client.

mod render;
mod state;
mod update;

pub use render::render_add_book;
pub use state::{ADD_FAILED_MESSAGE, AddBookField, AddBookState};
pub use update::{handle_book_created, handle_key};
