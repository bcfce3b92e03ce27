//! Book list view: the full catalog in backend order.

mod render;
mod state;
mod update;

pub use render::render_book_list;
pub use state::{BookListState, LOAD_FAILED_MESSAGE};
pub use update::{BookListAction, handle_books_loaded, handle_key};
