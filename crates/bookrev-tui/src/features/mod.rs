//! One module per view: `state` (view-local data), `update` (reducer
//! helpers) and `render` (pure drawing).

pub mod add_book;
pub mod book_list;
pub mod landing;
pub mod login;

/// What a form view asks the top-level reducer to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
}
