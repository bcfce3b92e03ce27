//! Cross-view state mutations.
//!
//! Feature reducers only own their own slice of state. When a result in one
//! view must be reflected elsewhere (a created book showing up in the list,
//! a login flipping auth affordances) they return a mutation and the top-level
//! reducer applies it.

use bookrev_core::api::Book;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    /// A book was created on the backend.
    BookAdded(Book),
    /// Session state changed; views re-derive their affordances.
    SetAuthenticated(bool),
}
