//! Application state composition.
//!
//! ```text
//! AppState
//! ├── route: Route               (mounted view)
//! ├── authenticated: bool        (last session read)
//! ├── task_seq / tasks           (async task ids and lifecycle)
//! ├── landing: LandingState
//! ├── book_list: BookListState
//! ├── login: LoginState
//! └── add_book: AddBookState
//! ```
//!
//! Each view owns its slice. Cross-view changes go through
//! [`StateMutation`](crate::mutations::StateMutation).

use crate::add_book::AddBookState;
use crate::book_list::BookListState;
use crate::common::{TaskSeq, Tasks};
use crate::landing::LandingState;
use crate::login::LoginState;
use crate::router::Route;

#[derive(Debug, Default)]
pub struct AppState {
    pub route: Route,
    /// Mirror of `SessionStore::is_authenticated()`, refreshed on every mount.
    pub authenticated: bool,
    /// Backend shown in the status line.
    pub base_url: String,
    pub should_quit: bool,
    pub spinner_frame: usize,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub landing: LandingState,
    pub book_list: BookListState,
    pub login: LoginState,
    pub add_book: AddBookState,
}

impl AppState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
