//! UI event types.
//!
//! Everything the reducer reacts to: terminal input, ticks, task lifecycle
//! and the single completion event each backend call produces.

use bookrev_core::api::{AuthError, Book, CatalogError};
use crossterm::event::Event;

use crate::common::{TaskCompleted, TaskKind};
use crate::router::Route;

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (spinner animation, render cadence).
    Tick,

    /// Raw terminal input.
    Terminal(Event),

    /// Navigate to a route and mount its view.
    Navigate(Route),

    /// Result of reading the session store after a mount.
    SessionChecked { authenticated: bool },

    /// Result of clearing the session store.
    LoggedOut(Result<(), String>),

    /// A spawned task finished; `result` is replayed if the task is still active.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    // Task payloads, delivered wrapped in `TaskCompleted`.
    BooksLoaded(Result<Vec<Book>, CatalogError>),
    BookCreated(Result<Book, CatalogError>),
    LoginFinished(Result<(), AuthError>),
}
