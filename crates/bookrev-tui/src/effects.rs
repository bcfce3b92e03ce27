//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer never touches the
//! network or the session store itself.

use bookrev_core::api::{Credentials, CreateBook};

use crate::common::TaskId;

#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Read `is_authenticated()` and report back with `SessionChecked`.
    CheckSession,

    /// Fetch the full book collection.
    LoadBooks { task: TaskId },

    /// Create a book from the add-book form.
    CreateBook { task: TaskId, data: CreateBook },

    /// Exchange credentials for a session token.
    Login {
        task: TaskId,
        credentials: Credentials,
    },

    /// Clear the stored session token.
    Logout,
}
