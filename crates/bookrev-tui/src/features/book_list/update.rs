use bookrev_core::api::{Book, CatalogError};
use crossterm::event::{KeyCode, KeyEvent};

use super::{BookListState, LOAD_FAILED_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookListAction {
    None,
    Reload,
}

pub fn handle_key(state: &mut BookListState, key: KeyEvent) -> BookListAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Home | KeyCode::Char('g') => state.select_first(),
        KeyCode::End | KeyCode::Char('G') => state.select_last(),
        KeyCode::Char('r') => return BookListAction::Reload,
        _ => {}
    }
    BookListAction::None
}

/// Applies the single completion of a `list_books` call.
pub fn handle_books_loaded(state: &mut BookListState, result: Result<Vec<Book>, CatalogError>) {
    state.loading = false;
    match result {
        Ok(books) => {
            tracing::debug!(count = books.len(), "book list loaded");
            state.error = None;
            state.replace_books(books);
        }
        Err(err) => {
            tracing::warn!(error = %err, "book list load failed");
            state.error = Some(LOAD_FAILED_MESSAGE.to_string());
        }
    }
}
