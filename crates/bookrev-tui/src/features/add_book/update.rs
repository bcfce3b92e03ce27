use bookrev_core::api::{Book, CatalogError};
use crossterm::event::{KeyCode, KeyEvent};

use super::{ADD_FAILED_MESSAGE, AddBookState};
use crate::features::FormAction;
use crate::mutations::StateMutation;

pub fn handle_key(state: &mut AddBookState, key: KeyEvent) -> FormAction {
    match key.code {
        KeyCode::Enter => return FormAction::Submit,
        KeyCode::Tab | KeyCode::Down => state.focus = state.focus.next(),
        KeyCode::BackTab | KeyCode::Up => state.focus = state.focus.prev(),
        _ => {
            state.focused_mut().handle_key(key);
        }
    }
    FormAction::None
}

/// Applies the single completion of a `create_book` call.
///
/// Success empties the form and hands the created book to the list view;
/// failure keeps the form populated.
pub fn handle_book_created(
    state: &mut AddBookState,
    result: Result<Book, CatalogError>,
) -> Vec<StateMutation> {
    match result {
        Ok(book) => {
            state.clear_fields();
            state.error = None;
            state.success = Some(format!("Book \"{}\" added successfully!", book.title));
            vec![StateMutation::BookAdded(book)]
        }
        Err(err) => {
            tracing::warn!(error = %err, "add book failed");
            state.success = None;
            state.error = Some(ADD_FAILED_MESSAGE.to_string());
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::features::add_book::AddBookField;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fill(state: &mut AddBookState, title: &str, author: &str, genre: &str) {
        state.title.set_value(title);
        state.author.set_value(author);
        state.genre.set_value(genre);
    }

    #[test]
    fn test_fields_start_empty() {
        let state = AddBookState::default();
        assert!(state.to_create_book().is_empty());
    }

    #[test]
    fn test_tab_and_backtab_cycle_focus() {
        let mut state = AddBookState::default();
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.focus, AddBookField::Author);
        handle_key(&mut state, key(KeyCode::BackTab));
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.focus, AddBookField::Genre);
    }

    #[test]
    fn test_success_resets_fields_and_reports_title() {
        let mut state = AddBookState::default();
        fill(&mut state, "Dune", "Frank Herbert", "Sci-Fi");
        state.focus = AddBookField::Genre;

        let created = Book {
            id: 42,
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            genre: "Sci-Fi".into(),
        };
        let mutations = handle_book_created(&mut state, Ok(created.clone()));

        assert_eq!(mutations, vec![StateMutation::BookAdded(created)]);
        assert_eq!(state.title.value(), "");
        assert_eq!(state.author.value(), "");
        assert_eq!(state.genre.value(), "");
        assert_eq!(state.focus, AddBookField::Title);
        assert_eq!(
            state.success.as_deref(),
            Some("Book \"Dune\" added successfully!")
        );
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut state = AddBookState::default();
        fill(&mut state, "Dune", "Frank Herbert", "Sci-Fi");
        state.success = Some("earlier".into());

        let mutations = handle_book_created(
            &mut state,
            Err(CatalogError::Rejected {
                status: Some(400),
                message: "HTTP 400".into(),
            }),
        );

        assert!(mutations.is_empty());
        assert_eq!(state.to_create_book().title, "Dune");
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to add book. Please try again.")
        );
        assert_eq!(state.success, None);
    }
}
