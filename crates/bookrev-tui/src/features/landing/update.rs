use crossterm::event::{KeyCode, KeyEvent};

use super::LandingState;
use crate::mutations::StateMutation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    None,
    Logout,
}

/// Handles a key press on the landing view.
///
/// `o` only logs out when a session exists; otherwise it is ignored.
pub fn handle_key(state: &mut LandingState, authenticated: bool, key: KeyEvent) -> LandingAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Char('o') if authenticated => return LandingAction::Logout,
        _ => {}
    }
    LandingAction::None
}

/// Applies the outcome of clearing the session.
///
/// Returns the mutations to apply and whether to navigate back to `/`.
pub fn handle_logged_out(
    state: &mut LandingState,
    result: Result<(), String>,
) -> (Vec<StateMutation>, bool) {
    match result {
        Ok(()) => (vec![StateMutation::SetAuthenticated(false)], true),
        Err(err) => {
            tracing::warn!(error = %err, "logout failed");
            state.notice = Some(format!("Logout failed: {err}"));
            (vec![], false)
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::features::landing::FEATURED_BOOKS;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = LandingState::default();
        handle_key(&mut state, false, key(KeyCode::Up));
        assert_eq!(state.selected, FEATURED_BOOKS.len() - 1);
        handle_key(&mut state, false, key(KeyCode::Down));
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_book().title, "The Witch Craft");
    }

    #[test]
    fn test_logout_requires_session() {
        let mut state = LandingState::default();
        assert_eq!(
            handle_key(&mut state, false, key(KeyCode::Char('o'))),
            LandingAction::None
        );
        assert_eq!(
            handle_key(&mut state, true, key(KeyCode::Char('o'))),
            LandingAction::Logout
        );
    }

    #[test]
    fn test_logout_failure_sets_notice() {
        let mut state = LandingState::default();
        let (mutations, navigate) = handle_logged_out(&mut state, Err("disk full".into()));
        assert!(mutations.is_empty());
        assert!(!navigate);
        assert_eq!(state.notice.as_deref(), Some("Logout failed: disk full"));
    }
}
