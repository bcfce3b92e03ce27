use bookrev_core::api::AuthError;
use crossterm::event::{KeyCode, KeyEvent};

use super::{LOGIN_FAILED_MESSAGE, LoginState};
use crate::features::FormAction;
use crate::mutations::StateMutation;

/// What the top-level reducer should do after a login completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Remount the current view so every view re-reads session state.
    Remount,
    Stay,
}

pub fn handle_key(state: &mut LoginState, key: KeyEvent) -> FormAction {
    match key.code {
        KeyCode::Enter => return FormAction::Submit,
        KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.next();
        }
        _ => {
            state.focused_mut().handle_key(key);
        }
    }
    FormAction::None
}

/// Applies the single completion of a `login` call.
///
/// Success clears the form; failure keeps it populated for a retry.
pub fn handle_login_finished(
    state: &mut LoginState,
    result: Result<(), AuthError>,
) -> (Vec<StateMutation>, LoginOutcome) {
    match result {
        Ok(()) => {
            state.reset();
            (
                vec![StateMutation::SetAuthenticated(true)],
                LoginOutcome::Remount,
            )
        }
        Err(err) => {
            tracing::warn!(error = %err, "login failed");
            state.error = Some(LOGIN_FAILED_MESSAGE.to_string());
            (vec![], LoginOutcome::Stay)
        }
    }
}
