//! Effect handlers for the TUI runtime.
//!
//! Handlers perform the I/O behind an effect and return the resulting
//! `UiEvent`. They never touch `AppState`; the runtime decides how the event
//! is delivered.

use bookrev_core::api::{AuthClient, CatalogClient, CreateBook, Credentials};
use bookrev_core::session::SessionStore;

use crate::events::UiEvent;

pub fn check_session(session: &SessionStore) -> UiEvent {
    UiEvent::SessionChecked {
        authenticated: session.is_authenticated(),
    }
}

pub fn logout(auth: &AuthClient) -> UiEvent {
    UiEvent::LoggedOut(auth.logout().map_err(|err| format!("{err:#}")))
}

pub async fn load_books(catalog: CatalogClient) -> UiEvent {
    UiEvent::BooksLoaded(catalog.list_books().await)
}

pub async fn create_book(catalog: CatalogClient, data: CreateBook) -> UiEvent {
    UiEvent::BookCreated(catalog.create_book(&data).await)
}

pub async fn login(auth: AuthClient, credentials: Credentials) -> UiEvent {
    UiEvent::LoginFinished(auth.login(&credentials).await.map(|_token| ()))
}

#[cfg(test)]
mod tests {
    use bookrev_core::api::{ApiClient, AuthError, CatalogError};

    use super::*;

    /// Returns a base URL nothing is listening on.
    fn unreachable_api() -> ApiClient {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        ApiClient::new(&format!("http://127.0.0.1:{port}"), None).unwrap()
    }

    #[test]
    fn test_check_session_and_logout() {
        let session = SessionStore::in_memory();
        session.set_token("jwt").unwrap();
        let auth = AuthClient::new(unreachable_api(), session.clone());

        assert!(matches!(
            check_session(&session),
            UiEvent::SessionChecked {
                authenticated: true
            }
        ));
        assert!(matches!(logout(&auth), UiEvent::LoggedOut(Ok(()))));
        assert!(matches!(
            check_session(&session),
            UiEvent::SessionChecked {
                authenticated: false
            }
        ));
    }

    #[tokio::test]
    async fn test_load_books_unreachable_is_transport() {
        let catalog = CatalogClient::new(unreachable_api(), SessionStore::in_memory());
        let event = load_books(catalog).await;
        assert!(
            matches!(event, UiEvent::BooksLoaded(Err(CatalogError::Transport(_)))),
            "got {event:?}"
        );
    }

    #[tokio::test]
    async fn test_login_blank_credentials_is_invalid() {
        let auth = AuthClient::new(unreachable_api(), SessionStore::in_memory());
        let event = login(auth, Credentials::default()).await;
        assert!(matches!(
            event,
            UiEvent::LoginFinished(Err(AuthError::Invalid(_)))
        ));
    }
}
