//! Book catalog: `GET/POST {base}/api/books`, `GET {base}/api/books/{id}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ApiClient, Failure, send_json};
use crate::session::SessionStore;

const BOOKS_PATH: &str = "/api/books";

/// A catalog record as returned by the backend.
///
/// Extra server fields (reviews, ratings) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
}

/// Payload for creating a book. Never carries an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl CreateBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }

    /// Presence check: returns the name of the first blank field.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("title", &self.title),
            ("author", &self.author),
            ("genre", &self.genre),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }

    /// True when every field still holds its empty initial value.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty() && self.genre.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Rejected locally before any request was sent.
    #[error("{0} is required")]
    Invalid(&'static str),

    /// The requested book does not exist.
    #[error("book {0} not found")]
    NotFound(i64),

    /// The backend answered with a failure (validation, conflict, 4xx/5xx, bad body).
    #[error("request rejected: {message}")]
    Rejected {
        status: Option<u16>,
        message: String,
    },

    /// No response was received.
    #[error("{0}")]
    Transport(String),
}

impl From<Failure> for CatalogError {
    fn from(failure: Failure) -> Self {
        match failure {
            Failure::Transport(message) => CatalogError::Transport(message),
            Failure::Rejected { status, message } => CatalogError::Rejected { status, message },
        }
    }
}

/// Stateless list/get/create calls against the book collection.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    api: ApiClient,
    session: SessionStore,
    attach_token: bool,
}

impl CatalogClient {
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        Self {
            api,
            session,
            attach_token: true,
        }
    }

    /// Controls whether the stored token is sent as a bearer credential.
    #[must_use]
    pub fn with_attach_token(mut self, attach_token: bool) -> Self {
        self.attach_token = attach_token;
        self
    }

    /// Returns the full collection in backend order.
    ///
    /// # Errors
    /// `CatalogError::Rejected` on non-2xx or malformed body,
    /// `CatalogError::Transport` when the backend could not be reached.
    pub async fn list_books(&self) -> Result<Vec<Book>, CatalogError> {
        let request = self.authorize(self.api.http().get(self.api.endpoint(BOOKS_PATH)));
        let books: Vec<Book> = send_json(request).await.map_err(|failure| {
            tracing::warn!(status = ?failure.status(), "listing books failed");
            CatalogError::from(failure)
        })?;
        tracing::debug!(count = books.len(), "listed books");
        Ok(books)
    }

    /// Fetches a single book by id.
    ///
    /// # Errors
    /// `CatalogError::NotFound` on 404, otherwise as [`Self::list_books`].
    pub async fn get_book(&self, id: i64) -> Result<Book, CatalogError> {
        let url = self.api.endpoint(&format!("{BOOKS_PATH}/{id}"));
        let request = self.authorize(self.api.http().get(url));
        send_json(request).await.map_err(|failure| {
            tracing::warn!(id, status = ?failure.status(), "fetching book failed");
            if failure.status() == Some(404) {
                CatalogError::NotFound(id)
            } else {
                CatalogError::from(failure)
            }
        })
    }

    /// Creates a book and returns the server-assigned record.
    ///
    /// Not idempotent: repeating the call creates duplicates.
    ///
    /// # Errors
    /// `CatalogError::Invalid` for blank fields (no request is sent),
    /// otherwise as [`Self::list_books`].
    pub async fn create_book(&self, data: &CreateBook) -> Result<Book, CatalogError> {
        if let Some(field) = data.missing_field() {
            return Err(CatalogError::Invalid(field));
        }

        let request =
            self.authorize(self.api.http().post(self.api.endpoint(BOOKS_PATH)).json(data));
        let book: Book = send_json(request).await.map_err(|failure| {
            tracing::warn!(title = %data.title, status = ?failure.status(), "creating book failed");
            CatalogError::from(failure)
        })?;
        tracing::info!(id = book.id, title = %book.title, "book created");
        Ok(book)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if !self.attach_token {
            return request;
        }
        match self.session.get_token() {
            Some(token) if !token.is_empty() => request.bearer_auth(token),
            _ => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_ignores_extra_fields() {
        let book: Book = serde_json::from_str(
            r#"{"id":7,"title":"Dune","author":"Frank Herbert","genre":"Sci-Fi","reviews":[],"averageRating":4.5}"#,
        )
        .unwrap();
        assert_eq!(book.id, 7);
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn test_create_book_never_serializes_id() {
        let json = serde_json::to_value(CreateBook::new("Dune", "Frank Herbert", "Sci-Fi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Dune", "author": "Frank Herbert", "genre": "Sci-Fi"})
        );
    }

    #[test]
    fn test_missing_field_reports_first_blank() {
        assert_eq!(CreateBook::default().missing_field(), Some("title"));
        assert_eq!(
            CreateBook::new("Dune", "  ", "").missing_field(),
            Some("author")
        );
        assert_eq!(
            CreateBook::new("Dune", "Frank Herbert", "").missing_field(),
            Some("genre")
        );
        assert_eq!(
            CreateBook::new("Dune", "Frank Herbert", "Sci-Fi").missing_field(),
            None
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(CreateBook::default().is_empty());
        assert!(!CreateBook::new("x", "", "").is_empty());
    }
}
