//! Static route table.
//!
//! Four routes, no guards. Views that care about auth state read it after
//! they mount.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Landing,
    BookList,
    Login,
    AddBook,
}

impl Route {
    /// All routes in navigation order.
    pub const ALL: [Route; 4] = [Route::Landing, Route::BookList, Route::Login, Route::AddBook];

    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::BookList => "/book-list",
            Route::Login => "/login",
            Route::AddBook => "/add-book",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::BookList => "Books",
            Route::Login => "Login",
            Route::AddBook => "Add Book",
        }
    }

    /// Resolves a path against the route table.
    ///
    /// A trailing slash is ignored. Unknown paths resolve to `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Route bound to a digit key (`1`-`4`).
    pub fn from_digit(c: char) -> Option<Route> {
        let idx = c.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(usize::try_from(idx).ok()?).copied()
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|route| *route == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Route {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Route {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Views that hold text fields; they keep plain keys for typing.
    pub fn is_form(self) -> bool {
        matches!(self, Route::Login | Route::AddBook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_resolves_canonical_table() {
        assert_eq!(Route::from_path("/"), Some(Route::Landing));
        assert_eq!(Route::from_path("/book-list"), Some(Route::BookList));
        assert_eq!(Route::from_path("/login/"), Some(Route::Login));
        assert_eq!(Route::from_path("/add-book"), Some(Route::AddBook));
        assert_eq!(Route::from_path("/books"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(Route::from_digit('1'), Some(Route::Landing));
        assert_eq!(Route::from_digit('4'), Some(Route::AddBook));
        assert_eq!(Route::from_digit('0'), None);
        assert_eq!(Route::from_digit('5'), None);
        assert_eq!(Route::from_digit('x'), None);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(Route::AddBook.next(), Route::Landing);
        assert_eq!(Route::Landing.prev(), Route::AddBook);
        assert_eq!(Route::BookList.next(), Route::Login);
    }
}
