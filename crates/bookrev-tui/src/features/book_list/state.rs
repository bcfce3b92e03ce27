use bookrev_core::api::Book;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load books";

#[derive(Debug, Default, Clone)]
pub struct BookListState {
    /// Last successfully loaded collection, in backend order.
    pub books: Vec<Book>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: usize,
}

impl BookListState {
    /// Enters the pending state for a new load. Previously loaded books stay
    /// visible until the response replaces them.
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn replace_books(&mut self, books: Vec<Book>) {
        self.books = books;
        self.clamp_selection();
    }

    /// Inserts a book created elsewhere, replacing an entry with the same id.
    pub fn upsert(&mut self, book: Book) {
        match self.books.iter_mut().find(|existing| existing.id == book.id) {
            Some(existing) => *existing = book,
            None => self.books.push(book),
        }
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.books.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.books.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.books.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.books.len() {
            self.selected = self.books.len().saturating_sub(1);
        }
    }
}
