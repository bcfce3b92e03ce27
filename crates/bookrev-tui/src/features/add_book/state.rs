use bookrev_core::api::CreateBook;

use crate::common::TextField;

pub const ADD_FAILED_MESSAGE: &str = "Failed to add book. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddBookField {
    #[default]
    Title,
    Author,
    Genre,
}

impl AddBookField {
    pub fn next(self) -> Self {
        match self {
            AddBookField::Title => AddBookField::Author,
            AddBookField::Author => AddBookField::Genre,
            AddBookField::Genre => AddBookField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            AddBookField::Title => AddBookField::Genre,
            AddBookField::Author => AddBookField::Title,
            AddBookField::Genre => AddBookField::Author,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct AddBookState {
    pub title: TextField,
    pub author: TextField,
    pub genre: TextField,
    pub focus: AddBookField,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl AddBookState {
    pub fn to_create_book(&self) -> CreateBook {
        CreateBook::new(self.title.value(), self.author.value(), self.genre.value())
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            AddBookField::Title => &mut self.title,
            AddBookField::Author => &mut self.author,
            AddBookField::Genre => &mut self.genre,
        }
    }

    /// Empties the fields and returns focus to the first one.
    pub fn clear_fields(&mut self) {
        self.title.clear();
        self.author.clear();
        self.genre.clear();
        self.focus = AddBookField::Title;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
