/// A hard-coded showcase entry. Presentational only, never fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedBook {
    pub title: &'static str,
    pub author: &'static str,
    pub genre: &'static str,
    pub cover: &'static str,
}

pub static FEATURED_BOOKS: [FeaturedBook; 5] = [
    FeaturedBook {
        title: "The Witch Craft",
        author: "Putri K. Jasmin",
        genre: "Horror",
        cover: "/images/witchcraft_book_cover.jpg",
    },
    FeaturedBook {
        title: "The Casualty",
        author: "Daniel Kang",
        genre: "Fantasy",
        cover: "/images/casualty_book_cover.jpg",
    },
    FeaturedBook {
        title: "The Designer",
        author: "Nur Farah",
        genre: "Education",
        cover: "/images/design_book_cover.jpg",
    },
    FeaturedBook {
        title: "Horror Show",
        author: "Stephanie Young",
        genre: "Thriller",
        cover: "/images/horrorshow_book_cover.png",
    },
    FeaturedBook {
        title: "Business Mindset",
        author: "Mateen Lutfi",
        genre: "Non-Fiction",
        cover: "/images/own_business_book_cover.avif",
    },
];

#[derive(Debug, Default, Clone)]
pub struct LandingState {
    /// Highlighted featured entry.
    pub selected: usize,
    /// One-line status shown under the featured list (logout failures).
    pub notice: Option<String>,
}

impl LandingState {
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % FEATURED_BOOKS.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + FEATURED_BOOKS.len() - 1) % FEATURED_BOOKS.len();
    }

    pub fn selected_book(&self) -> &'static FeaturedBook {
        &FEATURED_BOOKS[self.selected % FEATURED_BOOKS.len()]
    }

    pub fn on_mount(&mut self) {
        self.notice = None;
    }
}
