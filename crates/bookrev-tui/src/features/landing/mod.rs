//! Landing view: featured books and auth-dependent navigation hints.

mod render;
mod state;
mod update;

pub use render::render_landing;
pub use state::{FEATURED_BOOKS, FeaturedBook, LandingState};
pub use update::{LandingAction, handle_key, handle_logged_out};
