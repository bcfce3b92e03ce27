//! Login view: credential form backed by the auth client.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{LOGIN_FAILED_MESSAGE, LoginField, LoginState};
pub use update::{LoginOutcome, handle_key, handle_login_finished};
