//! Full-screen terminal client for the book review backend.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod render;
pub mod router;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{add_book, book_list, landing, login};
pub use router::Route;
pub use runtime::{Services, TuiRuntime};
use state::AppState;

/// Runs the interactive client until the user quits.
///
/// Must be called from within a tokio runtime; backend calls are spawned
/// onto it while the calling thread drives the terminal.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal fails.
pub fn run_tui(services: Services, base_url: &str, initial: Route) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The interactive client requires a terminal.\n\
             Use `bookrev books list` for non-interactive access."
        );
    }

    tracing::info!(base_url, route = initial.path(), "starting interactive client");
    let mut runtime = TuiRuntime::new(AppState::new(base_url), services)?;
    let result = runtime.run(initial);
    drop(runtime);
    tracing::info!("interactive client exited");
    result
}
