//! CLI entry and dispatch.

use anyhow::{Context as _, Result};
use bookrev_core::config::{BASE_URL_ENV, Config};
use bookrev_core::telemetry::{self, LogTarget, TelemetryGuard};
use bookrev_tui::Route;
use clap::Parser;

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "bookrev")]
#[command(version)]
#[command(about = "Browse and add books in a book review catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backend base URL (overrides config)
    #[arg(long, global = true, env = BASE_URL_ENV, value_name = "URL")]
    base_url: Option<String>,

    /// View to open in the interactive client (/, /book-list, /login, /add-book)
    #[arg(long, default_value = "/", value_name = "PATH")]
    route: String,

    /// Log at the configured level instead of warnings only
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Username or email
        #[arg(short, long)]
        user: String,

        /// Password (prompted on stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Clear the stored session token
    Logout,

    /// Show whether a session token is stored
    Status,

    /// Browse and add books
    Books {
        #[command(subcommand)]
        command: BookCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum BookCommands {
    /// List every book in the catalog
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a single book
    Show {
        /// The ID of the book
        #[arg(value_name = "BOOK_ID")]
        id: i64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Add a book to the catalog
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        genre: String,

        /// Print the created book as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        base_url,
        route,
        verbose,
    } = cli;

    // default to the interactive client
    let Some(command) = command else {
        let route = Route::from_path(&route).with_context(|| {
            format!("Unknown route '{route}' (expected /, /book-list, /login or /add-book)")
        })?;
        let config = Config::load().context("load config")?;
        let _guard = telemetry::init(&config.log.level, LogTarget::File(config.log_file()))?;
        let ctx = Context::new(config, base_url.as_deref())?;
        return commands::tui::run(&ctx, route);
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Commands::Login { user, password } => {
            let (ctx, _guard) = setup(base_url.as_deref(), verbose)?;
            commands::auth::login(&ctx, &user, password).await
        }
        Commands::Logout => {
            let (ctx, _guard) = setup(base_url.as_deref(), verbose)?;
            commands::auth::logout(&ctx)
        }
        Commands::Status => {
            let (ctx, _guard) = setup(base_url.as_deref(), verbose)?;
            commands::auth::status(&ctx);
            Ok(())
        }
        Commands::Books { command } => {
            let (ctx, _guard) = setup(base_url.as_deref(), verbose)?;
            match command {
                BookCommands::List { json } => commands::books::list(&ctx, json).await,
                BookCommands::Show { id, json } => commands::books::show(&ctx, id, json).await,
                BookCommands::Add {
                    title,
                    author,
                    genre,
                    json,
                } => commands::books::add(&ctx, &title, &author, &genre, json).await,
            }
        }
    }
}

/// Loads config and installs stderr logging for one-shot commands.
///
/// Only warnings are logged unless `--verbose` (or `BOOKREV_LOG`) asks for more.
fn setup(base_url: Option<&str>, verbose: bool) -> Result<(Context, TelemetryGuard)> {
    let config = Config::load().context("load config")?;
    let level = if verbose { config.log.level.as_str() } else { "warn" };
    let guard = telemetry::init(level, LogTarget::Stderr)?;
    let ctx = Context::new(config, base_url)?;
    Ok((ctx, guard))
}
