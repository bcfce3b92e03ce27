//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::add_book;
use crate::book_list::{self, BookListAction};
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::FormAction;
use crate::landing::{self, LandingAction};
use crate::login::{self, LoginOutcome};
use crate::mutations::StateMutation;
use crate::router::Route;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Navigate(route) => navigate(app, route),
        UiEvent::SessionChecked { authenticated } => {
            app.authenticated = authenticated;
            vec![]
        }
        UiEvent::LoggedOut(result) => {
            let (mutations, go_home) = landing::handle_logged_out(&mut app.landing, result);
            let mut effects = apply_mutations(app, mutations);
            if go_home {
                effects.extend(navigate(app, Route::Landing));
            }
            effects
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, id = completed.id.0, "dropping stale task result");
                vec![]
            }
        }
        UiEvent::BooksLoaded(result) => {
            book_list::handle_books_loaded(&mut app.book_list, result);
            vec![]
        }
        UiEvent::BookCreated(result) => {
            let mutations = add_book::handle_book_created(&mut app.add_book, result);
            apply_mutations(app, mutations)
        }
        UiEvent::LoginFinished(result) => {
            let (mutations, outcome) = login::handle_login_finished(&mut app.login, result);
            let mut effects = apply_mutations(app, mutations);
            if outcome == LoginOutcome::Remount {
                let current = app.route;
                effects.extend(navigate(app, current));
            }
            effects
        }
    }
}

/// Mounts `route`.
///
/// Every mount re-reads the session. The book list starts a fresh load each
/// time; forms start empty unless a submit is still in flight.
pub fn navigate(app: &mut AppState, route: Route) -> Vec<UiEffect> {
    if route != app.route {
        tracing::debug!(from = app.route.path(), to = route.path(), "navigate");
    }
    app.route = route;

    let mut effects = vec![UiEffect::CheckSession];
    match route {
        Route::Landing => app.landing.on_mount(),
        Route::BookList => {
            app.book_list.start_loading();
            let task = app.tasks.begin(TaskKind::BookList, &mut app.task_seq);
            effects.push(UiEffect::LoadBooks { task });
        }
        Route::Login => {
            if !app.tasks.login.is_running() {
                app.login.reset();
            }
        }
        Route::AddBook => {
            if !app.tasks.book_create.is_running() {
                app.add_book.reset();
            }
        }
    }
    effects
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            match app.route {
                Route::Login => app.login.focused_mut().insert_str(&text),
                Route::AddBook => app.add_book.focused_mut().insert_str(&text),
                Route::Landing | Route::BookList => {}
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }
    if key.code == KeyCode::Esc {
        return if app.route == Route::Landing {
            vec![]
        } else {
            navigate(app, Route::Landing)
        };
    }

    let current = app.route;
    if !current.is_form() {
        match key.code {
            KeyCode::Char('q') => return vec![UiEffect::Quit],
            KeyCode::Tab => return navigate(app, current.next()),
            KeyCode::BackTab => return navigate(app, current.prev()),
            KeyCode::Char(c) if !ctrl => {
                if let Some(route) = Route::from_digit(c) {
                    return navigate(app, route);
                }
            }
            _ => {}
        }
    }

    match current {
        Route::Landing => match landing::handle_key(&mut app.landing, app.authenticated, key) {
            LandingAction::Logout => vec![UiEffect::Logout],
            LandingAction::None => vec![],
        },
        Route::BookList => match book_list::handle_key(&mut app.book_list, key) {
            BookListAction::Reload => navigate(app, Route::BookList),
            BookListAction::None => vec![],
        },
        Route::Login => match login::handle_key(&mut app.login, key) {
            FormAction::Submit => submit_login(app),
            FormAction::None => vec![],
        },
        Route::AddBook => match add_book::handle_key(&mut app.add_book, key) {
            FormAction::Submit => submit_add_book(app),
            FormAction::None => vec![],
        },
    }
}

fn submit_login(app: &mut AppState) -> Vec<UiEffect> {
    if app.tasks.login.is_running() {
        return vec![];
    }
    app.login.error = None;
    let task = app.tasks.begin(TaskKind::Login, &mut app.task_seq);
    vec![UiEffect::Login {
        task,
        credentials: app.login.credentials(),
    }]
}

fn submit_add_book(app: &mut AppState) -> Vec<UiEffect> {
    if app.tasks.book_create.is_running() {
        return vec![];
    }
    app.add_book.error = None;
    app.add_book.success = None;
    let task = app.tasks.begin(TaskKind::BookCreate, &mut app.task_seq);
    vec![UiEffect::CreateBook {
        task,
        data: app.add_book.to_create_book(),
    }]
}

/// Applies cross-view mutations.
///
/// A book added while a list load is in flight restarts that load.
fn apply_mutations(app: &mut AppState, mutations: Vec<StateMutation>) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    for mutation in mutations {
        match mutation {
            StateMutation::BookAdded(book) => {
                app.book_list.upsert(book);
                if app.tasks.book_list.is_running() {
                    app.book_list.start_loading();
                    let task = app.tasks.begin(TaskKind::BookList, &mut app.task_seq);
                    effects.push(UiEffect::LoadBooks { task });
                }
            }
            StateMutation::SetAuthenticated(authenticated) => app.authenticated = authenticated,
        }
    }
    effects
}
