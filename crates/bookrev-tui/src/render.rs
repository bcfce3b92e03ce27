//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame and never mutate
//! state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::add_book::render_add_book;
use crate::book_list::render_book_list;
use crate::common::{TaskKind, TextField};
use crate::landing::render_landing;
use crate::login::render_login;
use crate::router::Route;
use crate::state::AppState;

/// Spinner frames for pending requests.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Height of a bordered single-line input.
pub const FIELD_HEIGHT: u16 = 3;

/// Max width of form views.
const FORM_WIDTH: u16 = 60;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_tabs(app, frame, header_area);

    let body = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.route.path()));
    let inner = body.inner(body_area);
    frame.render_widget(body, body_area);

    let spinner = spinner(app);
    match app.route {
        Route::Landing => render_landing(frame, inner, &app.landing, app.authenticated),
        Route::BookList => {
            render_book_list(frame, inner, &app.book_list, app.authenticated, spinner);
        }
        Route::Login => render_login(
            frame,
            inner,
            &app.login,
            app.authenticated,
            pending(app, TaskKind::Login),
        ),
        Route::AddBook => render_add_book(
            frame,
            inner,
            &app.add_book,
            app.authenticated,
            pending(app, TaskKind::BookCreate),
        ),
    }

    render_status_line(app, frame, status_area);
}

fn render_tabs(app: &AppState, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = Route::ALL
        .iter()
        .enumerate()
        .map(|(idx, route)| Line::from(format!("{} {}", idx + 1, route.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.route.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Book Reviews "),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, area);
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let (auth_label, auth_style) = if app.authenticated {
        ("logged in", Style::default().fg(Color::Green))
    } else {
        ("logged out", Style::default().fg(Color::DarkGray))
    };
    let keys = if app.route.is_form() {
        "Esc back · Ctrl+C quit"
    } else {
        "1-4/Tab navigate · q quit"
    };

    let line = Line::from(vec![
        Span::styled(auth_label, auth_style),
        Span::styled(
            format!("  {}  ", app.base_url),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(keys),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn spinner(app: &AppState) -> &'static str {
    SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()]
}

fn pending(app: &AppState, kind: TaskKind) -> Option<&'static str> {
    app.tasks.state(kind).is_running().then(|| spinner(app))
}

/// Centers form views horizontally.
pub fn form_area(area: Rect) -> Rect {
    let width = area.width.min(FORM_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Draws a labelled input box and places the cursor when focused.
pub fn render_field(frame: &mut Frame, area: Rect, label: &str, field: &TextField, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {label} "));
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(field.display()).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let offset = field.cursor_column().min(inner.width - 1);
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_landing_shows_featured_books() {
        let app = AppState::new("http://localhost:8080");
        let screen = draw(&app);
        assert!(screen.contains("The Witch Craft"));
        assert!(screen.contains("Business Mindset"));
        assert!(screen.contains("Log in"));
        assert!(screen.contains("http://localhost:8080"));
    }

    #[test]
    fn test_landing_shows_logout_when_authenticated() {
        let mut app = AppState::new("http://localhost:8080");
        app.authenticated = true;
        let screen = draw(&app);
        assert!(screen.contains("Log out"));
        assert!(screen.contains("Add a book"));
    }

    #[test]
    fn test_book_list_error_is_rendered() {
        let mut app = AppState::new("http://localhost:8080");
        app.route = Route::BookList;
        app.book_list.error = Some("Failed to load books".into());
        assert!(draw(&app).contains("Failed to load books"));
    }

    #[test]
    fn test_login_password_is_masked() {
        let mut app = AppState::new("http://localhost:8080");
        app.route = Route::Login;
        app.login.username.set_value("admin");
        app.login.password.set_value("hunter2");
        let screen = draw(&app);
        assert!(screen.contains("admin"));
        assert!(!screen.contains("hunter2"));
        assert!(screen.contains("*******"));
    }

    #[test]
    fn test_form_area_is_centered() {
        let area = form_area(Rect::new(0, 0, 100, 10));
        assert_eq!(area, Rect::new(20, 0, 60, 10));
        assert_eq!(form_area(Rect::new(2, 1, 40, 5)), Rect::new(2, 1, 40, 5));
    }
}
