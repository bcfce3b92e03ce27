use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{AddBookField, AddBookState};
use crate::render::{FIELD_HEIGHT, form_area, render_field};

pub fn render_add_book(
    frame: &mut Frame,
    area: Rect,
    state: &AddBookState,
    authenticated: bool,
    pending: Option<&str>,
) {
    let area = form_area(area);
    let [intro_area, title_area, author_area, genre_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Min(1),
    ])
    .areas(area);

    let intro = if authenticated {
        Line::from("Add a new book to the catalog.")
    } else {
        Line::from(Span::styled(
            "You are not logged in. The backend may reject new books.",
            Style::default().fg(Color::Yellow),
        ))
    };
    frame.render_widget(Paragraph::new(intro), intro_area);

    render_field(
        frame,
        title_area,
        "Title",
        &state.title,
        state.focus == AddBookField::Title,
    );
    render_field(
        frame,
        author_area,
        "Author",
        &state.author,
        state.focus == AddBookField::Author,
    );
    render_field(
        frame,
        genre_area,
        "Genre",
        &state.genre,
        state.focus == AddBookField::Genre,
    );

    let status = if let Some(spinner) = pending {
        Line::from(Span::styled(
            format!("{spinner} Adding book..."),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = &state.error {
        Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)))
    } else if let Some(success) = &state.success {
        Line::from(Span::styled(
            success.as_str(),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            "Enter to submit, Tab to switch fields, Esc to go back",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(status), status_area);
}
