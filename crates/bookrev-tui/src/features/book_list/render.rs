use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use super::BookListState;

pub fn render_book_list(
    frame: &mut Frame,
    area: Rect,
    state: &BookListState,
    authenticated: bool,
    spinner: &str,
) {
    let [hint_area, table_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);

    let hint = Style::default().fg(Color::Yellow);
    let mut hints = vec![Span::styled("[r]", hint), Span::raw(" Reload")];
    if authenticated {
        hints.push(Span::raw("   "));
        hints.push(Span::styled("[4]", hint));
        hints.push(Span::raw(" Add a book"));
    }
    frame.render_widget(Paragraph::new(Line::from(hints)), hint_area);

    let title = if state.loading {
        format!(" Books {spinner} loading ")
    } else {
        format!(" Books ({}) ", state.books.len())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if let Some(error) = &state.error {
        let message = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )))
        .block(block);
        frame.render_widget(message, table_area);
        return;
    }

    if state.books.is_empty() {
        let text = if state.loading {
            "Loading books..."
        } else {
            "No books yet."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray))).block(block),
            table_area,
        );
        return;
    }

    let header = Row::new(["ID", "Title", "Author", "Genre"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = state.books.iter().map(|book| {
        Row::new([
            Cell::from(book.id.to_string()),
            Cell::from(book.title.as_str()),
            Cell::from(book.author.as_str()),
            Cell::from(book.genre.as_str()),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, table_area, &mut table_state);
}
