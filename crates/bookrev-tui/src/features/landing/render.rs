use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::{FEATURED_BOOKS, LandingState};

pub fn render_landing(frame: &mut Frame, area: Rect, state: &LandingState, authenticated: bool) {
    let [intro_area, featured_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(7)]).areas(area);

    frame.render_widget(
        Paragraph::new(intro_lines(authenticated)).wrap(Wrap { trim: false }),
        intro_area,
    );

    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(featured_area);

    let items: Vec<ListItem> = FEATURED_BOOKS
        .iter()
        .map(|book| {
            ListItem::new(Line::from(vec![
                Span::styled(book.title, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {}", book.author),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Featured books "),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let book = state.selected_book();
    let mut detail = vec![
        Line::from(Span::styled(
            book.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Author", book.author),
        field_line("Genre", book.genre),
        field_line("Cover", book.cover),
    ];
    if let Some(notice) = &state.notice {
        detail.push(Line::from(""));
        detail.push(Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(Color::Red),
        )));
    }
    frame.render_widget(
        Paragraph::new(detail)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Details ")),
        detail_area,
    );
}

fn intro_lines(authenticated: bool) -> Vec<Line<'static>> {
    let hint = Style::default().fg(Color::Yellow);
    let mut lines = vec![
        Line::from(Span::styled(
            "Discover your next favourite book",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Read what others think, then share your own reviews."),
        Line::from(""),
    ];
    if authenticated {
        lines.push(Line::from(vec![
            Span::styled("[2]", hint),
            Span::raw(" Browse books   "),
            Span::styled("[4]", hint),
            Span::raw(" Add a book   "),
            Span::styled("[o]", hint),
            Span::raw(" Log out"),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled("[2]", hint),
            Span::raw(" Browse books   "),
            Span::styled("[3]", hint),
            Span::raw(" Log in"),
        ]));
    }
    lines
}

fn field_line(label: &'static str, value: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}
