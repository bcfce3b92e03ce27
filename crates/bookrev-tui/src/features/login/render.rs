use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{LoginField, LoginState};
use crate::render::{FIELD_HEIGHT, form_area, render_field};

pub fn render_login(
    frame: &mut Frame,
    area: Rect,
    state: &LoginState,
    authenticated: bool,
    pending: Option<&str>,
) {
    let area = form_area(area);
    let [intro_area, user_area, pass_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Min(1),
    ])
    .areas(area);

    let intro = if authenticated {
        Line::from(Span::styled(
            "You are logged in. Log in again to switch accounts.",
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from("Log in to add books to the catalog.")
    };
    frame.render_widget(Paragraph::new(intro), intro_area);

    render_field(
        frame,
        user_area,
        "Username or email",
        &state.username,
        state.focus == LoginField::Username,
    );
    render_field(
        frame,
        pass_area,
        "Password",
        &state.password,
        state.focus == LoginField::Password,
    );

    let status = if let Some(spinner) = pending {
        Line::from(Span::styled(
            format!("{spinner} Logging in..."),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = &state.error {
        Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)))
    } else {
        Line::from(Span::styled(
            "Enter to log in, Tab to switch fields, Esc to go back",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(status), status_area);
}
