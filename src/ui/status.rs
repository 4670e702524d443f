use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, Section, ToastLevel};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let mode = if model.is_editing() { "EDIT" } else { "NAV" };
    let position = match model.cursor.section {
        Section::Header => format!(
            "Header  Col {}/{}",
            model.cursor.col + 1,
            model.grid.column_count()
        ),
        Section::Body(row) => format!(
            "Row {}/{}  Col {}/{}",
            row + 1,
            model.grid.row_count(),
            model.cursor.col + 1,
            model.grid.column_count()
        ),
    };

    let status = format!(" {mode}  {position}  F1:help  Ctrl+Q:quit");
    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
