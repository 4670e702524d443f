use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn render_confirm_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(table) = &model.pending_paste else {
        return;
    };
    let popup = centered_popup_rect(48, 9, area);

    let dim_style = Style::default().fg(Color::Indexed(245));
    let lines = vec![
        Line::raw("Replace the table with the pasted data?"),
        Line::raw(""),
        Line::raw(format!(
            "{} column(s), {} row(s)",
            table.headers.len(),
            table.rows.len()
        )),
        Line::raw(""),
        Line::styled("Enter/y apply \u{b7} Esc/n cancel", dim_style),
    ];

    let block = Block::default()
        .title("Paste")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).clamp(48, 60);
    let popup = centered_popup_rect(popup_width, 22, area);

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let lines = vec![
        Line::styled("Structure", section_style),
        Line::raw("  Ctrl+A / Ctrl+R     Add / remove column"),
        Line::raw("  Ctrl+S / Ctrl+D     Add / remove row"),
        Line::raw("  Delete              Clear table (navigate mode)"),
        Line::styled("Navigation", section_style),
        Line::raw("  Arrows              Move (Up from row 1: header)"),
        Line::raw("  Tab                 Next cell, grows the grid"),
        Line::raw("  Enter               Cell below; last row adds a row"),
        Line::styled("Editing", section_style),
        Line::raw("  Type                Replace cell; F2 edits in place"),
        Line::raw("  Esc                 Cancel edit"),
        Line::styled("Clipboard", section_style),
        Line::raw("  Ctrl+M              Copy as Markdown"),
        Line::raw("  Ctrl+L              Copy as fixed-width text"),
        Line::raw("  Ctrl+V / paste      Import TSV, CSV, or pipe table"),
        Line::styled("Other", section_style),
        Line::raw("  F1 toggles help     Ctrl+Q / Ctrl+C quits"),
        Line::styled("any key closes", dim_style),
    ];

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

pub(super) fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
