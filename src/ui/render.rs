use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::{CellEditor, Model, Section};
use crate::ui::{MIN_COLUMN_WIDTH, overlays, status};

/// Render the full frame: grid, status bar, toast, and overlays.
///
/// Pending focus requests from `update` are applied here, before layout,
/// so the frame always draws the cursor where a structural change put it.
pub fn render(model: &mut Model, frame: &mut Frame) {
    if let Some(target) = model.take_focus_request() {
        model.apply_focus(target);
    }

    let area = frame.area();
    let toast_active = model.active_toast().is_some();
    let footer_rows = 1 + u16::from(toast_active);
    let grid_area = Rect {
        height: area.height.saturating_sub(footer_rows),
        ..area
    };
    let toast_area = Rect {
        y: area.y + area.height.saturating_sub(1 + u16::from(toast_active)),
        height: 1,
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    render_grid(model, frame, grid_area);

    if toast_active {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area);

    if model.confirm_active() {
        overlays::render_confirm_overlay(model, frame, area);
    }
    if model.help_visible {
        overlays::render_help_overlay(frame, area);
    }
}

/// Display width of each column: the widest header or cell, with room for
/// the edit cursor in the focused column.
pub fn column_widths(model: &Model) -> Vec<u16> {
    let mut widths: Vec<usize> = model
        .grid
        .headers()
        .iter()
        .map(|h| h.width().max(MIN_COLUMN_WIDTH))
        .collect();
    for row in model.grid.rows() {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.width());
        }
    }
    if let Some(editor) = &model.editor {
        // One extra column so the block cursor fits past the last char.
        widths[model.cursor.col] = widths[model.cursor.col].max(editor.text().width() + 1);
    }
    widths
        .into_iter()
        .map(|w| u16::try_from(w).unwrap_or(u16::MAX))
        .collect()
}

fn render_grid(model: &Model, frame: &mut Frame, area: Rect) {
    let widths = column_widths(model);
    let border = border_line(&widths);

    // Top border, header, separator, and bottom border take four lines;
    // the rest scroll over the body rows, keeping the cursor row visible.
    let body_height = area.height.saturating_sub(4) as usize;
    let cursor_row = match model.cursor.section {
        Section::Header => 0,
        Section::Body(row) => row,
    };
    let first_row = cursor_row.saturating_sub(body_height.saturating_sub(1));
    let last_row = (first_row + body_height.max(1)).min(model.grid.row_count());

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::styled(border.clone(), border_style()));
    lines.push(grid_line(model, &widths, Section::Header));
    lines.push(Line::styled(border.clone(), border_style()));
    for row in first_row..last_row {
        lines.push(grid_line(model, &widths, Section::Body(row)));
    }
    lines.push(Line::styled(border, border_style()));

    frame.render_widget(Paragraph::new(lines), area);
}

/// One rendered row of the grid, header or body, with cursor highlighting.
fn grid_line(model: &Model, widths: &[u16], section: Section) -> Line<'static> {
    let base = match section {
        Section::Header => Style::default().add_modifier(Modifier::BOLD),
        Section::Body(_) => Style::default(),
    };

    let mut spans: Vec<Span> = vec![Span::styled("|", border_style())];
    for (col, width) in widths.iter().enumerate() {
        let focused = model.cursor.section == section && model.cursor.col == col;
        let width = *width as usize;
        spans.push(Span::raw(" "));
        if focused && let Some(editor) = &model.editor {
            spans.extend(editing_cell_spans(editor, width, base));
        } else {
            let text = match section {
                Section::Header => model.grid.header(col),
                Section::Body(row) => model.grid.cell(row, col),
            };
            let style = if focused {
                base.add_modifier(Modifier::REVERSED)
            } else {
                base
            };
            spans.push(Span::styled(pad_to_width(text, width), style));
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled("|", border_style()));
    }
    Line::from(spans)
}

/// Cell content split at the text cursor so one char renders as a block
/// cursor. Char-based split; the editor cursor is a char index.
fn editing_cell_spans(editor: &CellEditor, width: usize, base: Style) -> Vec<Span<'static>> {
    let text = editor.text();
    let before: String = text.chars().take(editor.cursor()).collect();
    let cursor_char = text.chars().nth(editor.cursor()).unwrap_or(' ');
    let after: String = text.chars().skip(editor.cursor() + 1).collect();

    let used = before.width() + cursor_char.to_string().width() + after.width();
    let fill = " ".repeat(width.saturating_sub(used));

    let mut spans = Vec::new();
    if !before.is_empty() {
        spans.push(Span::styled(before, base));
    }
    spans.push(Span::styled(
        cursor_char.to_string(),
        Style::default().bg(Color::White).fg(Color::Black),
    ));
    if !after.is_empty() {
        spans.push(Span::styled(after, base));
    }
    if !fill.is_empty() {
        spans.push(Span::styled(fill, base));
    }
    spans
}

fn pad_to_width(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn border_line(widths: &[u16]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| "-".repeat(*w as usize))
        .collect();
    format!("+-{}-+", segments.join("-+-"))
}

fn border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
