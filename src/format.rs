//! Format codecs: converting between the grid and external text formats.
//!
//! Three representations are supported in both directions where it makes
//! sense:
//! - **Delimited text** (tab or comma separated) — import only, via a naive
//!   delimiter split. Quoting and escaping of embedded delimiters or
//!   newlines is deliberately not supported; this matches the export side,
//!   which never escapes cell content either.
//! - **Pipe tables** — import, covering both Markdown tables and box-drawn
//!   fixed-width tables. Border rows (dashes and plus signs) are filtered
//!   out, and a border line directly below the first content line marks
//!   that line as the header row.
//! - **Markdown / fixed-width** — export via [`to_markdown`] and
//!   [`to_fixed_width`].
//!
//! Padding and width computation count `char`s; wide glyphs will misalign
//! on fixed-width export.

use thiserror::Error;

/// A recognized clipboard format, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteFormat {
    /// Tab-separated values.
    Tsv,
    /// Comma-separated values.
    Csv,
    /// Pipe-delimited table (Markdown or box-drawn).
    Pipe,
}

/// The result of parsing pasted text: a header row (possibly absent, i.e.
/// empty) and zero or more data rows. Rows may be ragged; normalization is
/// the grid's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Why pasted text could not be imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("unsupported format: expected tab, comma, or pipe separated text")]
    UnsupportedFormat,
    #[error("no table rows found in pasted text")]
    Empty,
}

/// Inspect pasted text and pick the format to parse it as.
///
/// Priority: any tab wins, then any comma, then pipes — but pipe input must
/// still contain at least one non-border content line, otherwise the text
/// is just a box fragment and unsupported.
pub fn detect(text: &str) -> Option<PasteFormat> {
    if text.contains('\t') {
        return Some(PasteFormat::Tsv);
    }
    if text.contains(',') {
        return Some(PasteFormat::Csv);
    }
    if text.contains('|') && content_lines(text).any(|line| !is_border_line(line)) {
        return Some(PasteFormat::Pipe);
    }
    None
}

/// Parse pasted text as the given format.
///
/// Never fails: malformed structure yields a best-effort split. Callers
/// normalize ragged rows through `Grid::replace`.
pub fn parse(text: &str, format: PasteFormat) -> ParsedTable {
    match format {
        PasteFormat::Tsv => parse_delimited(text, '\t'),
        PasteFormat::Csv => parse_delimited(text, ','),
        PasteFormat::Pipe => parse_pipe(text),
    }
}

/// Detect and parse in one step, reporting unusable input as an error.
///
/// The empty-result policy is: an import that yields neither headers nor
/// rows is an error the user hears about, not a silent no-op.
pub fn import(text: &str) -> Result<ParsedTable, ImportError> {
    let format = detect(text).ok_or(ImportError::UnsupportedFormat)?;
    let table = parse(text, format);
    if table.headers.is_empty() && table.rows.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(table)
}

/// Render a standard Markdown pipe table, trailing newline included.
/// Cell content is not escaped; embedded pipes or newlines will break the
/// table shape.
pub fn to_markdown(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut markdown = format!("| {} |\n", headers.join(" | "));
    markdown.push_str(&format!(
        "| {} |\n",
        vec!["---"; headers.len()].join(" | ")
    ));
    for row in rows {
        markdown.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    markdown
}

/// Render a box-drawn fixed-width table for monospace chat platforms.
///
/// Column width is the widest of the header and every cell in that column,
/// counted in chars. Each border segment is width+2 dashes so the `+`
/// joints line up with the `| cell |` padding. No trailing newline.
pub fn to_fixed_width(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let max_cell = rows
                .iter()
                .map(|row| row[idx].chars().count())
                .max()
                .unwrap_or(0);
            header.chars().count().max(max_cell)
        })
        .collect();

    let separator = format!(
        "+-{}-+",
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-")
    );
    let render_row = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        format!("| {} |", padded.join(" | "))
    };

    let mut out = format!("{separator}\n{}\n{separator}\n", render_row(headers));
    for row in rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&separator);
    out
}

fn parse_delimited(text: &str, delimiter: char) -> ParsedTable {
    let mut lines = content_lines(text);
    let headers = lines
        .next()
        .map(|line| split_on(line, delimiter))
        .unwrap_or_default();
    let rows = lines.map(|line| split_on(line, delimiter)).collect();
    ParsedTable { headers, rows }
}

fn parse_pipe(text: &str) -> ParsedTable {
    let lines: Vec<&str> = content_lines(text).collect();
    let Some(first) = lines.iter().position(|line| !is_border_line(line)) else {
        return ParsedTable::default();
    };

    // Explicit header flag: a border line directly below the first content
    // line marks it as the header. Covers Markdown tables (separator at
    // line 1) and box tables (borders at lines 0 and 2) alike.
    let has_header = lines
        .get(first + 1)
        .is_some_and(|line| is_border_line(line));

    let mut content = lines
        .into_iter()
        .skip(first)
        .filter(|line| !is_border_line(line))
        .map(pipe_cells);

    let headers = if has_header {
        content.next().unwrap_or_default()
    } else {
        Vec::new()
    };
    ParsedTable {
        headers,
        rows: content.collect(),
    }
}

/// Non-blank lines of the input. `str::lines` already strips `\r`.
fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

fn split_on(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(str::to_string).collect()
}

/// Strip outer pipes and split the remainder into trimmed cells.
fn pipe_cells(line: &str) -> Vec<String> {
    let inner = line.trim();
    let inner = inner.strip_prefix('|').unwrap_or(inner);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// A border/separator row carries no data: either the `+--…` edge of a
/// box-drawn table, or a row whose every cell is a run of dashes and plus
/// signs (a Markdown header separator).
fn is_border_line(line: &str) -> bool {
    let cells = pipe_cells(line);
    let Some(first) = cells.first() else {
        return false;
    };
    if first.starts_with("+--") {
        return true;
    }
    cells
        .iter()
        .all(|cell| !cell.is_empty() && cell.chars().all(|c| c == '-' || c == '+'))
}
