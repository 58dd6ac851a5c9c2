use std::borrow::Cow;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Row, Table, Widget};

/// Gap between adjacent columns.
const COLUMN_SPACING: u16 = 1;

/// Widest a single cell is drawn; longer text is cut and ends in `…`.
const MAX_CELL_WIDTH: usize = 80;

/// Row-shaped data ready to be drawn as a bordered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn new(title: &str, headers: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|header| header.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.rows.push(cells.into_iter().collect());
    }

    /// Draw the table with ratatui's `Table` widget into an off-screen buffer
    /// sized to fit the content, then read it back one line per row.
    pub fn render_lines(&self) -> Vec<String> {
        let widths = self.column_widths();
        let spacing = usize::from(COLUMN_SPACING) * widths.len().saturating_sub(1);
        let content_width = widths
            .iter()
            .fold(spacing, |total, width| total.saturating_add(usize::from(*width)));
        let width = content_width.max(text_width(&self.title)).saturating_add(2);
        let height = self.rows.len().saturating_add(3);
        let area = Rect::new(0, 0, clamp_u16(width), clamp_u16(height));

        let cells: Vec<Vec<Cow<'_, str>>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| display_cell(cell)).collect())
            .collect();

        let header = Row::new(self.headers.iter().map(String::as_str))
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows = cells
            .iter()
            .map(|row| Row::new(row.iter().map(|cell| cell.as_ref())));
        let table = Table::new(rows, widths.iter().map(|width| Constraint::Length(*width)))
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .block(Block::bordered().title(self.title.as_str()));

        let mut buffer = Buffer::empty(area);
        Widget::render(table, area, &mut buffer);
        buffer_lines(&buffer)
    }

    fn column_widths(&self) -> Vec<u16> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| text_width(&display_cell(cell)))
                    .fold(text_width(header), usize::max);
                clamp_u16(widest)
            })
            .collect()
    }
}

/// Cut `text` to [`MAX_CELL_WIDTH`] columns for display.
fn display_cell(text: &str) -> Cow<'_, str> {
    if text_width(text) <= MAX_CELL_WIDTH {
        return Cow::Borrowed(text);
    }
    let mut end = 0;
    for (index, ch) in text.char_indices() {
        let next = index + ch.len_utf8();
        if text_width(&text[..next]) >= MAX_CELL_WIDTH {
            break;
        }
        end = next;
    }
    Cow::Owned(format!("{}…", &text[..end]))
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn text_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Flatten a buffer into text. Cells hidden behind a wide grapheme are
/// skipped so the line keeps its on-screen width.
fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            let mut hidden = 0;
            for x in area.left()..area.right() {
                if hidden > 0 {
                    hidden -= 1;
                    continue;
                }
                if let Some(cell) = buffer.cell((x, y)) {
                    let symbol = cell.symbol();
                    line.push_str(symbol);
                    hidden = Span::raw(symbol).width().saturating_sub(1);
                }
            }
            line.trim_end().to_string()
        })
        .collect()
}
