//! Box-drawing table renderer.
//!
//! ```text
//! ╒════════╤═════════╕
//! │ Tipo   │ Marca   │
//! ╞════════╪═════════╡
//! │ Moto   │ Yamaha  │
//! ├────────┼─────────┤
//! │ Moto   │ Pulsar  │
//! ╘════════╧═════════╛
//! ```

/// Extra room every column gets beyond its header text.
const HEADER_MIN_PADDING: usize = 2;

struct Border {
    left: char,
    fill: char,
    join: char,
    right: char,
}

const TOP: Border = Border { left: '╒', fill: '═', join: '╤', right: '╕' };
const BELOW_HEADER: Border = Border { left: '╞', fill: '═', join: '╪', right: '╡' };
const BETWEEN_ROWS: Border = Border { left: '├', fill: '─', join: '┼', right: '┤' };
const BOTTOM: Border = Border { left: '╘', fill: '═', join: '╧', right: '╛' };

#[derive(Debug, Clone, Default)]
pub struct GridTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl GridTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Missing trailing cells render empty; extra cells are dropped.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let widest_cell = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| text_width(cell))
                    .max()
                    .unwrap_or(0);
                widest_cell.max(text_width(header) + HEADER_MIN_PADDING)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(self.rows.len() * 2 + 3);

        lines.push(border_line(&TOP, &widths));
        lines.push(cell_line(&self.headers, &widths));
        lines.push(border_line(&BELOW_HEADER, &widths));
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                lines.push(border_line(&BETWEEN_ROWS, &widths));
            }
            lines.push(cell_line(row, &widths));
        }
        lines.push(border_line(&BOTTOM, &widths));

        lines.join("\n")
    }
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

fn border_line(border: &Border, widths: &[usize]) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| border.fill.to_string().repeat(width + 2))
        .collect();
    format!(
        "{}{}{}",
        border.left,
        segments.join(&border.join.to_string()),
        border.right
    )
}

fn cell_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, &width)| {
            let cell = cells.get(col).map(String::as_str).unwrap_or("");
            let fill = width.saturating_sub(text_width(cell));
            format!(" {}{} ", cell, " ".repeat(fill))
        })
        .collect();
    format!("│{}│", padded.join("│"))
}
