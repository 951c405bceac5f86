//! Table rendering utilities for CLI outputs.

use super::formatting::visible_len;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render header, a rule made of `separator`, then the rows.
    /// Cells may carry ANSI colours; padding is computed on the visible text.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        self.push_line(&mut out, &header);

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        let sep = separator.chars().next().unwrap_or('-');
        out.push_str(&sep.to_string().repeat(total.saturating_sub(1)));
        out.push('\n');

        for row in &self.rows {
            self.push_line(&mut out, row);
        }

        out
    }

    fn push_line(&self, out: &mut String, cells: &[String]) {
        let mut line = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            line.push_str(cell);
            line.push_str(&" ".repeat(col.width.saturating_sub(visible_len(cell)) + 1));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_on_visible_width() {
        let mut t = Table::new(vec![Column::new("ID", 3), Column::new("STATE", 8)]);
        t.add_row(vec!["1".into(), "\x1b[32mrunning\x1b[0m".into()]);
        let out = t.render("=");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID  STATE");
        assert_eq!(lines[1], "============");
        assert!(lines[2].starts_with("1   \x1b[32mrunning"));
    }
}
