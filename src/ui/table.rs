//! Table rendering for the dashboard views.

/// Column alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A simple box-drawing table.
///
/// Size and count columns are right-aligned the way the original status
/// tables present them; everything else defaults to left.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers, all left-aligned.
    pub fn new(headers: Vec<&str>) -> Self {
        let aligns = vec![Align::Left; headers.len()];
        Self::with_aligns(headers, aligns)
    }

    /// Create a new table with per-column alignment.
    pub fn with_aligns(headers: Vec<&str>, aligns: Vec<Align>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| h.chars().count()).collect();
        Self {
            headers,
            aligns,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row: Vec<String> = row.iter().map(|s| s.to_string()).collect();
        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(cell.chars().count());
            }
        }
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_border('┌', '┬', '┐'));
        output.push('\n');
        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_border('├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str(&self.render_border('└', '┴', '┘'));
        output
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let mut s = String::new();
        s.push(left);
        for (i, width) in self.column_widths.iter().enumerate() {
            s.push_str(&"─".repeat(width + 2));
            if i < self.column_widths.len() - 1 {
                s.push(mid);
            }
        }
        s.push(right);
        s
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");
        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            let pad = width.saturating_sub(cell.chars().count());
            let align = self.aligns.get(i).copied().unwrap_or(Align::Left);
            match align {
                Align::Left => s.push_str(&format!(" {}{} │", cell, " ".repeat(pad))),
                Align::Right => s.push_str(&format!(" {}{} │", " ".repeat(pad), cell)),
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty() {
        let table = Table::new(vec!["Tool", "Installed"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);

        let output = table.render();
        assert!(output.contains("Tool"));
        assert!(output.contains("Installed"));
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(vec!["Tool", "Workspace"]);
        table.add_row(vec!["claude", "✓"]);
        table.add_row(vec!["ollama", "✗"]);

        assert_eq!(table.row_count(), 2);
        let output = table.render();
        assert!(output.contains("claude"));
        assert!(output.contains("ollama"));
    }

    #[test]
    fn table_adjusts_column_width() {
        let mut table = Table::new(vec!["A"]);
        table.add_row(vec!["much_longer_value"]);
        assert!(table.render().contains("much_longer_value"));
    }

    #[test]
    fn right_alignment_pads_left() {
        let mut table = Table::with_aligns(vec!["Model", "Size"], vec![Align::Left, Align::Right]);
        table.add_row(vec!["sdxl", "6.5 GB"]);
        table.add_row(vec!["sd15", "4 GB"]);

        let output = table.render();
        // The shorter size is padded on the left so units line up.
        assert!(output.contains("   4 GB"));
    }

    #[test]
    fn table_uses_box_drawing() {
        let output = Table::new(vec!["Test"]).render();
        for c in ['┌', '┐', '└', '┘', '│', '─'] {
            assert!(output.contains(c));
        }
    }

    #[test]
    fn table_handles_missing_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(vec!["only", "two"]);
        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }

    #[test]
    fn table_line_count() {
        let mut table = Table::new(vec!["Tool", "Status"]);
        table.add_row(vec!["claude", "✓"]);
        table.add_row(vec!["qwen", "✗"]);

        // Top border, header, separator, 2 rows, bottom border.
        assert_eq!(table.render().lines().count(), 6);
    }
}
