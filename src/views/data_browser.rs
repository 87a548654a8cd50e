//! Data browser view: a sortable sample table.

use std::cmp::Ordering;
use std::fmt;

use unicode_width::UnicodeWidthChar;

use super::{plain_char, KeyOutcome, ViewContext};
use crate::app::ViewId;
use crate::input::KeyCombo;
use crate::notifications::Notice;

/// Column headings, in display order.
pub const HEADINGS: [&str; 5] = ["ID", "Name", "Status", "Value", "Priority"];

/// Display width of each column.
pub const COLUMN_WIDTHS: [usize; 5] = [8, 20, 12, 10, 10];

const SEPARATOR: &str = " | ";

// ============================================================================
// Rows
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    pub id: &'static str,
    pub name: &'static str,
    pub status: &'static str,
    pub value: &'static str,
    pub priority: &'static str,
}

impl DataRow {
    const fn new(
        id: &'static str,
        name: &'static str,
        status: &'static str,
        value: &'static str,
        priority: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            status,
            value,
            priority,
        }
    }

    /// Numeric value with `$` and thousands separators stripped.
    pub fn amount(&self) -> u64 {
        parse_amount(self.value)
    }

    fn cells(&self) -> [&str; 5] {
        [self.id, self.name, self.status, self.value, self.priority]
    }
}

pub fn sample_rows() -> Vec<DataRow> {
    vec![
        DataRow::new("001", "Project Alpha", "Active", "$1,234", "High"),
        DataRow::new("002", "Project Beta", "Pending", "$5,678", "Medium"),
        DataRow::new("003", "Project Gamma", "Completed", "$9,012", "Low"),
        DataRow::new("004", "Project Delta", "Active", "$3,456", "High"),
        DataRow::new("005", "Project Epsilon", "Cancelled", "$0", "Low"),
        DataRow::new("006", "Project Zeta", "Active", "$7,890", "Medium"),
        DataRow::new("007", "Project Eta", "Pending", "$2,345", "High"),
        DataRow::new("008", "Project Theta", "Completed", "$6,789", "Low"),
    ]
}

fn parse_amount(value: &str) -> u64 {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Pad or cut `text` to exactly `width` display columns.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

fn format_row(cells: [&str; 5]) -> String {
    cells
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(cell, width)| fit(cell, width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}

fn separator_line() -> String {
    COLUMN_WIDTHS
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-|-")
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Status,
    Name,
    Value,
}

impl SortColumn {
    pub fn name(self) -> &'static str {
        match self {
            SortColumn::Status => "status",
            SortColumn::Name => "name",
            SortColumn::Value => "value",
        }
    }

    fn compare(self, a: &DataRow, b: &DataRow) -> Ordering {
        match self {
            SortColumn::Status => a.status.cmp(b.status),
            SortColumn::Name => a.name.cmp(b.name),
            SortColumn::Value => a.amount().cmp(&b.amount()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

// ============================================================================
// View
// ============================================================================

#[derive(Debug, Clone)]
pub struct DataBrowserView {
    rows: Vec<DataRow>,
    sort: Option<SortOrder>,
}

impl Default for DataBrowserView {
    fn default() -> Self {
        Self::new()
    }
}

impl DataBrowserView {
    pub fn new() -> Self {
        Self {
            rows: sample_rows(),
            sort: None,
        }
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Sort by `column`. Repeating the current column flips the direction;
    /// a new column starts ascending.
    pub fn sort_by(&mut self, column: SortColumn) -> SortOrder {
        let direction = match self.sort {
            Some(current) if current.column == column => current.direction.flip(),
            _ => SortDirection::Asc,
        };
        let order = SortOrder { column, direction };

        self.rows.sort_by(|a, b| match direction {
            SortDirection::Asc => column.compare(a, b),
            SortDirection::Desc => column.compare(b, a),
        });
        self.sort = Some(order);
        order
    }

    pub fn reset(&mut self) {
        self.rows = sample_rows();
        self.sort = None;
    }

    pub fn header_row(&self) -> String {
        format_row(HEADINGS)
    }

    pub fn content(&self, _ctx: &ViewContext) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} {}\n\n",
            ViewId::DataBrowser.icon(),
            ViewId::DataBrowser.title()
        ));
        out.push_str("Sample Data Table:\n\n");
        out.push_str(&self.header_row());
        out.push('\n');
        out.push_str(&separator_line());
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format_row(row.cells()));
            out.push('\n');
        }

        let count = |status: &str| self.rows.iter().filter(|r| r.status == status).count();
        let total: u64 = self.rows.iter().map(DataRow::amount).sum();
        out.push_str("\nStatistics:\n");
        out.push_str(&format!("• Total Projects: {}\n", self.rows.len()));
        for status in ["Active", "Pending", "Completed", "Cancelled"] {
            out.push_str(&format!("• {}: {}\n", status, count(status)));
        }
        out.push_str(&format!("• Total Value: {}\n", format_amount(total)));

        if let Some(order) = self.sort {
            out.push_str(&format!(
                "\nSorted by {} ({})\n",
                order.column.name(),
                order.direction
            ));
        }

        out.push_str("\nInstructions:\n");
        out.push_str("• Press s to sort by status\n");
        out.push_str("• Press n to sort by name\n");
        out.push_str("• Press v to sort by value\n");
        out.push_str("• Press r to refresh data\n");
        out
    }

    pub fn handle_key(&mut self, key: &KeyCombo) -> KeyOutcome {
        let column = match plain_char(key) {
            Some('s') => SortColumn::Status,
            Some('n') => SortColumn::Name,
            Some('v') => SortColumn::Value,
            Some('r') => {
                self.reset();
                return KeyOutcome::rerender(Notice::success("Data refreshed"));
            }
            _ => return KeyOutcome::Unhandled,
        };
        let order = self.sort_by(column);
        KeyOutcome::rerender(Notice::info(format!(
            "Sorted by {} ({})",
            order.column.name(),
            order.direction
        )))
    }
}
