use std::sync::LazyLock;

use regex::Regex;

static ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|.+\|$").unwrap());

/// A pipe table parsed from its raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub const SEPARATOR: char = '|';
    /// Header row plus separator row.
    pub const MIN_LINES: usize = 2;

    /// Whether a trimmed line is a `| a | b |` row.
    pub fn is_row(trimmed: &str) -> bool {
        ROW.is_match(trimmed)
    }

    /// Parses accumulated rows. Line 0 is the header, line 1 the separator
    /// (skipped), the rest are body rows.
    ///
    /// Returns `None` when fewer than [`Table::MIN_LINES`] lines were seen.
    pub fn parse(lines: &[String]) -> Option<Self> {
        if lines.len() < Self::MIN_LINES {
            return None;
        }
        Some(Self {
            headers: Self::cells(&lines[0]),
            rows: lines[2..].iter().map(|l| Self::cells(l)).collect(),
        })
    }

    /// Slide text announcing the table.
    pub fn summary(&self) -> String {
        format!("Table: {}", self.headers.join(", "))
    }

    fn cells(line: &str) -> Vec<String> {
        let line = line.trim();
        let line = line.strip_prefix(Self::SEPARATOR).unwrap_or(line);
        let line = line.strip_suffix(Self::SEPARATOR).unwrap_or(line);
        line.split(Self::SEPARATOR)
            .map(|cell| cell.trim().to_string())
            .collect()
    }
}
