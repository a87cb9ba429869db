use super::models::{Commitment, Task};
use std::fmt;

pub const COMMITMENT_HEADERS: [&str; 3] = ["Subject", "Start", "End"];
pub const TASK_HEADERS: [&str; 4] = ["Subject", "Estimated (min)", "Due", "Priority"];

/// One rendered row of a form's table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow(pub Vec<String>);

impl TableRow {
    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" | "))
    }
}

impl From<&Commitment> for TableRow {
    fn from(c: &Commitment) -> Self {
        TableRow(vec![c.subject.clone(), c.start.clone(), c.end.clone()])
    }
}

impl From<&Task> for TableRow {
    fn from(t: &Task) -> Self {
        TableRow(vec![
            t.subject.clone(),
            t.estimated.to_string(),
            t.due.clone(),
            t.priority.to_string(),
        ])
    }
}

/// A header plus rows, padded into aligned columns when displayed
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<TableRow>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = TableRow>) -> Self {
        self.rows.extend(rows);
        self
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.cells().iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
        .collect();
    writeln!(f, "{}", padded.join(" | ").trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_line(f, &self.headers, &widths)?;

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;

        for row in &self.rows {
            write_line(f, row.cells(), &widths)?;
        }
        Ok(())
    }
}
