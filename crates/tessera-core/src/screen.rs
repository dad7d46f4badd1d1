//! Fixed-width, column-oriented screen rendering.
//!
//! Renders field-map records into terminal-style screen lines: each
//! [`FieldConfig`] places one field's value at a start column on a line
//! number, values are clamped to the line width, and all-blank lines are
//! dropped from the output.

use crate::FieldMap;
use std::collections::BTreeMap;

/// Default screen line width in characters.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Placement of a single field on the rendered screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    /// Name of the field to render.
    pub field: String,
    /// Zero-based start column.
    pub start: usize,
    /// One-based line number.
    pub line: usize,
}

impl FieldConfig {
    /// Creates a config placing `field` at `start` on line 1.
    #[must_use]
    pub fn new(field: impl Into<String>, start: usize) -> Self {
        Self {
            field: field.into(),
            start,
            line: 1,
        }
    }

    /// Moves the placement to the given one-based line number.
    #[must_use]
    pub fn on_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

/// Renders the first line of a record at the default width.
#[must_use]
pub fn print_line(record: &FieldMap, configs: &[FieldConfig]) -> String {
    print_line_width(record, configs, DEFAULT_LINE_WIDTH)
}

/// Renders the first line of a record at the given width.
#[must_use]
pub fn print_line_width(record: &FieldMap, configs: &[FieldConfig], width: usize) -> String {
    print_lines(record, configs, width)
        .into_iter()
        .next()
        .unwrap_or_else(|| blank(width))
}

/// Renders all lines of a record, grouping configs by line number.
///
/// Lines with no non-blank content are dropped; if every line is blank,
/// a single blank line is returned so callers always get output.
#[must_use]
pub fn print_lines(record: &FieldMap, configs: &[FieldConfig], width: usize) -> Vec<String> {
    if configs.is_empty() {
        return vec![blank(width)];
    }

    let mut by_line: BTreeMap<usize, Vec<&FieldConfig>> = BTreeMap::new();
    for config in configs {
        by_line.entry(config.line).or_default().push(config);
    }

    let max_line = by_line.keys().max().copied().unwrap_or(1);

    let mut lines = Vec::new();
    for line_num in 1..=max_line {
        let mut buffer: Vec<char> = vec![' '; width];

        if let Some(line_configs) = by_line.get(&line_num) {
            for config in line_configs {
                if config.start >= width {
                    continue;
                }
                let Some(value) = record.get(&config.field) else {
                    continue;
                };
                if value.is_empty() {
                    continue;
                }
                for (i, ch) in value.chars().take(width - config.start).enumerate() {
                    buffer[config.start + i] = ch;
                }
            }
        }

        let line: String = buffer.into_iter().collect();
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }

    if lines.is_empty() {
        return vec![blank(width)];
    }
    lines
}

/// Renders a batch of records, concatenating their lines.
#[must_use]
pub fn print_all(records: &[FieldMap], configs: &[FieldConfig], width: usize) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| print_lines(record, configs, width))
        .collect()
}

fn blank(width: usize) -> String {
    " ".repeat(width)
}
