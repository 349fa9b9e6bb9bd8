//! Text rendering for grids produced by finfmtlib.
//!
//! Widths come from content, alignment and density come from the grid;
//! styling is applied after padding so column widths stay exact.

use console::Style;
use finfmtlib::{Align, Cell, Density, Grid, ThemeMode};

/// Gap between columns for each density
fn column_gap(density: Density) -> &'static str {
    match density {
        Density::Normal => "  ",
        Density::Dense => " ",
    }
}

/// Header style for the active theme
fn header_style(theme: ThemeMode) -> Style {
    match theme {
        ThemeMode::Light => Style::new().bold(),
        ThemeMode::Dark => Style::new().bold().cyan(),
    }
}

/// Pad cell text to `width` honoring its alignment
fn pad(cell: &Cell, width: usize) -> String {
    match cell.align {
        Align::Left => format!("{:<width$}", cell.text),
        Align::Right => format!("{:>width$}", cell.text),
        Align::Center => format!("{:^width$}", cell.text),
    }
}

/// Style a padded body cell according to its hint
fn style_cell(cell: &Cell, padded: String) -> String {
    match cell.style_hint.as_deref() {
        Some("muted") => Style::new().dim().apply_to(padded).to_string(),
        _ => padded,
    }
}

/// Per-column widths: the widest of header and body texts
fn column_widths(grid: &Grid) -> Vec<usize> {
    let mut widths: Vec<usize> = grid
        .headers
        .iter()
        .map(|h| h.text.chars().count())
        .collect();
    for row in &grid.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.text.chars().count());
            }
        }
    }
    widths
}

/// Render a grid as padded text lines.
pub fn render_grid(grid: &Grid, theme: ThemeMode) -> String {
    let widths = column_widths(grid);
    let gap = column_gap(grid.density);
    let style = header_style(theme);

    let mut lines = Vec::with_capacity(grid.rows.len() + 2);

    let header_line = grid
        .headers
        .iter()
        .enumerate()
        .map(|(i, cell)| style.apply_to(pad(cell, widths[i])).to_string())
        .collect::<Vec<_>>()
        .join(gap);
    lines.push(header_line);

    let total_width: usize =
        widths.iter().sum::<usize>() + gap.len() * widths.len().saturating_sub(1);
    lines.push("-".repeat(total_width));

    for row in &grid.rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| style_cell(cell, pad(cell, widths[i])))
            .collect::<Vec<_>>()
            .join(gap);
        lines.push(line);
    }

    if let Some(notice) = &grid.empty_notice {
        lines.push(Style::new().dim().apply_to(notice).to_string());
    }

    lines.join("\n")
}
