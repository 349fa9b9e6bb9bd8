//! Schema-driven tabular rendering.
//!
//! A [`TableSpec`] holds an ordered list of [`Column`]s, each pairing a
//! header with an accessor closure that extracts one cell's text from a
//! row. Rendering projects `(columns, rows)` into a [`Grid`]: a
//! presentation-ready structure that downstream renderers (text, JSON)
//! consume without further computation.
//!
//! Rendering is a pure projection: column and row order are preserved
//! exactly, and identical input produces a structurally identical grid.
//! Accessors are trusted caller code; if one panics, the panic
//! propagates rather than being masked as an empty cell.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

/// Row spacing. Affects presentation only, never ordering or content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Density {
    #[default]
    Normal,
    Dense,
}

/// Notice emitted in place of a body when the row set is empty
pub const EMPTY_NOTICE: &str = "No data";

/// One column of a table: header, accessor, and presentation hints.
///
/// The accessor must be a pure function of the row; it is invoked once
/// per row per render.
pub struct Column<R> {
    header: String,
    accessor: Box<dyn Fn(&R) -> String>,
    align: Align,
    style_hint: Option<String>,
}

impl<R> Column<R> {
    /// Create a column with the default (left) alignment
    pub fn new(header: impl Into<String>, accessor: impl Fn(&R) -> String + 'static) -> Self {
        Self {
            header: header.into(),
            accessor: Box::new(accessor),
            align: Align::Left,
            style_hint: None,
        }
    }

    /// Builder: set alignment
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Builder: attach an opaque style hint, passed through to cells
    pub fn style_hint(mut self, hint: impl Into<String>) -> Self {
        self.style_hint = Some(hint.into());
        self
    }

    /// Column header label
    pub fn header(&self) -> &str {
        &self.header
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("align", &self.align)
            .field("style_hint", &self.style_hint)
            .finish_non_exhaustive()
    }
}

/// A rendered cell: text plus the presentation hints of its column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub align: Align,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_hint: Option<String>,
}

/// A rendered table: headers, body rows, and the empty-set notice.
///
/// This is the final data structure before presentation. Renderers
/// iterate over headers and rows and apply spacing/styling only - no
/// computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Header cells, one per column, in column order
    pub headers: Vec<Cell>,
    /// Body rows in input order; each row has one cell per column
    pub rows: Vec<Vec<Cell>>,
    /// Set exactly when the row set was empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_notice: Option<String>,
    /// Spacing requested by the table spec
    pub density: Density,
}

/// An ordered table schema plus presentation options.
pub struct TableSpec<R> {
    columns: Vec<Column<R>>,
    density: Density,
    on_activate: Option<Box<dyn Fn(&R)>>,
}

impl<R> Default for TableSpec<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> TableSpec<R> {
    /// Create an empty spec with normal density
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            density: Density::Normal,
            on_activate: None,
        }
    }

    /// Builder: append a column (column order is render order)
    pub fn column(mut self, column: Column<R>) -> Self {
        self.columns.push(column);
        self
    }

    /// Builder: set row spacing
    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Builder: set the row-activation callback
    pub fn on_activate(mut self, callback: impl Fn(&R) + 'static) -> Self {
        self.on_activate = Some(Box::new(callback));
        self
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Render rows into a [`Grid`].
    ///
    /// Headers come first, in column order; each input row becomes one
    /// body row in the same column order. An empty row slice yields zero
    /// body rows and `empty_notice: Some("No data")` so consumers always
    /// have something to show.
    pub fn render(&self, rows: &[R]) -> Grid {
        let headers = self
            .columns
            .iter()
            .map(|c| Cell {
                text: c.header.clone(),
                align: c.align,
                style_hint: c.style_hint.clone(),
            })
            .collect();

        let body: Vec<Vec<Cell>> = rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| Cell {
                        text: (c.accessor)(row),
                        align: c.align,
                        style_hint: c.style_hint.clone(),
                    })
                    .collect()
            })
            .collect();

        let empty_notice = if body.is_empty() {
            Some(EMPTY_NOTICE.to_string())
        } else {
            None
        };

        Grid {
            headers,
            rows: body,
            empty_notice,
            density: self.density,
        }
    }

    /// Invoke the activation callback with the full row, exactly once.
    ///
    /// No-op when no callback was configured. The renderer does no
    /// debouncing or coalescing; each call here is one activation.
    pub fn activate(&self, row: &R) {
        if let Some(callback) = &self.on_activate {
            callback(row);
        }
    }
}

impl<R> fmt::Debug for TableSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSpec")
            .field("columns", &self.columns)
            .field("density", &self.density)
            .field("has_on_activate", &self.on_activate.is_some())
            .finish()
    }
}
