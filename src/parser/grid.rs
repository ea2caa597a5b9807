//! Grid types for parsed CSV symbol maps

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A single comma-delimited field within one CSV row.
///
/// Cell text is exactly the split substring: no trimming, no unquoting.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    /// Location of the cell in the source text, for diagnostics
    pub span: Span,
}

impl Cell {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// An empty cell located at `at`, e.g. between two adjacent commas
    pub fn empty_at(at: usize) -> Self {
        Self {
            text: String::new(),
            span: at..at,
        }
    }
}

/// The CSV text decomposed into an ordered sequence of rows of cells.
///
/// Row index is the vertical coordinate (y), cell index within a row the
/// horizontal coordinate (x). Rows are ragged: the source text rules and
/// no padding is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolGrid {
    pub rows: Vec<Vec<Cell>>,
}

impl SymbolGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the widest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether the grid has no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at column `x` of row `y`, if the row reaches that far
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// All cells in row-major scan order with their grid coordinates
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, cell)| (x, y, cell)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(text: &str) -> Cell {
        Cell::new(text, 0..0)
    }

    #[test]
    fn test_empty_grid() {
        let grid = SymbolGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.width(), 0);
        assert!(grid.cells().next().is_none());
    }

    #[test]
    fn test_width_of_ragged_rows() {
        let grid = SymbolGrid {
            rows: vec![vec![cell("a")], vec![cell("b"), cell("c"), cell("d")]],
        };
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
    }

    #[test]
    fn test_cell_lookup() {
        let grid = SymbolGrid {
            rows: vec![vec![cell("a"), cell("b")], vec![cell("c")]],
        };
        assert_eq!(grid.cell(1, 0).map(|c| c.text.as_str()), Some("b"));
        assert_eq!(grid.cell(0, 1).map(|c| c.text.as_str()), Some("c"));
        assert!(grid.cell(1, 1).is_none());
        assert!(grid.cell(0, 2).is_none());
    }

    #[test]
    fn test_cells_are_row_major() {
        let grid = SymbolGrid {
            rows: vec![vec![cell("a"), cell("b")], vec![cell("c"), cell("d")]],
        };
        let order: Vec<(usize, usize, &str)> = grid
            .cells()
            .map(|(x, y, c)| (x, y, c.text.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![(0, 0, "a"), (1, 0, "b"), (0, 1, "c"), (1, 1, "d")]
        );
    }

    #[test]
    fn test_empty_cell_has_empty_span() {
        let c = Cell::empty_at(7);
        assert_eq!(c.text, "");
        assert_eq!(c.span, 7..7);
    }
}
