//! Placement generation from a symbol grid and a legend
//!
//! The grid is scanned row by row, left to right. Every cell whose text
//! has a legend entry produces one placement at integer grid coordinates,
//! named after its template plus a counter shared across the whole scan.

pub mod lint;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::legend::{Legend, Template};
use crate::parser::grid::Span;
use crate::parser::SymbolGrid;

/// Integer position in the grid plane.
///
/// `x` is the cell index within its row, `y` the row index, and `z` is
/// always zero so hosts can stamp straight into a 3D scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One template occurrence the host should instantiate
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<T> {
    /// The template to stamp
    pub template: Template<T>,
    /// Where to stamp it
    pub position: GridPos,
    /// Template name plus the shared counter, e.g. `Wall0`
    pub instance_name: String,
}

/// Errors that can occur during placement generation
#[derive(Debug, Error)]
pub enum PlacementError {
    /// A matched key has an entry but no template assigned to it
    #[error("no template assigned for key {key:?} matched at {position}")]
    MissingTemplate {
        key: String,
        position: GridPos,
        span: Span,
    },
}

impl PlacementError {
    /// Byte range in the CSV source the error points at
    pub fn span(&self) -> Span {
        match self {
            PlacementError::MissingTemplate { span, .. } => span.clone(),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            PlacementError::MissingTemplate { key, span, .. } => {
                Report::build(ReportKind::Error, filename, span.start)
                    .with_message(self.to_string())
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("key {:?} has no template", key))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
            }
        }
        String::from_utf8(buf).unwrap()
    }
}

/// Scan the grid against the legend and produce placements in scan order.
///
/// Cells without a legend entry are skipped but still occupy their cell
/// index, so later matches in the row keep their x coordinate. The
/// instance counter only advances when a placement is produced. A cell
/// whose entry has no template stops the scan with
/// [`PlacementError::MissingTemplate`].
pub fn generate_placements<T: Clone>(
    grid: &SymbolGrid,
    legend: &Legend<T>,
) -> Result<Vec<Placement<T>>, PlacementError> {
    let mut placements = Vec::new();
    let mut serial: usize = 0;

    for (x, y, cell) in grid.cells() {
        let position = GridPos::new(x as i32, y as i32);
        match legend.binding(&cell.text) {
            None => {}
            Some(None) => {
                return Err(PlacementError::MissingTemplate {
                    key: cell.text.clone(),
                    position,
                    span: cell.span.clone(),
                });
            }
            Some(Some(template)) => {
                placements.push(Placement {
                    template: template.clone(),
                    position,
                    instance_name: format!("{}{}", template.name, serial),
                });
                serial += 1;
            }
        }
    }

    Ok(placements)
}
