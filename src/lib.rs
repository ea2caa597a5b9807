//! Grid Stencil - CSV symbol maps turned into template placements
//!
//! This library parses a CSV symbol map, binds each symbol to a template
//! through a legend, and produces ordered placements a host can stamp
//! into a scene.
//!
//! # Example
//!
//! ```rust
//! use grid_stencil::{generate, Legend, Template};
//!
//! let mut legend = Legend::new();
//! legend.insert("W", Some(Template::new("Wall", ()))).unwrap();
//! legend.insert("C", Some(Template::new("Crate", ()))).unwrap();
//!
//! let placements = generate("W,W\n.,C", &legend).unwrap();
//! assert_eq!(placements.len(), 3);
//! assert_eq!(placements[0].instance_name, "Wall0");
//! ```

pub mod error;
pub mod host;
pub mod legend;
pub mod parser;
pub mod placement;

pub use error::ParseError;
pub use host::{realize, Instantiator, ListingHost};
pub use legend::{
    resize_entries, Legend, LegendConfig, LegendEntry, LegendError, LegendFile, LegendFileError,
    Template,
};
pub use parser::{parse, SymbolGrid};
pub use placement::{generate_placements, GridPos, Placement, PlacementError};

use thiserror::Error;

/// Errors that can occur during the generation pipeline
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No CSV input was supplied
    #[error("no csv input supplied")]
    InputMissing,

    /// Error while building the legend
    #[error("legend error: {0}")]
    Legend(#[from] LegendError),

    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Error during placement generation
    #[error("placement error: {0}")]
    Placement(#[from] PlacementError),
}

impl From<Vec<ParseError>> for GenerateError {
    fn from(errors: Vec<ParseError>) -> Self {
        GenerateError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Generate placements for a CSV symbol map against a prebuilt legend
///
/// This is the main entry point for the library. It parses the map and
/// scans it row by row against the legend.
///
/// # Example
///
/// ```rust
/// use grid_stencil::{generate, GridPos, Legend, Template};
///
/// let mut legend = Legend::new();
/// legend.insert("T", Some(Template::new("Tree", ()))).unwrap();
///
/// let placements = generate("T,.\n.,T", &legend).unwrap();
/// assert_eq!(placements[1].position, GridPos::new(1, 1));
/// ```
pub fn generate<T: Clone>(
    csv: &str,
    legend: &Legend<T>,
) -> Result<Vec<Placement<T>>, GenerateError> {
    if csv.is_empty() {
        return Err(GenerateError::InputMissing);
    }

    let grid = parse(csv)?;
    let placements = generate_placements(&grid, legend)?;

    Ok(placements)
}

/// Generate placements from a legend config, building the legend first
///
/// # Example
///
/// ```rust
/// use grid_stencil::{generate_from_config, LegendConfig, LegendEntry, Template};
///
/// let config = LegendConfig::new(
///     2,
///     vec![
///         LegendEntry::new("W", Template::new("Wall", ())),
///         LegendEntry::new("F", Template::new("Floor", ())),
///     ],
/// );
///
/// let placements = generate_from_config("W,F", &config).unwrap();
/// assert_eq!(placements[1].instance_name, "Floor1");
/// ```
pub fn generate_from_config<T: Clone>(
    csv: &str,
    config: &LegendConfig<T>,
) -> Result<Vec<Placement<T>>, GenerateError> {
    if csv.is_empty() {
        return Err(GenerateError::InputMissing);
    }

    let legend = config.build_legend()?;
    generate(csv, &legend)
}
