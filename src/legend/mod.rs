//! Legend construction: entry lists, keyed lookup, and TOML legend files

pub mod file;
pub mod table;

pub use file::{FileEntry, LegendFile, LegendFileError};
pub use table::{resize_entries, Legend, LegendConfig, LegendEntry, LegendError, Template};
