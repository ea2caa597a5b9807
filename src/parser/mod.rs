//! Parser for CSV symbol maps

pub mod grid;
pub mod lexer;
mod scan;

pub use grid::{Cell, SymbolGrid};
pub use scan::parse;
