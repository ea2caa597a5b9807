//! Lint checks for symbol maps against their legend.
//!
//! Runs on a parsed grid before or after generation to flag mismatches
//! that are not hard errors: legend keys no cell uses, and symbols in
//! the map that no legend entry covers.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::legend::Legend;
use crate::parser::SymbolGrid;

/// A lint warning about a map/legend mismatch
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug)]
pub enum LintCategory {
    UnusedKey,
    UnknownSymbol,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::UnusedKey => write!(f, "unused-key"),
            LintCategory::UnknownSymbol => write!(f, "unknown-symbol"),
        }
    }
}

/// Run all lint checks on a parsed grid and its legend.
pub fn check<T>(grid: &SymbolGrid, legend: &Legend<T>) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_unused_keys(grid, legend, &mut warnings);
    check_unknown_symbols(grid, legend, &mut warnings);
    warnings
}

// ── Unused keys ───────────────────────────────────────────────────

fn check_unused_keys<T>(grid: &SymbolGrid, legend: &Legend<T>, warnings: &mut Vec<LintWarning>) {
    let seen: HashSet<&str> = grid.cells().map(|(_, _, cell)| cell.text.as_str()).collect();

    for key in legend.keys() {
        if !seen.contains(key) {
            warnings.push(LintWarning {
                category: LintCategory::UnusedKey,
                message: format!("key {:?} never appears in the map", key),
            });
        }
    }
}

// ── Unknown symbols ───────────────────────────────────────────────

fn check_unknown_symbols<T>(
    grid: &SymbolGrid,
    legend: &Legend<T>,
    warnings: &mut Vec<LintWarning>,
) {
    // First-appearance order, with occurrence counts
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for (_, _, cell) in grid.cells() {
        let symbol = cell.text.as_str();
        // Empty cells are spacing, not symbols
        if symbol.is_empty() || legend.contains_key(symbol) {
            continue;
        }
        let count = counts.entry(symbol).or_insert(0);
        if *count == 0 {
            order.push(symbol);
        }
        *count += 1;
    }

    for symbol in order {
        let count = counts[symbol];
        let cells = if count == 1 { "cell" } else { "cells" };
        warnings.push(LintWarning {
            category: LintCategory::UnknownSymbol,
            message: format!("symbol {:?} has no legend entry ({} {})", symbol, count, cells),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legend::Template;
    use crate::parser::parse;

    fn legend(keys: &[&str]) -> Legend<u32> {
        let mut legend = Legend::new();
        for key in keys {
            legend
                .insert(*key, Some(Template::new(*key, 0)))
                .expect("Should insert");
        }
        legend
    }

    #[test]
    fn test_unused_key_reported() {
        let grid = parse("A,A").expect("Should parse");
        let warnings = check(&grid, &legend(&["A", "Q"]));
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0].category, LintCategory::UnusedKey));
        assert!(warnings[0].message.contains("\"Q\""));
    }

    #[test]
    fn test_unknown_symbol_reported_with_count() {
        let grid = parse("A,?\n?,?").expect("Should parse");
        let warnings = check(&grid, &legend(&["A"]));
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0].category, LintCategory::UnknownSymbol));
        assert_eq!(
            warnings[0].message,
            "symbol \"?\" has no legend entry (3 cells)"
        );
    }

    #[test]
    fn test_single_occurrence_is_singular() {
        let grid = parse("A,?").expect("Should parse");
        let warnings = check(&grid, &legend(&["A"]));
        assert_eq!(
            warnings[0].message,
            "symbol \"?\" has no legend entry (1 cell)"
        );
    }

    #[test]
    fn test_empty_cells_are_not_symbols() {
        let grid = parse("A,,A").expect("Should parse");
        let warnings = check(&grid, &legend(&["A"]));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_symbols_in_first_appearance_order() {
        let grid = parse("Z,Y\nY,X").expect("Should parse");
        let warnings = check(&grid, &legend(&[]));
        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].contains("\"Z\""));
        assert!(messages[1].contains("\"Y\""));
        assert!(messages[2].contains("\"X\""));
    }

    #[test]
    fn test_unused_keys_come_before_unknown_symbols() {
        let grid = parse("?").expect("Should parse");
        let warnings = check(&grid, &legend(&["A"]));
        assert_eq!(warnings.len(), 2);
        assert!(matches!(warnings[0].category, LintCategory::UnusedKey));
        assert!(matches!(warnings[1].category, LintCategory::UnknownSymbol));
    }

    #[test]
    fn test_clean_map_has_no_warnings() {
        let grid = parse("A,B\nB,A").expect("Should parse");
        let warnings = check(&grid, &legend(&["A", "B"]));
        assert!(warnings.is_empty());
    }
}
