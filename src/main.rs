//! Grid Stencil CLI
//!
//! Usage:
//!   grid-stencil [OPTIONS] [FILE]
//!
//! Options:
//!   -l, --legend <FILE>  Legend file mapping keys to templates (TOML format)
//!   -d, --debug          Dump the parsed grid before generating
//!   --lint               Warn about unused keys and unknown symbols
//!   -e, --example        Show an annotated example map and legend
//!   -h, --help           Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use grid_stencil::placement::lint;
use grid_stencil::{
    generate_placements, parse, realize, GenerateError, Legend, LegendFile, ListingHost,
    SymbolGrid,
};

#[derive(Parser)]
#[command(name = "grid-stencil")]
#[command(about = "CSV symbol maps turned into template placements")]
struct Cli {
    /// Input CSV file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Legend file mapping keys to templates (TOML format)
    #[arg(short, long)]
    legend: Option<PathBuf>,

    /// Debug mode: dump the parsed grid before generating
    #[arg(short, long)]
    debug: bool,

    /// Warn about unused keys and unknown symbols
    #[arg(long)]
    lint: bool,

    /// Show an annotated example map and legend
    #[arg(short, long)]
    example: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if cli.example {
        print_example();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load legend
    let legend: Legend<()> = match &cli.legend {
        Some(path) => {
            let file = match LegendFile::from_file(path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("Error loading legend '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            };
            match file.to_config().build_legend() {
                Ok(legend) => legend,
                Err(e) => {
                    eprintln!("Error in legend '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            log::warn!("no legend file given, every symbol will be unmatched");
            Legend::new()
        }
    };

    // Read input
    let (source, source_name) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    log::debug!("csv input:\n{}", source);

    if source.is_empty() {
        eprintln!("Error: {}", GenerateError::InputMissing);
        std::process::exit(1);
    }

    // Parse the map
    let grid = match parse(&source) {
        Ok(grid) => grid,
        Err(errors) => {
            for error in &errors {
                eprint!("{}", error.format(&source, &source_name));
            }
            std::process::exit(1);
        }
    };

    log::debug!("parsed grid: {} rows, {} columns", grid.height(), grid.width());

    if cli.debug {
        dump_grid(&grid);
    }

    if cli.lint {
        for warning in lint::check(&grid, &legend) {
            eprintln!("warning[{}]: {}", warning.category, warning.message);
        }
    }

    // Generate and print the listing
    match generate_placements(&grid, &legend) {
        Ok(placements) => {
            let mut host = ListingHost::new();
            realize(&placements, &mut host);
            print!("{}", host.finish());
        }
        Err(e) => {
            eprint!("{}", e.format(&source, &source_name));
            std::process::exit(1);
        }
    }
}

fn dump_grid(grid: &SymbolGrid) {
    eprintln!("=== Symbol Grid ===");
    for (y, row) in grid.rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|cell| format!("{:?}", cell.text)).collect();
        eprintln!("{:>3} | {}", y, cells.join(" "));
    }
    eprintln!("===================");
}

fn print_intro() {
    println!(
        r#"Grid Stencil - CSV symbol maps turned into template placements

USAGE:
    grid-stencil [OPTIONS] [FILE]
    cat map.csv | grid-stencil --legend legend.toml

OPTIONS:
    -l, --legend     Legend file mapping keys to templates (TOML file)
    -d, --debug      Dump the parsed grid before generating
    --lint           Warn about unused keys and unknown symbols
    -e, --example    Show an annotated example map and legend
    -h, --help       Print help

QUICK START:
    printf 'W,W\n.,C' | grid-stencil --legend legend.toml

Each matched cell becomes one placement line: instance name, then
grid position. Run --example for a full map and legend pair."#
    );
}

fn print_example() {
    println!(
        r#"GRID STENCIL EXAMPLE
====================

MAP (map.csv)
-------------
W,W,W
W,F,W
W,W,W

Each line is one row; each comma-separated cell is one symbol.
Cells whose symbol has no legend entry are skipped but still
occupy their column.

LEGEND (legend.toml)
--------------------
[metadata]
name = "Walled room"

[[entry]]
key = "W"
template = "Wall"

[[entry]]
key = "F"
template = "Floor"

Entries keep their file order. An entry without a template fails
generation as soon as its key matches a cell. An optional top-level
count = N resizes the list: extra entries are dropped from the end,
missing ones are appended blank.

OUTPUT
------
grid-stencil map.csv --legend legend.toml

Wall0 (0, 0, 0)
Wall1 (1, 0, 0)
Wall2 (2, 0, 0)
Wall3 (0, 1, 0)
Floor4 (1, 1, 0)
Wall5 (2, 1, 0)
Wall6 (0, 2, 0)
Wall7 (1, 2, 0)
Wall8 (2, 2, 0)

The number suffix is a single counter shared by every template in
the run. Positions are (x, y, z): cell index, row index, zero."#
    );
}
