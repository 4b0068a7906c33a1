//! CLI entry point for the puzzle search engine.
//!
//! Usage:
//!   puzzle-search patrol <input.txt>
//!   puzzle-search calibrate <input.txt> [--concat]
//!   puzzle-search compose <input.txt>
//!   puzzle-search network <input.txt>
//!   puzzle-search stones <input.txt> --blinks <N>
//!
//! Each command reads one input file, runs the corresponding engine, and
//! prints a JSON result document with the elapsed time. Any I/O or parse
//! failure aborts with a non-zero exit and no partial output.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand};
use serde::Serialize;

use puzzle_search::derive::{self, Op};
use puzzle_search::growth::{self, GrowthRules};
use puzzle_search::input;
use puzzle_search::state::MemoTable;

#[derive(Parser)]
#[command(name = "puzzle-search")]
#[command(about = "Memoized state-space search engine for daily puzzle solving")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a guard patrol and count loop-forcing obstacle placements
    Patrol {
        /// Path to the patrol map file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Sum the calibration targets reachable by operator assignment
    Calibrate {
        /// Path to the equations file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Allow the digit-concatenation operator alongside + and *
        #[arg(long)]
        concat: bool,
    },

    /// Count pattern compositions for each design
    Compose {
        /// Path to the patterns/designs file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Find the largest fully-connected group in a connection list
    Network {
        /// Path to the edge list file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Count the stone population after repeated blinks
    Stones {
        /// Path to the initial values file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of blink iterations to apply
        #[arg(long, default_value = "25")]
        blinks: u32,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PatrolOutput {
    visited_cells: usize,
    loop_placements: usize,
    time_elapsed_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalibrateOutput {
    equations: usize,
    satisfiable: usize,
    calibration_sum: u64,
    total_derivations: u64,
    time_elapsed_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComposeOutput {
    designs: usize,
    composable: usize,
    total_arrangements: u64,
    time_elapsed_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NetworkOutput {
    nodes: usize,
    clique_size: usize,
    members: Vec<String>,
    time_elapsed_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StonesOutput {
    initial: usize,
    blinks: u32,
    population: u64,
    distinct_subproblems: usize,
    time_elapsed_ms: u64,
}

fn read_input(path: &PathBuf) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn parse_or_exit<T>(result: Result<T, input::ParseError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error parsing input: {}", e);
            process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(output: &T) {
    match serde_json::to_string_pretty(output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error formatting output: {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Patrol { file } => {
            let map = parse_or_exit(input::parse_patrol_map(&read_input(&file)));
            let start = Instant::now();
            let visited = map.visited_cells().len();
            let loops = map.loop_placements();
            print_json(&PatrolOutput {
                visited_cells: visited,
                loop_placements: loops,
                time_elapsed_ms: start.elapsed().as_millis() as u64,
            });
        }

        Commands::Calibrate { file, concat } => {
            let equations = parse_or_exit(input::parse_equations(&read_input(&file)));
            let ops: &[Op] = if concat {
                &[Op::Add, Op::Mul, Op::Concat]
            } else {
                &[Op::Add, Op::Mul]
            };

            let start = Instant::now();
            let mut satisfiable = 0usize;
            let mut sum = 0u64;
            let mut total_derivations = 0u64;
            let mut memo = MemoTable::new();
            for eq in &equations {
                // Equation keys are not transferable across equations.
                memo.clear();
                let count = derive::count_derivations(eq, ops, &mut memo);
                if count > 0 {
                    satisfiable += 1;
                    sum += eq.target;
                }
                total_derivations += count;
            }
            print_json(&CalibrateOutput {
                equations: equations.len(),
                satisfiable,
                calibration_sum: sum,
                total_derivations,
                time_elapsed_ms: start.elapsed().as_millis() as u64,
            });
        }

        Commands::Compose { file } => {
            let (patterns, designs) =
                parse_or_exit(input::parse_compositions(&read_input(&file)));

            let start = Instant::now();
            let mut memo = MemoTable::new();
            let mut composable = 0usize;
            let mut total = 0u64;
            for design in &designs {
                // Suffix keys are shared; the memo stays warm across designs.
                let count = derive::count_compositions(design, &patterns, &mut memo);
                if count > 0 {
                    composable += 1;
                }
                total += count;
            }
            print_json(&ComposeOutput {
                designs: designs.len(),
                composable,
                total_arrangements: total,
                time_elapsed_ms: start.elapsed().as_millis() as u64,
            });
        }

        Commands::Network { file } => {
            let graph = parse_or_exit(input::parse_edges(&read_input(&file)));
            let start = Instant::now();
            let members = graph.largest_clique();
            print_json(&NetworkOutput {
                nodes: graph.node_count(),
                clique_size: members.len(),
                members,
                time_elapsed_ms: start.elapsed().as_millis() as u64,
            });
        }

        Commands::Stones { file, blinks } => {
            let values = parse_or_exit(input::parse_values(&read_input(&file)));
            let start = Instant::now();
            let rules = GrowthRules::default();
            let mut memo = MemoTable::new();
            let population = growth::population_after(&values, blinks, &rules, &mut memo);
            print_json(&StonesOutput {
                initial: values.len(),
                blinks,
                population,
                distinct_subproblems: memo.len(),
                time_elapsed_ms: start.elapsed().as_millis() as u64,
            });
        }
    }
}
