//! Memoized state-space search engine for daily puzzle solving.
//!
//! This crate provides three small generic search drivers (deterministic
//! walk with cycle detection, memoized path counting, exhaustive
//! best-result search) and the puzzle domains built on them: grid patrols,
//! calibration equations, pattern composition, maximal cliques, and
//! multiset growth simulation.

pub mod clique;
pub mod derive;
pub mod engine;
pub mod grid;
pub mod growth;
pub mod input;
pub mod state;

// Re-export main types
pub use clique::Graph;
pub use derive::{calibration_sum, count_compositions, count_derivations, Equation, Op};
pub use engine::{count_paths, reaches_goal, search_best, walk, WalkOutcome, WalkReport};
pub use grid::{GuardState, Heading, PatrolMap, Position};
pub use growth::{materialize, population_after, GrowthRules};
pub use input::ParseError;
pub use state::{MemoTable, State};
