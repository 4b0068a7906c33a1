//! Grid patrol domain for the cycle-detecting walker.
//!
//! A guard stands on a rectangular grid and follows a fixed rule: step
//! forward unless the cell ahead is an obstacle, in which case turn right
//! in place. The walk either leaves the grid or revisits a
//! (position, heading) state, which proves a loop.
//!
//! The visited set keys on the full (position, heading) pair. A cell may be
//! crossed many times on different headings without looping; keying on
//! position alone would report false loops.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::engine::{self, WalkOutcome, WalkReport};

/// Facing of the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub fn turn_right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit step, with north pointing toward row 0.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    /// Heading denoted by a guard glyph in map input.
    pub fn from_glyph(c: char) -> Option<Heading> {
        match c {
            '^' => Some(Heading::North),
            '>' => Some(Heading::East),
            'v' => Some(Heading::South),
            '<' => Some(Heading::West),
            _ => None,
        }
    }
}

/// Cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn ahead(self, heading: Heading) -> Position {
        let (dx, dy) = heading.delta();
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Full walker state: where the guard is and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuardState {
    pub position: Position,
    pub heading: Heading,
}

/// A parsed patrol map: grid bounds, fixed obstacles, and the guard start.
#[derive(Debug, Clone)]
pub struct PatrolMap {
    width: i32,
    height: i32,
    obstacles: HashSet<Position>,
    start: GuardState,
}

impl PatrolMap {
    pub fn new(width: i32, height: i32, obstacles: HashSet<Position>, start: GuardState) -> Self {
        Self {
            width,
            height,
            obstacles,
            start,
        }
    }

    pub fn start(&self) -> GuardState {
        self.start
    }

    pub fn in_bounds(&self, p: Position) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    fn blocked(&self, p: Position, extra: Option<Position>) -> bool {
        self.obstacles.contains(&p) || extra == Some(p)
    }

    /// Simulate the patrol, optionally with one extra obstacle overlaid.
    ///
    /// The map itself is never mutated; the hypothetical obstacle is a
    /// virtual override passed to the step rule, so trials are independent.
    pub fn patrol(&self, extra_obstacle: Option<Position>) -> WalkReport<GuardState> {
        engine::walk(self.start, |state: &GuardState| {
            let ahead = state.position.ahead(state.heading);
            if !self.in_bounds(ahead) {
                None
            } else if self.blocked(ahead, extra_obstacle) {
                // Turn in place; same cell on a new heading is a new state.
                Some(GuardState {
                    position: state.position,
                    heading: state.heading.turn_right(),
                })
            } else {
                Some(GuardState {
                    position: ahead,
                    heading: state.heading,
                })
            }
        })
    }

    /// Distinct cells crossed during the unobstructed patrol.
    pub fn visited_cells(&self) -> HashSet<Position> {
        self.patrol(None)
            .visited
            .into_iter()
            .map(|s| s.position)
            .collect()
    }

    /// Count the cells where a single new obstacle would trap the guard in
    /// a loop. Only cells on the base patrol path can change the walk, so
    /// only those are tried; the start cell itself is excluded.
    ///
    /// This is the brute-force form: one full simulation per candidate.
    pub fn loop_placements(&self) -> usize {
        let start = self.start.position;
        self.visited_cells()
            .into_iter()
            .filter(|&cell| cell != start)
            .filter(|&cell| self.patrol(Some(cell)).outcome == WalkOutcome::Looped)
            .count()
    }
}
