//! Text input parsing for the solver binary.
//!
//! Puzzle inputs are trusted and well-formed; anything that fails to parse
//! aborts the run with an error rather than producing a partial result.
//! The engine modules never see raw text — these functions hand them fully
//! materialized domain values.

use std::collections::HashSet;
use thiserror::Error;

use crate::clique::Graph;
use crate::derive::Equation;
use crate::grid::{GuardState, Heading, PatrolMap, Position};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input is empty")]
    EmptyInput,
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: expected `{delimiter}` delimiter")]
    MissingDelimiter { line: usize, delimiter: char },
    #[error("line {line}: unexpected character `{glyph}`")]
    UnexpectedGlyph { line: usize, glyph: char },
    #[error("map has no guard start marker")]
    MissingStart,
    #[error("map has more than one guard start marker")]
    DuplicateStart,
}

fn parse_number(text: &str, line: usize) -> Result<u64, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: text.to_owned(),
    })
}

/// Parse a character-grid patrol map: `#` obstacle, `.` open floor, and
/// exactly one of `^ > v <` marking the guard and its heading.
pub fn parse_patrol_map(text: &str) -> Result<PatrolMap, ParseError> {
    let mut obstacles = HashSet::new();
    let mut start = None;
    let mut width = 0i32;
    let mut height = 0i32;

    for (y, row) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        let row = row.trim();
        width = width.max(row.chars().count() as i32);
        height += 1;
        for (x, glyph) in row.chars().enumerate() {
            let position = Position::new(x as i32, y as i32);
            match glyph {
                '#' => {
                    obstacles.insert(position);
                }
                '.' => {}
                _ => match Heading::from_glyph(glyph) {
                    Some(heading) => {
                        if start.is_some() {
                            return Err(ParseError::DuplicateStart);
                        }
                        start = Some(GuardState { position, heading });
                    }
                    None => {
                        return Err(ParseError::UnexpectedGlyph { line: y + 1, glyph });
                    }
                },
            }
        }
    }

    if height == 0 {
        return Err(ParseError::EmptyInput);
    }
    let start = start.ok_or(ParseError::MissingStart)?;
    Ok(PatrolMap::new(width, height, obstacles, start))
}

/// Parse calibration equations, one `target: a b c` per line.
pub fn parse_equations(text: &str) -> Result<Vec<Equation>, ParseError> {
    let mut equations = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (target, operands) =
            line.split_once(':')
                .ok_or(ParseError::MissingDelimiter {
                    line: i + 1,
                    delimiter: ':',
                })?;
        let target = parse_number(target.trim(), i + 1)?;
        let operands = operands
            .split_whitespace()
            .map(|tok| parse_number(tok, i + 1))
            .collect::<Result<Vec<u64>, _>>()?;
        equations.push(Equation { target, operands });
    }
    if equations.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(equations)
}

/// Parse a connection list, one `aa-bb` edge per line.
pub fn parse_edges(text: &str) -> Result<Graph, ParseError> {
    let mut graph = Graph::new();
    let mut edges = 0;
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (a, b) = line.split_once('-').ok_or(ParseError::MissingDelimiter {
            line: i + 1,
            delimiter: '-',
        })?;
        graph.add_edge(a.trim(), b.trim());
        edges += 1;
    }
    if edges == 0 {
        return Err(ParseError::EmptyInput);
    }
    Ok(graph)
}

/// Parse whitespace-separated unsigned integers.
pub fn parse_values(text: &str) -> Result<Vec<u64>, ParseError> {
    let values = text
        .split_whitespace()
        .map(|tok| parse_number(tok, 1))
        .collect::<Result<Vec<u64>, _>>()?;
    if values.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(values)
}

/// Parse a pattern/design file: first line holds comma-separated patterns,
/// then a blank line, then one design per line.
pub fn parse_compositions(text: &str) -> Result<(Vec<String>, Vec<String>), ParseError> {
    let mut lines = text.lines();
    let patterns: Vec<String> = lines
        .next()
        .unwrap_or("")
        .split(',')
        .map(|p| p.trim().to_owned())
        .filter(|p| !p.is_empty())
        .collect();
    if patterns.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let designs: Vec<String> = lines
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect();
    if designs.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok((patterns, designs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::WalkOutcome;

    #[test]
    fn test_parse_patrol_map_known_example() {
        let text = "\
            ....#.....\n\
            .........#\n\
            ..........\n\
            ..#.......\n\
            .......#..\n\
            ..........\n\
            .#..^.....\n\
            ........#.\n\
            #.........\n\
            ......#...\n";
        let map = parse_patrol_map(text).unwrap();

        assert_eq!(map.patrol(None).outcome, WalkOutcome::Exited);
        assert_eq!(map.visited_cells().len(), 41);
        assert_eq!(map.loop_placements(), 6);
    }

    #[test]
    fn test_parse_patrol_map_rejects_bad_input() {
        assert!(matches!(
            parse_patrol_map(""),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            parse_patrol_map("....\n....\n"),
            Err(ParseError::MissingStart)
        ));
        assert!(matches!(
            parse_patrol_map("^..^\n"),
            Err(ParseError::DuplicateStart)
        ));
        assert!(matches!(
            parse_patrol_map(".x.\n.^.\n"),
            Err(ParseError::UnexpectedGlyph { line: 1, glyph: 'x' })
        ));
    }

    #[test]
    fn test_parse_equations() {
        let equations = parse_equations("190: 10 19\n3267: 81 40 27\n").unwrap();
        assert_eq!(equations.len(), 2);
        assert_eq!(equations[0].target, 190);
        assert_eq!(equations[1].operands, vec![81, 40, 27]);
    }

    #[test]
    fn test_parse_equations_errors() {
        assert!(matches!(
            parse_equations("190 10 19\n"),
            Err(ParseError::MissingDelimiter { line: 1, delimiter: ':' })
        ));
        assert!(matches!(
            parse_equations("190: 10 x\n"),
            Err(ParseError::InvalidNumber { line: 1, .. })
        ));
        assert!(matches!(parse_equations("\n\n"), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_parse_edges() {
        let graph = parse_edges("ab-cd\ncd-ef\n").unwrap();
        assert_eq!(graph.node_count(), 3);
        assert!(graph.connected("cd", "ab"));
        assert!(!graph.connected("ab", "ef"));
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("125 17\n").unwrap(), vec![125, 17]);
        assert!(matches!(parse_values("  "), Err(ParseError::EmptyInput)));
        assert!(matches!(
            parse_values("1 two 3"),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_parse_compositions() {
        let (patterns, designs) = parse_compositions("r, wr, b\n\nbrwrr\nbggr\n").unwrap();
        assert_eq!(patterns, vec!["r", "wr", "b"]);
        assert_eq!(designs, vec!["brwrr", "bggr"]);
    }
}
