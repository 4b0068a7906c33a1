//! Bounded growth simulation over a multiset of engraved values.
//!
//! Each blink rewrites every value: zero becomes one, an even-digit value
//! splits into its two halves (leading zeros stripped), anything else is
//! multiplied by a fixed constant. The population roughly doubles every
//! few blinks, so beyond a few dozen iterations only the memoized count
//! is viable: the (value, remaining blinks) subproblem space stays
//! polynomial while the literal population explodes.

use smallvec::smallvec;

use crate::engine::{self, Successors};
use crate::state::MemoTable;

/// Rewrite rules. The multiplier is the only tunable; 2024 is the rule set
/// the puzzles use.
#[derive(Debug, Clone, Copy)]
pub struct GrowthRules {
    pub multiplier: u64,
}

impl Default for GrowthRules {
    fn default() -> Self {
        Self { multiplier: 2024 }
    }
}

impl GrowthRules {
    /// Apply one blink to a single value, yielding one or two successors.
    pub fn apply(&self, value: u64) -> (u64, Option<u64>) {
        if value == 0 {
            return (1, None);
        }
        let digits = digit_count(value);
        if digits % 2 == 0 {
            let split = 10u64.pow(digits / 2);
            (value / split, Some(value % split))
        } else {
            (value * self.multiplier, None)
        }
    }
}

fn digit_count(mut n: u64) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Memo key: a value together with the blinks still to apply to it.
pub type GrowthKey = (u64, u32);

/// Population size after `blinks` iterations, counted without ever
/// materializing the population. One memo table serves every initial value
/// and is sound to keep warm across queries.
pub fn population_after(
    values: &[u64],
    blinks: u32,
    rules: &GrowthRules,
    memo: &mut MemoTable<GrowthKey, u64>,
) -> u64 {
    let mut expand = |&(value, remaining): &GrowthKey| -> Successors<GrowthKey> {
        let (left, right) = rules.apply(value);
        match right {
            Some(right) => smallvec![(left, remaining - 1), (right, remaining - 1)],
            None => smallvec![(left, remaining - 1)],
        }
    };
    values
        .iter()
        .map(|&value| {
            engine::count_paths(
                &(value, blinks),
                &mut expand,
                &|&(_, remaining)| remaining == 0,
                memo,
            )
        })
        .sum()
}

/// Literal expansion, for small blink counts only. The sequence keeps the
/// left-to-right order the rules define; use [`population_after`] when the
/// population size itself is the question.
pub fn materialize(values: &[u64], blinks: u32, rules: &GrowthRules) -> Vec<u64> {
    let mut current = values.to_vec();
    for _ in 0..blinks {
        let mut next = Vec::with_capacity(current.len() * 2);
        for &value in &current {
            let (left, right) = rules.apply(value);
            next.push(left);
            if let Some(right) = right {
                next.push(right);
            }
        }
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_rules() {
        let rules = GrowthRules::default();
        assert_eq!(rules.apply(0), (1, None));
        assert_eq!(rules.apply(1), (2024, None));
        // Leading zeros are stripped from the right half.
        assert_eq!(rules.apply(1000), (10, Some(0)));
        assert_eq!(rules.apply(99), (9, Some(9)));
        assert_eq!(rules.apply(253000), (253, Some(0)));
    }

    #[test]
    fn test_materialize_small_example() {
        let rules = GrowthRules::default();
        assert_eq!(materialize(&[125, 17], 1, &rules), vec![253000, 1, 7]);
        assert_eq!(
            materialize(&[125, 17], 2, &rules),
            vec![253, 0, 2024, 14168]
        );
        assert_eq!(
            materialize(&[125, 17], 3, &rules),
            vec![512072, 1, 20, 24, 28676032]
        );
    }

    #[test]
    fn test_population_reference_table() {
        // Populations for [125, 17] after blinks 1..=6, computed by hand
        // from the rewrite rules.
        let rules = GrowthRules::default();
        let mut memo = MemoTable::new();
        let expected = [3, 4, 5, 9, 13, 22];
        for (i, &want) in expected.iter().enumerate() {
            let blinks = (i + 1) as u32;
            assert_eq!(
                population_after(&[125, 17], blinks, &rules, &mut memo),
                want,
                "population after {blinks} blinks"
            );
        }
    }

    #[test]
    fn test_population_matches_materialized_count() {
        let rules = GrowthRules::default();
        let mut memo = MemoTable::new();
        for blinks in 0..=10 {
            let literal = materialize(&[125, 17], blinks, &rules).len() as u64;
            let counted = population_after(&[125, 17], blinks, &rules, &mut memo);
            assert_eq!(counted, literal);
        }
    }

    #[test]
    fn test_population_large_blink_count() {
        // 25 blinks is far past where materializing stays cheap; the
        // memoized count reproduces the known total.
        let rules = GrowthRules::default();
        let mut memo = MemoTable::new();
        assert_eq!(population_after(&[125, 17], 25, &rules, &mut memo), 55312);
        // Shared subproblems across the two initial values were cache hits.
        assert!(memo.hits() > 0);
    }

    #[test]
    fn test_memo_reset_is_transparent() {
        let rules = GrowthRules::default();
        let mut memo = MemoTable::new();
        let warm = population_after(&[0, 1, 10, 99, 999], 20, &rules, &mut memo);
        memo.clear();
        let cold = population_after(&[0, 1, 10, 99, 999], 20, &rules, &mut memo);
        assert_eq!(warm, cold);
    }
}
