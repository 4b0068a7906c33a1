//! Derivation counting for calibration equations and pattern composition.
//!
//! Operators apply strictly left to right with no precedence: each step
//! composes the running value with the next operand, so the search walks
//! composed values instead of building expression trees. Memo keys are the
//! remaining problem — (next operand index, running value) for equations,
//! the remaining suffix for pattern composition.

use smallvec::SmallVec;

use crate::engine::{self, Successors};
use crate::state::MemoTable;

/// Composition operator applied between the running value and an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
    /// Digit concatenation: `12 || 345 = 12345`.
    Concat,
}

impl Op {
    pub fn apply(self, acc: u64, operand: u64) -> u64 {
        match self {
            Op::Add => acc + operand,
            Op::Mul => acc * operand,
            Op::Concat => acc * pow10(digit_count(operand)) + operand,
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

fn pow10(exp: u32) -> u64 {
    10u64.pow(exp)
}

/// A calibration equation: a target and the ordered operands that must
/// compose to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub target: u64,
    pub operands: Vec<u64>,
}

/// Search key: how many operands are consumed and what they compose to so
/// far. Scoped to a single equation; the same key means a different
/// subproblem under a different operand list, so the memo table must be
/// cleared (or replaced) between equations.
pub type EquationKey = (usize, u64);

fn expand_equation(eq: &Equation, ops: &[Op]) -> impl FnMut(&EquationKey) -> Successors<EquationKey> {
    let operands = eq.operands.clone();
    let target = eq.target;
    // With positive operands every operator is monotone non-decreasing, so
    // a value past the target can never come back down. A zero operand
    // breaks that (a later *0 resets), so pruning is off in that case.
    let monotone = operands.iter().all(|&v| v > 0);
    let ops: SmallVec<[Op; 3]> = ops.iter().copied().collect();
    move |&(index, acc)| {
        let mut next = Successors::new();
        if let Some(&operand) = operands.get(index) {
            for op in &ops {
                let composed = op.apply(acc, operand);
                if !monotone || composed <= target {
                    next.push((index + 1, composed));
                }
            }
        }
        next
    }
}

/// Count the operator assignments under which the equation holds.
pub fn count_derivations(eq: &Equation, ops: &[Op], memo: &mut MemoTable<EquationKey, u64>) -> u64 {
    let Some((&first, _)) = eq.operands.split_first() else {
        return 0;
    };
    let total = eq.operands.len();
    let target = eq.target;
    engine::count_paths(
        &(1, first),
        &mut expand_equation(eq, ops),
        &|&(index, acc)| index == total && acc == target,
        memo,
    )
}

/// Does at least one operator assignment satisfy the equation? Stops at the
/// first success.
pub fn is_satisfiable(eq: &Equation, ops: &[Op], memo: &mut MemoTable<EquationKey, bool>) -> bool {
    let Some((&first, _)) = eq.operands.split_first() else {
        return false;
    };
    let total = eq.operands.len();
    let target = eq.target;
    engine::reaches_goal(
        &(1, first),
        &mut expand_equation(eq, ops),
        &|&(index, acc)| index == total && acc == target,
        memo,
    )
}

/// Sum of the targets of all satisfiable equations, the usual calibration
/// aggregate. Each equation gets a fresh memo scope.
pub fn calibration_sum(equations: &[Equation], ops: &[Op]) -> u64 {
    let mut memo = MemoTable::new();
    equations
        .iter()
        .filter(|eq| {
            memo.clear();
            is_satisfiable(eq, ops, &mut memo)
        })
        .map(|eq| eq.target)
        .sum()
}

/// Count the ways `design` can be written as a concatenation of `patterns`.
///
/// The state is the remaining suffix; a pattern that prefix-matches it
/// exactly strips off, anything else prunes the branch. Keys are owned
/// suffix strings, so one memo table is sound across many designs and may
/// grow monotonically for the life of the process.
pub fn count_compositions(
    design: &str,
    patterns: &[String],
    memo: &mut MemoTable<String, u64>,
) -> u64 {
    let mut expand = |suffix: &String| -> Successors<String> {
        patterns
            .iter()
            .filter_map(|p| suffix.strip_prefix(p.as_str()))
            .map(str::to_owned)
            .collect()
    };
    engine::count_paths(
        &design.to_owned(),
        &mut expand,
        &|suffix: &String| suffix.is_empty(),
        memo,
    )
}
