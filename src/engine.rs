//! Generic search drivers.
//!
//! Three strategies cover the recurring puzzle shapes:
//!
//! 1. [`walk`] — deterministic single-successor simulation with cycle
//!    detection (grid patrols).
//! 2. [`count_paths`] / [`reaches_goal`] — memoized exhaustive counting of
//!    goal-reaching paths over a finite expansion DAG, plus the
//!    short-circuiting existence check (calibration equations, pattern
//!    composition, population growth).
//! 3. [`search_best`] — exhaustive best-result search tracking the
//!    highest-scoring terminal state (maximal cliques).
//!
//! The drivers know nothing about grids, operators, or graphs; callers
//! supply the initial state and an expansion closure. No driver performs
//! I/O and none imposes an internal depth or time limit.

use smallvec::SmallVec;
use std::collections::HashSet;

use crate::state::{MemoTable, State};

/// Successor list returned by an expansion function. Fan-out is tiny in
/// every domain here (at most three operators), so successors stay inline.
pub type Successors<S> = SmallVec<[S; 4]>;

/// How a deterministic walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The step function reported no successor: the walk left the space.
    Exited,
    /// A previously seen state recurred: the walk is in a cycle.
    Looped,
}

/// Result of a deterministic walk: the outcome plus every distinct state
/// visited along the way.
#[derive(Debug, Clone)]
pub struct WalkReport<S: State> {
    pub outcome: WalkOutcome,
    pub visited: HashSet<S>,
    pub steps: usize,
}

/// Run a deterministic simulation from `initial`, one successor per state.
///
/// `step` returns `None` when the walk leaves the space. The visited set is
/// scoped to this run; with a finite space and a deterministic step function
/// the walk always terminates with exactly one of the two outcomes.
pub fn walk<S, F>(initial: S, mut step: F) -> WalkReport<S>
where
    S: State,
    F: FnMut(&S) -> Option<S>,
{
    let mut visited = HashSet::new();
    let mut current = initial;
    let mut steps = 0;

    loop {
        if !visited.insert(current.clone()) {
            return WalkReport {
                outcome: WalkOutcome::Looped,
                visited,
                steps,
            };
        }
        match step(&current) {
            Some(next) => {
                current = next;
                steps += 1;
            }
            None => {
                return WalkReport {
                    outcome: WalkOutcome::Exited,
                    visited,
                    steps,
                }
            }
        }
    }
}

/// Count the paths from `state` to a goal state, memoized on the state.
///
/// Each goal state contributes one derivation per path reaching it; states
/// with no successors and no goal contribute zero. The memo key is the
/// *remaining problem*, not the path taken, which is what collapses the
/// exponential branching into one computation per distinct subproblem.
///
/// The caller owns the memo table. Reusing it across top-level queries is
/// sound only if equal states have identical futures across those queries.
pub fn count_paths<S, F, G>(
    state: &S,
    expand: &mut F,
    is_goal: &G,
    memo: &mut MemoTable<S, u64>,
) -> u64
where
    S: State,
    F: FnMut(&S) -> Successors<S>,
    G: Fn(&S) -> bool,
{
    if is_goal(state) {
        return 1;
    }
    if let Some(count) = memo.get(state) {
        return count;
    }

    let mut total: u64 = 0;
    for next in expand(state) {
        total += count_paths(&next, expand, is_goal, memo);
    }
    memo.insert(state.clone(), total);
    total
}

/// Existence variant of [`count_paths`]: stops at the first goal found.
///
/// No branch is explored after a success anywhere below it, so failed
/// subtrees are the only ones paid for in full. Memoizes reachability per
/// state with the same key discipline as the counting driver.
pub fn reaches_goal<S, F, G>(
    state: &S,
    expand: &mut F,
    is_goal: &G,
    memo: &mut MemoTable<S, bool>,
) -> bool
where
    S: State,
    F: FnMut(&S) -> Successors<S>,
    G: Fn(&S) -> bool,
{
    if is_goal(state) {
        return true;
    }
    if let Some(reachable) = memo.get(state) {
        return reachable;
    }

    for next in expand(state) {
        if reaches_goal(&next, expand, is_goal, memo) {
            memo.insert(state.clone(), true);
            return true;
        }
    }
    memo.insert(state.clone(), false);
    false
}

/// Exhaustive best-result search.
///
/// Recursively explores every successor; a state with no successors is
/// terminal and replaces `best` when it scores strictly higher. Ties keep
/// the earlier find, so callers wanting deterministic output must
/// canonicalize the result themselves. The only pruning is whatever the
/// expansion function declines to generate.
pub fn search_best<S, F, C>(state: &S, expand: &mut F, score: &C, best: &mut S)
where
    S: State,
    F: FnMut(&S) -> Vec<S>,
    C: Fn(&S) -> usize,
{
    let successors = expand(state);
    if successors.is_empty() {
        if score(state) > score(best) {
            *best = state.clone();
        }
        return;
    }
    for next in successors {
        search_best(&next, expand, score, best);
    }
}
