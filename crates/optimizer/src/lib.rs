//! Tree-to-tree optimizations run after checking and operator patching.
//!
//! Every rewrite is opportunistic: when its preconditions do not hold the
//! node is left as it is. Nothing here can fail.

mod const_range;
mod fold;
mod in_array;
mod in_range;

pub use const_range::MAX_RANGE_LEN;

use const_range::ConstRange;
use fold::Fold;
use in_array::InArray;
use in_range::InRange;
use parser::{Node, walk};
use tracing::debug;

/// Upper bound on optimizer rounds. Each round strictly shrinks or
/// simplifies the tree, so this is only hit by pathological input.
const MAX_ROUNDS: usize = 16;

/// Rewrites applied by one [`optimize`] call
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub folded: usize,
    pub sets: usize,
    pub range_checks: usize,
    pub ranges_expanded: usize,
    pub rounds: usize,
}

impl Stats {
    pub fn total(&self) -> usize {
        self.folded + self.sets + self.range_checks + self.ranges_expanded
    }
}

/// Optimize `tree` in place.
///
/// Passes run in a fixed order: folding, membership over arrays, membership
/// over ranges, then range expansion. Expansion can expose new constants
/// (`(1..3)[0]`), so the sequence repeats until a round changes nothing,
/// which also makes a second call on the result a no-op.
pub fn optimize(tree: &mut Node) -> Stats {
    let mut stats = Stats::default();

    while stats.rounds < MAX_ROUNDS {
        stats.rounds += 1;

        let mut fold = Fold::default();
        walk(tree, &mut fold);

        let mut in_array = InArray::default();
        walk(tree, &mut in_array);

        let mut in_range = InRange::default();
        walk(tree, &mut in_range);

        let mut const_range = ConstRange::default();
        walk(tree, &mut const_range);
        const_range.expand(tree);

        let round = fold.applied + in_array.applied + in_range.applied + const_range.applied;
        stats.folded += fold.applied;
        stats.sets += in_array.applied;
        stats.range_checks += in_range.applied;
        stats.ranges_expanded += const_range.applied;

        if round == 0 {
            break;
        }
    }

    debug!(rewrites = stats.total(), rounds = stats.rounds, "optimized");
    stats
}

#[cfg(test)]
mod tests;
