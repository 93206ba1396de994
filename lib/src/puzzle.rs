use std::fmt::{Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

use crate::candidacy::compute_candidates;
use crate::search::Combos;
use crate::topology::{crossing_graph, Arm, Slot, ARM_COUNT};
use crate::validate;
use crate::word::{MalformedWord, Word};

/// A star puzzle: a pool of candidate words to arrange along the six arms.
///
/// Duplicate pool entries are tolerated; they cost search time but cannot
/// appear twice in one answer.
#[derive(Debug)]
pub struct Puzzle {
    pool: Vec<Word>,
}

impl Puzzle {
    /// Build a puzzle over an already-validated pool.
    pub fn new(pool: impl IntoIterator<Item = Word>) -> Self {
        Self {
            pool: pool.into_iter().collect_vec(),
        }
    }

    /// Parse raw strings into a pool, rejecting the first entry that is not
    /// exactly seven letters. Nothing is searched until
    /// [`solve()`](Self::solve).
    pub fn parse<I>(raw: I) -> Result<Self, MalformedWord>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Ok(Self::new(
            raw.into_iter()
                .map(|s| Word::from_str(s.as_ref()))
                .collect::<Result<Vec<_>, _>>()?,
        ))
    }

    /// The word pool, in the order given.
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    /// Search the pool for every arrangement that fills the star.
    ///
    /// Candidate buckets and the crossing graph are computed fresh on each
    /// call, so repeated solves never interfere. Answers stream out as they
    /// are found; drop the iterator to stop early. Mirror-image
    /// arrangements count separately, one per arm order.
    pub fn solve(&self) -> Solutions {
        Solutions {
            star: crossing_graph(),
            search: Combos::new(compute_candidates(&self.pool)),
        }
    }
}

/// Stream of [`Solution`]s, in depth-first search order over the candidate
/// buckets.
pub struct Solutions {
    star: UnGraphMap<Slot, ()>,
    search: Combos,
}

impl Iterator for Solutions {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        self.search
            .by_ref()
            .find(|combo| validate::satisfied_by(&self.star, combo))
            .map(Solution)
    }
}

/// Six pairwise distinct words, one per arm in arm order, agreeing on every
/// crossing of the star.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Solution([Word; ARM_COUNT]);

impl Solution {
    /// The words in arm order.
    pub fn words(&self) -> &[Word; ARM_COUNT] {
        &self.0
    }
}

impl Index<Arm> for Solution {
    type Output = Word;

    fn index(&self, arm: Arm) -> &Self::Output {
        &self.0[arm as usize]
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}
