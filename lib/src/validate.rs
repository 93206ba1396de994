use petgraph::graphmap::UnGraphMap;

use crate::topology::{Slot, ARM_COUNT};
use crate::word::Word;

/// Whether `combo`, one word per arm in arm order, carries the same letter
/// on both sides of every crossing of `star`. Stops at the first mismatch.
pub(crate) fn satisfied_by(star: &UnGraphMap<Slot, ()>, combo: &[Word; ARM_COUNT]) -> bool {
    star.all_edges()
        .all(|(a, b, _)| letter_at(combo, a) == letter_at(combo, b))
}

#[inline]
fn letter_at(combo: &[Word; ARM_COUNT], slot: Slot) -> char {
    combo[slot.0 as usize][slot.1]
}
