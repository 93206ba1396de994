use crate::topology::ARM_COUNT;
use crate::word::Word;

/// Depth-first walk over the per-arm candidate buckets, arm order 0 to 5,
/// yielding every arrangement of six pairwise distinct words.
///
/// Arrangements stream out one at a time; nothing is accumulated, and
/// dropping the iterator abandons the rest of the walk. Every frame on the
/// stack owns its path outright, and branching clones the prefix, so
/// sibling branches can never observe each other's state. A word may recur
/// across arrangements, just never within one.
pub(crate) struct Combos {
    candidates: [Vec<Word>; ARM_COUNT],
    stack: Vec<Vec<Word>>,
}

impl Combos {
    pub(crate) fn new(candidates: [Vec<Word>; ARM_COUNT]) -> Self {
        Self {
            candidates,
            stack: vec![Vec::with_capacity(ARM_COUNT)],
        }
    }
}

impl Iterator for Combos {
    type Item = [Word; ARM_COUNT];

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.stack.pop() {
            if path.len() == ARM_COUNT {
                // length just checked
                return Some(path.try_into().unwrap());
            }

            // extensions go on in reverse so the earliest candidate pops first
            for word in self.candidates[path.len()].iter().rev() {
                if !path.contains(word) {
                    let mut extended = path.clone();
                    extended.push(*word);
                    self.stack.push(extended);
                }
            }
        }

        None
    }
}
