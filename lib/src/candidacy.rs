use crate::topology::{Arm, ARM_COUNT};
use crate::word::Word;

/// Compute, for every arm, the words that could possibly lie along it.
///
/// This is endpoint screening only: a word is kept for an arm when some
/// partner word (or ordered pair of distinct partners) from the pool could
/// meet it at the outer points its arm touches, judged by first and last
/// letters alone. The screen is necessary but never sufficient; interior
/// crossings are left to full validation. An empty pool yields six empty
/// buckets.
pub(crate) fn compute_candidates(pool: &[Word]) -> [Vec<Word>; ARM_COUNT] {
    let mut candidates: [Vec<Word>; ARM_COUNT] = Default::default();

    for &word in pool {
        // the descending tip arm departs the top point just as some other
        // word arrives there
        let head_on_tail = pool
            .iter()
            .any(|other| *other != word && word.head() == other.tail());
        // the ascending tip arm ends on the upper right point together with
        // the upper rim
        let tail_on_tail = pool
            .iter()
            .any(|other| *other != word && word.tail() == other.tail());

        // Diagonals and rims touch three outer points each, so two distinct
        // partners have to close a triangle of endpoint matches. One scan
        // discovers both symmetric weaves; which of them held decides the
        // buckets.
        let mut weave_diagonal = false;
        let mut weave_rim = false;
        for second in pool
            .iter()
            .filter(|w| **w != word && w.head() == word.head())
        {
            for third in pool.iter().filter(|w| **w != word && **w != *second) {
                if word.tail() == third.head() && second.tail() == third.tail() {
                    weave_diagonal = true;
                }
                if word.tail() == third.tail() && second.tail() == third.head() {
                    weave_rim = true;
                }
            }
            if weave_diagonal && weave_rim {
                break;
            }
        }

        if head_on_tail {
            candidates[Arm::TopToLowerRight as usize].push(word);
        }
        if weave_diagonal {
            candidates[Arm::UpperLeftToBottom as usize].push(word);
            candidates[Arm::LowerLeftToTop as usize].push(word);
        }
        if weave_rim {
            candidates[Arm::UpperRim as usize].push(word);
            candidates[Arm::LowerRim as usize].push(word);
        }
        if tail_on_tail {
            candidates[Arm::BottomToUpperRight as usize].push(word);
        }
    }

    candidates
}
