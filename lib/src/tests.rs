#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::str::FromStr;

    use itertools::Itertools;
    use strum::VariantArray;
    use unordered_pair::UnorderedPair;

    use crate::candidacy::compute_candidates;
    use crate::render::Figure;
    use crate::topology::{crossing_graph, Slot, CROSSINGS};
    use crate::validate;
    use crate::{Arm, MalformedWord, Puzzle, Word, ARM_COUNT, WORD_LEN};

    fn word(raw: &str) -> Word {
        Word::from_str(raw).unwrap()
    }

    // Six words built to fill the star: the even positions of each word are
    // its four crossing cells, each crossing gets its own letter A through L,
    // and the odd positions are filler unique to the word.
    const INTERLOCKING: [&str; 6] = [
        "AMDMGMK", "BNFNINL", "BOCODOE", "HPIPJPK", "HQFQCQA", "LRJRGRE",
    ];

    fn interlocking_pool() -> Vec<Word> {
        INTERLOCKING.iter().map(|raw| word(raw)).collect_vec()
    }

    #[test]
    fn blank_figure() {
        assert_eq!(format!("{}", Figure::blank()), "      _
     _ _
_ _ _ _ _ _ _
 _ _     _ _
  _       _
 _ _     _ _
_ _ _ _ _ _ _
     _ _
      _
");
    }

    #[test]
    fn solve_interlocking_pool() {
        let solutions = Puzzle::new(interlocking_pool()).solve().collect_vec();

        // the reversal of arm order maps the crossing table onto itself, so
        // every filling also appears mirrored
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].words().to_vec(), interlocking_pool());
        assert_eq!(
            solutions[1].words().to_vec(),
            interlocking_pool().into_iter().rev().collect_vec()
        );

        assert_eq!(
            format!("{}", solutions[0]),
            "AMDMGMK,BNFNINL,BOCODOE,HPIPJPK,HQFQCQA,LRJRGRE"
        );
        assert_eq!(format!("{}", Figure::from(&solutions[0])), "      A
     Q M
B O C O D O E
 N Q     M R
  F       G
 Q N     R M
H P I P J P K
     N R
      L
");
    }

    #[test]
    fn empty_pool_yields_nothing() {
        assert!(Puzzle::new(vec![]).solve().next().is_none());
    }

    #[test]
    fn five_words_cannot_fill() {
        let pool = interlocking_pool()[..5].to_vec();
        assert!(Puzzle::new(pool).solve().next().is_none());
    }

    #[test]
    fn malformed_word_rejected() {
        let err = Puzzle::parse(["AMDMGMK", "HI"]).unwrap_err();
        assert_eq!(
            err,
            MalformedWord {
                raw: "HI".to_owned(),
                letters: 2,
            }
        );
        assert_eq!(
            format!("{}", err),
            "word \"HI\" has 2 letters where exactly 7 are required"
        );

        assert!(Puzzle::parse(["AMDMGMKX"]).is_err());
    }

    #[test]
    fn agrees_with_brute_force() {
        // decoys: one passes the descending tip screen but completes
        // nothing, one matches no endpoint at all
        let mut pool = interlocking_pool();
        pool.push(word("ATTTTTT"));
        pool.push(word("ZYXWVUQ"));

        let star = crossing_graph();
        let truth: HashSet<[Word; ARM_COUNT]> = pool
            .iter()
            .copied()
            .permutations(ARM_COUNT)
            .map(|perm| <[Word; ARM_COUNT]>::try_from(perm).unwrap())
            .filter(|combo| validate::satisfied_by(&star, combo))
            .collect();
        let found: HashSet<[Word; ARM_COUNT]> = Puzzle::new(pool)
            .solve()
            .map(|solution| *solution.words())
            .collect();

        assert_eq!(found, truth);
        assert_eq!(truth.len(), 2);
    }

    #[test]
    fn answers_sound_and_free_of_repeats() {
        let mut pool = interlocking_pool();
        pool.push(word("ATTTTTT"));

        let star = crossing_graph();
        let mut yielded = 0;
        for solution in Puzzle::new(pool).solve() {
            assert!(validate::satisfied_by(&star, solution.words()));
            assert!(solution.words().iter().all_unique());
            yielded += 1;
        }

        assert!(yielded > 0);
    }

    #[test]
    fn repeated_solves_agree() {
        let puzzle = Puzzle::new(interlocking_pool());
        assert_eq!(
            puzzle.solve().collect_vec(),
            puzzle.solve().collect_vec()
        );
    }

    #[test]
    fn isolated_word_screens_out() {
        // no endpoint of the decoy matches anything, so no bucket keeps it
        let mut pool = interlocking_pool();
        let decoy = word("ZYXWVUQ");
        pool.push(decoy);

        let candidates = compute_candidates(&pool);
        assert!(candidates.iter().all(|bucket| !bucket.contains(&decoy)));

        // both tip words survive the descending tip screen, in pool order
        assert_eq!(
            candidates[Arm::TopToLowerRight as usize],
            vec![word("AMDMGMK"), word("LRJRGRE")]
        );
    }

    #[test]
    fn crossings_form_a_perfect_matching() {
        let star = crossing_graph();

        assert_eq!(star.node_count(), 2 * CROSSINGS.len());
        assert_eq!(star.edge_count(), CROSSINGS.len());
        for slot in star.nodes() {
            assert_eq!(star.neighbors(slot).count(), 1);
        }
    }

    #[test]
    fn layout_collapses_only_crossings() {
        let mut cells: HashMap<(usize, usize), Vec<Slot>> = HashMap::new();
        for &arm in Arm::VARIANTS {
            for index in 0..WORD_LEN {
                cells
                    .entry(Figure::position(arm, index))
                    .or_default()
                    .push(Slot(arm, index));
            }
        }

        // 42 slots, of which the 12 crossings each merge two
        assert_eq!(cells.len(), ARM_COUNT * WORD_LEN - CROSSINGS.len());

        let shared = cells
            .values()
            .filter(|slots| slots.len() > 1)
            .collect_vec();
        assert_eq!(shared.len(), CROSSINGS.len());
        for slots in shared {
            assert_eq!(slots.len(), 2);
            assert!(CROSSINGS.contains(&UnorderedPair(slots[0], slots[1])));
        }
    }
}
