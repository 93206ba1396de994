//! Laying the star out as text, apart from the solving machinery.
//!
//! The figure is a 9 by 7 character grid. Both tip arms and both diagonals
//! descend half a column per row, which the printed form suggests by
//! indenting every other row one character.

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::puzzle::Solution;
use crate::topology::Arm;
use crate::word::WORD_LEN;

const ROWS: usize = 9;
const COLS: usize = 7;

/// A star figure laid out on a character grid, ready for printing.
///
/// A fresh figure is built per answer; nothing is shared with the solving
/// core.
pub struct Figure {
    grid: Array2<char>,
}

impl Figure {
    /// The unsolved figure: an underscore at every letter cell.
    pub fn blank() -> Self {
        Self::filled('_')
    }

    /// Every letter cell holding the same `letter`. Handy when checking the
    /// layout itself.
    pub fn filled(letter: char) -> Self {
        Self::lay(|_, _| letter)
    }

    fn lay(letter_at: impl Fn(Arm, usize) -> char) -> Self {
        let mut grid = Array2::from_elem((ROWS, COLS), ' ');
        for &arm in Arm::VARIANTS {
            for index in 0..WORD_LEN {
                grid[Self::position(arm, index)] = letter_at(arm, index);
            }
        }

        Self { grid }
    }

    /// Grid cell of the `index`-th letter along `arm`. The two slots of a
    /// crossing land on the same cell.
    pub(crate) fn position(arm: Arm, index: usize) -> (usize, usize) {
        match arm {
            Arm::TopToLowerRight => (index, index / 2 + 3),
            Arm::UpperLeftToBottom => (2 + index, index / 2),
            Arm::UpperRim => (2, index),
            Arm::LowerRim => (6, index),
            Arm::LowerLeftToTop => (6 - index, index / 2),
            Arm::BottomToUpperRight => (8 - index, index / 2 + 3),
        }
    }
}

impl From<&Solution> for Figure {
    fn from(solution: &Solution) -> Self {
        Self::lay(|arm, index| solution[arm][index])
    }
}

impl Display for Figure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (row_index, row) in self.grid.rows().into_iter().enumerate() {
            // odd rows sit half a step to the right
            let indent = if row_index % 2 == 1 { " " } else { "" };
            let line = format!("{}{}", indent, row.iter().join(" "));
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
