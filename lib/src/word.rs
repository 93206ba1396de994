use std::fmt::{Debug, Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

use itertools::Itertools;

/// Number of letters in every word on the star.
pub const WORD_LEN: usize = 7;

/// A puzzle word: exactly [`WORD_LEN`] letters.
///
/// Comparison is exact `char` equality, so callers wanting a
/// case-insensitive solve should normalize before parsing. The fixed length
/// means a letter lookup anywhere along an arm can never go out of range.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Word([char; WORD_LEN]);

impl Word {
    #[inline]
    pub(crate) fn head(&self) -> char {
        self.0[0]
    }

    #[inline]
    pub(crate) fn tail(&self) -> char {
        self.0[WORD_LEN - 1]
    }
}

impl FromStr for Word {
    type Err = MalformedWord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match <[char; WORD_LEN]>::try_from(s.chars().collect_vec()) {
            Ok(letters) => Ok(Self(letters)),
            Err(letters) => Err(MalformedWord {
                raw: s.to_owned(),
                letters: letters.len(),
            }),
        }
    }
}

impl Index<usize> for Word {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_iter(self.0))
    }
}

impl Debug for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", String::from_iter(self.0))
    }
}

/// Raised when a raw string cannot become a [`Word`].
///
/// Rejecting bad input here, before any pool exists, is what keeps the rest
/// of the crate total: no later stage can meet a word of the wrong length.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MalformedWord {
    /// The rejected input.
    pub raw: String,
    /// How many letters it actually had.
    pub letters: usize,
}

impl Display for MalformedWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "word {:?} has {} letters where exactly {} are required",
            self.raw, self.letters, WORD_LEN
        )
    }
}

impl std::error::Error for MalformedWord {}
