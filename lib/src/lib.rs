#![warn(missing_docs)]

//! # `hexagram`
//!
//! An exhaustive solver for a star word puzzle: six arms, each carrying one
//! seven-letter word, crossing one another at twelve cells that must agree
//! on their letter. Build a [`Puzzle`] from a pool of candidate words, call
//! [`solve()`](Puzzle::solve), and every arrangement of six distinct words
//! that fills the star streams back as a [`Solution`].
//!
//! Words must be exactly seven letters long; anything else is rejected
//! while the pool is built. [`render::Figure`] lays an answer (or the blank
//! figure) out as text.
//!
//! # Internals
//! A solve runs in three stages. Endpoint screening first: a word can only
//! lie along an arm if other pool words could meet it where its arm begins
//! and ends, which is judged from first and last letters alone and shrinks
//! each arm's candidate list cheaply. A depth-first walk then enumerates
//! arrangements of six pairwise distinct candidates, one per arm, as a
//! stream. Finally each arrangement is checked exactly against the twelve
//! crossings, which the crate carries as an undirected graph of letter
//! cells. The screen is deliberately approximate and the walk does no
//! constraint propagation; exactness lives entirely in the final check, so
//! an arrangement is emitted if and only if every crossing agrees.

pub use puzzle::{Puzzle, Solution, Solutions};
pub use topology::{Arm, ARM_COUNT};
pub use word::{MalformedWord, Word, WORD_LEN};

pub(crate) mod candidacy;
pub(crate) mod puzzle;
pub mod render;
pub(crate) mod search;
mod tests;
pub(crate) mod topology;
pub(crate) mod validate;
pub(crate) mod word;
