use petgraph::graphmap::UnGraphMap;
use strum::VariantArray;
use unordered_pair::UnorderedPair;

/// Number of arms on the star.
pub const ARM_COUNT: usize = 6;

/// One of the six word-bearing lines of the star, in the order the search
/// fills them.
///
/// The figure has six outer points: top, upper left, upper right, lower
/// left, lower right, and bottom. Every arm runs point to point, reading
/// downward or rightward, and crosses four of the other five on the way.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Arm {
    /// From the top point down to the lower right point.
    TopToLowerRight,
    /// From the upper left point down to the bottom point.
    UpperLeftToBottom,
    /// The upper horizontal, upper left point to upper right point.
    UpperRim,
    /// The lower horizontal, lower left point to lower right point.
    LowerRim,
    /// From the lower left point up to the top point.
    LowerLeftToTop,
    /// From the bottom point up to the upper right point.
    BottomToUpperRight,
}

/// A single letter cell: the `.1`-th letter of the word lying along `.0`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Slot(pub(crate) Arm, pub(crate) usize);

/// Where arms meet. Each crossing pins two slots to the same letter; a
/// filled star is valid exactly when all twelve agree.
pub(crate) const CROSSINGS: [UnorderedPair<Slot>; 12] = [
    // top point
    UnorderedPair(Slot(Arm::TopToLowerRight, 0), Slot(Arm::LowerLeftToTop, 6)),
    // upper left point
    UnorderedPair(Slot(Arm::UpperLeftToBottom, 0), Slot(Arm::UpperRim, 0)),
    // interior
    UnorderedPair(Slot(Arm::UpperRim, 2), Slot(Arm::LowerLeftToTop, 4)),
    UnorderedPair(Slot(Arm::UpperRim, 4), Slot(Arm::TopToLowerRight, 2)),
    // upper right point
    UnorderedPair(Slot(Arm::UpperRim, 6), Slot(Arm::BottomToUpperRight, 6)),
    // interior
    UnorderedPair(Slot(Arm::UpperLeftToBottom, 2), Slot(Arm::LowerLeftToTop, 2)),
    UnorderedPair(Slot(Arm::BottomToUpperRight, 4), Slot(Arm::TopToLowerRight, 4)),
    // lower left point
    UnorderedPair(Slot(Arm::LowerRim, 0), Slot(Arm::LowerLeftToTop, 0)),
    // interior
    UnorderedPair(Slot(Arm::LowerRim, 2), Slot(Arm::UpperLeftToBottom, 4)),
    UnorderedPair(Slot(Arm::LowerRim, 4), Slot(Arm::BottomToUpperRight, 2)),
    // lower right point
    UnorderedPair(Slot(Arm::LowerRim, 6), Slot(Arm::TopToLowerRight, 6)),
    // bottom point
    UnorderedPair(Slot(Arm::BottomToUpperRight, 0), Slot(Arm::UpperLeftToBottom, 6)),
];

/// The crossing structure as an undirected graph: slots are nodes, one edge
/// per crossing. Built fresh per solve; nothing is cached between runs.
pub(crate) fn crossing_graph() -> UnGraphMap<Slot, ()> {
    UnGraphMap::from_edges(CROSSINGS.iter().map(|crossing| (crossing.0, crossing.1)))
}
