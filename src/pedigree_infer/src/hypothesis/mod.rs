use crate::probs::GeneCount;

mod submasks;
pub use submasks::SubMasks;

mod enumerator;
pub use enumerator::{Evidence, HypothesisEnumerator};

/// Set of individuals, encoded as a bitmask. Bit `i` is tied to node `i` of the `Network`.
pub type Mask = u64;

/// One complete assignment of gene counts and trait statuses to every individual of a pedigree.
/// # Fields:
/// - `one_copy`  : individuals carrying exactly one copy of the gene.
/// - `two_copies`: individuals carrying two copies of the gene. Disjoint from `one_copy`
/// - `has_trait` : individuals exhibiting the trait.
///
/// Individuals found in neither `one_copy`, nor `two_copies` carry zero copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hypothesis {
    one_copy  : Mask,
    two_copies: Mask,
    has_trait : Mask,
}

impl Hypothesis {
    pub fn new(one_copy: Mask, two_copies: Mask, has_trait: Mask) -> Self {
        debug_assert_eq!(one_copy & two_copies, 0, "Gene count sets of a hypothesis must be disjoint");
        Self { one_copy, two_copies, has_trait }
    }

    /// Gene count of individual `i`
    #[inline(always)]
    pub fn genes(&self, i: usize) -> GeneCount {
        let bit: Mask = 1 << i;
        if self.two_copies & bit != 0 {
            GeneCount::Two
        } else if self.one_copy & bit != 0 {
            GeneCount::One
        } else {
            GeneCount::Zero
        }
    }

    /// Trait status of individual `i`
    #[inline(always)]
    pub fn has_trait(&self, i: usize) -> bool {
        self.has_trait & (1 << i) != 0
    }
}
