use std::fmt::{self, Display, Formatter};

/// Number of copies of the variant allele carried by an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeneCount {
    Zero = 0,
    One  = 1,
    Two  = 2,
}

impl GeneCount {
    /// Every possible gene count, in ascending order.
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    #[inline(always)]
    pub fn copies(self) -> u8 {
        self as u8
    }

    /// Position of this gene count within a three-slot distribution (`[p0, p1, p2]`)
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for GeneCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.copies())
    }
}
