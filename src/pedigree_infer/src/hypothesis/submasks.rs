use super::Mask;

/// Iterator over every submask of a given mask (i.e. every subset of a set of individuals), each visited
/// exactly once, in decreasing numerical order: `mask` first, the empty set last.
#[derive(Debug, Clone)]
pub struct SubMasks {
    mask: Mask,
    next: Option<Mask>,
}

impl SubMasks {
    pub fn of(mask: Mask) -> Self {
        Self { mask, next: Some(mask) }
    }

    /// Total number of submasks of `mask`: 2^popcount(mask)
    pub fn count_of(mask: Mask) -> u64 {
        1 << mask.count_ones()
    }
}

impl Iterator for SubMasks {
    type Item = Mask;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = match current {
            0 => None,
            _ => Some((current - 1) & self.mask),
        };
        Some(current)
    }
}
