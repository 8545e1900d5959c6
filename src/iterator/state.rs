/// Largest pool the `used` bitmask can track
pub const MAX_POOL_SIZE: usize = u128::BITS as usize;

/// Position of a k-permutation walk over a pool of symbols.
///
/// `chosen` holds pool indices of the current arrangement and `used` mirrors it
/// as a bitmask. The first `fixed` positions are a prefix that is never
/// backtracked over.
#[derive(Debug, Clone)]
pub struct PermutationState {
    pub(crate) chosen: Vec<usize>,
    used: u128,
    pool_size: usize,
    length: usize,
    fixed: usize,
    pub(crate) started: bool,
    pub(crate) exhausted: bool,
}

impl PermutationState {
    pub fn new(pool_size: usize, length: usize) -> Self {
        Self {
            chosen: Vec::with_capacity(length),
            used: 0,
            pool_size,
            length,
            fixed: 0,
            started: false,
            exhausted: length > pool_size || pool_size > MAX_POOL_SIZE,
        }
    }

    /// Start from a fixed prefix of pool indices
    pub fn with_prefix(pool_size: usize, length: usize, prefix: &[usize]) -> Self {
        let mut state = Self::new(pool_size, length);
        if state.exhausted || prefix.len() > length {
            state.mark_exhausted();
            return state;
        }
        for &index in prefix {
            if index >= pool_size || state.is_used(index) {
                state.mark_exhausted();
                return state;
            }
            state.take(index);
        }
        state.fixed = prefix.len();
        state
    }

    #[inline]
    fn is_used(&self, index: usize) -> bool {
        self.used & (1_u128 << index) != 0
    }

    fn take(&mut self, index: usize) {
        self.used |= 1_u128 << index;
        self.chosen.push(index);
    }

    fn release(&mut self, index: usize) {
        self.used &= !(1_u128 << index);
    }

    fn next_free(&self, from: usize) -> Option<usize> {
        (from..self.pool_size).find(|&index| !self.is_used(index))
    }

    /// Complete the arrangement with the smallest unused indices
    pub(crate) fn fill(&mut self) {
        while self.chosen.len() < self.length {
            match self.next_free(0) {
                Some(index) => self.take(index),
                None => {
                    self.mark_exhausted();
                    return;
                }
            }
        }
    }

    /// Step to the lexicographic successor, returning false once exhausted
    pub fn advance(&mut self) -> bool {
        while self.chosen.len() > self.fixed {
            let Some(current) = self.chosen.pop() else {
                break;
            };
            self.release(current);
            if let Some(next) = self.next_free(current + 1) {
                self.take(next);
                self.fill();
                return !self.exhausted;
            }
        }
        self.mark_exhausted();
        false
    }

    pub fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }
}
