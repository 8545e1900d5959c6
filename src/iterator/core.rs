use log::{debug, info, warn};

use crate::alphabet::{ALPHABET, AlphabetError, validate_equation_length};

use super::state::{MAX_POOL_SIZE, PermutationState};

/// Lazily yields every ordered arrangement of `length` distinct alphabet
/// symbols, in lexicographic order over the canonical alphabet order.
#[derive(Debug, Clone)]
pub struct PermutationIterator {
    symbols: Vec<char>,
    state: PermutationState,
}

impl PermutationIterator {
    /// # Errors
    ///
    /// Returns an error if the alphabet cannot supply `length` distinct symbols.
    pub fn new(length: usize) -> Result<Self, AlphabetError> {
        validate_equation_length(length)?;
        info!(
            "Initialized permutation iterator over {} symbols with length {}",
            ALPHABET.len(),
            length
        );
        Self::over(ALPHABET.to_vec(), length)
    }

    /// Only the arrangements whose first symbol is `ALPHABET[leading]`.
    ///
    /// Iterating every leading index in order reproduces [`PermutationIterator::new`].
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet cannot supply `length` distinct symbols.
    pub fn with_leading(length: usize, leading: usize) -> Result<Self, AlphabetError> {
        validate_equation_length(length)?;
        debug!(
            "Initialized permutation iterator with leading symbol index {}",
            leading
        );
        Ok(Self {
            state: PermutationState::with_prefix(ALPHABET.len(), length, &[leading]),
            symbols: ALPHABET.to_vec(),
        })
    }

    /// Arrangements over an arbitrary pool of symbols
    ///
    /// # Errors
    ///
    /// Returns an error if the pool holds more than [`MAX_POOL_SIZE`] symbols.
    pub fn over(symbols: Vec<char>, length: usize) -> Result<Self, AlphabetError> {
        if symbols.len() > MAX_POOL_SIZE {
            warn!(
                "Symbol pool of {} exceeds the {} supported",
                symbols.len(),
                MAX_POOL_SIZE
            );
            return Err(AlphabetError::PoolTooLarge {
                size: symbols.len(),
                max: MAX_POOL_SIZE,
            });
        }
        Ok(Self {
            state: PermutationState::new(symbols.len(), length),
            symbols,
        })
    }

    fn current(&self) -> Vec<char> {
        self.state
            .chosen
            .iter()
            .filter_map(|&index| self.symbols.get(index).copied())
            .collect()
    }
}

impl Iterator for PermutationIterator {
    type Item = Vec<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.exhausted {
            return None;
        }

        if self.state.started {
            if !self.state.advance() {
                return None;
            }
        } else {
            self.state.started = true;
            self.state.fill();
            if self.state.exhausted {
                return None;
            }
        }

        Some(self.current())
    }
}
