use log::{debug, warn};

use crate::alphabet::constants::MAX_EQUATION_LENGTH;
use crate::alphabet::errors::AlphabetError;

/// # Errors
///
/// Returns an error if the length is zero or larger than the number of
/// distinct symbols in the alphabet.
pub fn validate_equation_length(length: usize) -> Result<(), AlphabetError> {
    debug!("Validating equation length: {}", length);

    if length == 0 {
        warn!("Equation length is zero");
        return Err(AlphabetError::ZeroLength);
    }

    if length > MAX_EQUATION_LENGTH {
        warn!(
            "Equation length {} exceeds alphabet size {}",
            length, MAX_EQUATION_LENGTH
        );
        return Err(AlphabetError::LengthTooLarge {
            length,
            max: MAX_EQUATION_LENGTH,
        });
    }

    Ok(())
}
