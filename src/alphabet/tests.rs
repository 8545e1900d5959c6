use crate::alphabet::{
    ALPHABET, AlphabetError, DIGITS, MAX_EQUATION_LENGTH, OPERATORS, is_operator,
    validate_equation_length,
};

#[test]
fn test_alphabet_is_digits_then_operators() {
    let joined: String = DIGITS.iter().chain(OPERATORS.iter()).collect();
    let alphabet: String = ALPHABET.iter().collect();
    assert_eq!(alphabet, joined);
    assert_eq!(alphabet, "0123456789+-*/");
}

#[test]
fn test_alphabet_symbols_are_distinct() {
    for (i, a) in ALPHABET.iter().enumerate() {
        for b in ALPHABET.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_is_operator() {
    for op in OPERATORS {
        assert!(is_operator(op));
    }
    for digit in DIGITS {
        assert!(!is_operator(digit));
    }
    assert!(!is_operator('='));
}

#[test]
fn test_validate_equation_length_valid() {
    assert!(validate_equation_length(1).is_ok());
    assert!(validate_equation_length(7).is_ok());
    assert!(validate_equation_length(MAX_EQUATION_LENGTH).is_ok());
}

#[test]
fn test_validate_equation_length_invalid() {
    assert_eq!(validate_equation_length(0), Err(AlphabetError::ZeroLength));
    assert_eq!(
        validate_equation_length(15),
        Err(AlphabetError::LengthTooLarge {
            length: 15,
            max: 14
        })
    );
}
