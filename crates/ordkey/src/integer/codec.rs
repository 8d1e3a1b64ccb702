use crate::{Alphabet, Error, Result};

/// Longest integer part: head `A` or `z` followed by 26 digits.
pub const MAX_INTEGER_LEN: usize = 27;

/// Returns the total length of an integer part, head included, declared by
/// its head character.
///
/// Lowercase heads encode the non-negative side and grow with the letter
/// (`a` is 2, `z` is 27). Uppercase heads encode the negative side and
/// shrink with the letter (`A` is 27, `Z` is 2).
///
/// # Errors
///
/// Returns [`Error::InvalidHead`] if `head` is not an ASCII letter.
///
/// # Example
///
/// ```
/// use ordkey::integer_length;
///
/// assert_eq!(integer_length('a').unwrap(), 2);
/// assert_eq!(integer_length('z').unwrap(), 27);
/// assert_eq!(integer_length('Z').unwrap(), 2);
/// assert_eq!(integer_length('A').unwrap(), 27);
/// assert!(integer_length('0').is_err());
/// ```
pub fn integer_length(head: char) -> Result<usize> {
    match head {
        'a'..='z' | 'A'..='Z' => Ok(declared_length(head as u8)),
        _ => Err(Error::InvalidHead { head }),
    }
}

/// Integer-part length for a head already known to be an ASCII letter.
pub(crate) const fn declared_length(head: u8) -> usize {
    if head >= b'a' {
        (head - b'a') as usize + 2
    } else {
        (b'Z' - head) as usize + 2
    }
}

/// Returns the integer-part prefix of `key`.
///
/// # Errors
///
/// - [`Error::EmptyKey`] for `""`
/// - [`Error::InvalidHead`] if the first character is not a letter
/// - [`Error::TruncatedKey`] if `key` is shorter than the declared length
pub fn integer_part(key: &str) -> Result<&str> {
    let head = key.chars().next().ok_or(Error::EmptyKey)?;
    let len = integer_length(head)?;
    if key.len() < len {
        return Err(Error::truncated(key, len));
    }
    key.get(..len).ok_or_else(|| Error::non_ascii(key))
}

/// Splits `key` into its integer and fractional parts.
pub fn split_key(key: &str) -> Result<(&str, &str)> {
    let integer = integer_part(key)?;
    Ok((integer, &key[integer.len()..]))
}

/// Checks that `integer` is exactly as long as its head declares.
///
/// # Errors
///
/// Returns [`Error::MalformedIntegerPart`] on a length mismatch, plus the
/// head errors of [`integer_length`].
pub fn validate_integer(integer: &str) -> Result<()> {
    let head = integer.chars().next().ok_or(Error::EmptyKey)?;
    if integer.len() != integer_length(head)? {
        return Err(Error::MalformedIntegerPart {
            integer: integer.to_owned(),
        });
    }
    Ok(())
}

/// Whether `key` is the reserved sentinel: `A` followed by 26 zero digits.
///
/// The sentinel is the smallest encodable integer. It is never a usable key,
/// only a prefix for keys that sort below every other integer.
pub fn is_reserved(key: &str, alphabet: &Alphabet) -> bool {
    let zero = alphabet.zero();
    match key.as_bytes().split_first() {
        Some((&b'A', rest)) => {
            key.len() == MAX_INTEGER_LEN && rest.iter().all(|&b| b == zero)
        }
        _ => false,
    }
}
